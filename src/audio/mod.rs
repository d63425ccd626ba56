//! Audio cue synthesis and playback.
//!
//! This module provides:
//! - [`cue`]: renders the spin and celebration cues as mono PCM
//! - [`KiraCueEmitter`]: plays the rendered cues through kira

pub mod cue;
mod driver;

pub use driver::KiraCueEmitter;
