//! The spin session state machine.
//!
//! [`state`] holds the pure reducer: one immutable [`SessionState`]
//! transformed by [`state::apply`] given an event. [`Sequencer`] owns the
//! mutable cell plus every resource a transition touches (entropy, clock,
//! cue emitter, armed deadline) and executes the effects the reducer
//! requests.

pub mod state;

mod sequencer;

pub use sequencer::{Sequencer, SessionParams};
pub use state::{Phase, SessionEvent, SessionState};
