//! Cue waveform synthesis.
//!
//! Both cues are short mono tones shaped by an exponentially decaying
//! envelope. The spin cue sweeps 200 Hz to 800 Hz over half a second and
//! rings out for 1.5 s; the celebration cue steps through 400/600/800 Hz
//! and rings out for 0.8 s.

use crate::traits::audio::Cue;

/// Sample rate of all rendered cues.
pub const SAMPLE_RATE: u32 = 44_100;

const SPIN_START_HZ: f32 = 200.0;
const SPIN_END_HZ: f32 = 800.0;
const SPIN_SWEEP_SECS: f32 = 0.5;
const SPIN_LENGTH_SECS: f32 = 1.5;
const SPIN_GAIN: f32 = 0.3;

const CELEBRATION_STEPS: [(f32, f32); 3] = [(0.0, 400.0), (0.1, 600.0), (0.2, 800.0)];
const CELEBRATION_LENGTH_SECS: f32 = 0.8;
const CELEBRATION_GAIN: f32 = 0.5;

/// Envelopes decay toward this level instead of zero, matching
/// exponential-ramp behavior.
const ENVELOPE_FLOOR: f32 = 0.01;

/// Render a cue as mono f32 PCM at [`SAMPLE_RATE`].
pub fn render(cue: Cue) -> Vec<f32> {
    match cue {
        Cue::Spin => render_tone(SPIN_LENGTH_SECS, SPIN_GAIN, spin_frequency),
        Cue::Celebration => {
            render_tone(CELEBRATION_LENGTH_SECS, CELEBRATION_GAIN, celebration_frequency)
        }
    }
}

/// Exponential sweep from the start to the end frequency, holding the
/// end frequency once the sweep completes.
fn spin_frequency(t: f32) -> f32 {
    if t >= SPIN_SWEEP_SECS {
        return SPIN_END_HZ;
    }
    SPIN_START_HZ * (SPIN_END_HZ / SPIN_START_HZ).powf(t / SPIN_SWEEP_SECS)
}

/// Piecewise-constant tone steps.
fn celebration_frequency(t: f32) -> f32 {
    let mut freq = CELEBRATION_STEPS[0].1;
    for &(at, hz) in &CELEBRATION_STEPS {
        if t >= at {
            freq = hz;
        }
    }
    freq
}

/// Phase-accumulation sine oscillator under an exponential-decay envelope
/// running from `gain` down to [`ENVELOPE_FLOOR`] over the full length.
fn render_tone(length_secs: f32, gain: f32, frequency_at: impl Fn(f32) -> f32) -> Vec<f32> {
    let sample_count = (length_secs * SAMPLE_RATE as f32) as usize;
    let dt = 1.0 / SAMPLE_RATE as f32;
    let mut samples = Vec::with_capacity(sample_count);
    let mut phase = 0.0_f32;
    for i in 0..sample_count {
        let t = i as f32 * dt;
        let envelope = gain * (ENVELOPE_FLOOR / gain).powf(t / length_secs);
        phase += std::f32::consts::TAU * frequency_at(t) * dt;
        if phase > std::f32::consts::TAU {
            phase -= std::f32::consts::TAU;
        }
        samples.push(envelope * phase.sin());
    }
    samples
}
