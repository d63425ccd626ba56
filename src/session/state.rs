//! Session state and the pure transition function.

use crate::confetti::ConfettiPiece;
use crate::traits::audio::Cue;

/// Phase of one spin session. A closed loop with no terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Spinning,
    Revealed,
}

/// Observable snapshot handed to the rendering layer.
///
/// Winners are non-empty only in [`Phase::Revealed`]; the confetti
/// ensemble is non-empty only while the celebration is animating.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub phase: Phase,
    pub winners: Vec<String>,
    pub confetti: Vec<ConfettiPiece>,
}

impl SessionState {
    pub fn idle() -> Self {
        Self {
            phase: Phase::Idle,
            winners: Vec::new(),
            confetti: Vec::new(),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::idle()
    }
}

/// Events driving the session state machine.
///
/// External triggers (`Start`, `Reset`, `Abort`) come from the owner;
/// `RevealDue` and `ConfettiExpired` are raised by the sequencer when an
/// armed deadline fires. `RevealDue` carries the selection drawn at start
/// and the freshly generated ensemble so the reducer stays free of
/// entropy.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Start,
    RevealDue {
        winners: Vec<String>,
        confetti: Vec<ConfettiPiece>,
    },
    ConfettiExpired,
    Reset,
    Abort,
}

/// Side effects requested by a transition, executed by the sequencer in
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    EmitCue(Cue),
    ArmReveal,
    ArmConfettiExpiry,
    DisarmAll,
}

/// The pure transition function.
///
/// Undefined (state, event) pairs leave the state unchanged and request
/// no effects: a second `Start` mid-spin, a `Reset` outside the reveal,
/// and any stale deadline event are all absorbed here.
pub fn apply(state: &SessionState, event: SessionEvent) -> (SessionState, Vec<Effect>) {
    match (state.phase, event) {
        // Re-entrancy guard: a spin is already in progress.
        (Phase::Spinning, SessionEvent::Start) => (state.clone(), Vec::new()),
        // From Idle, or re-start from Revealed: a fresh session.
        (_, SessionEvent::Start) => (
            SessionState {
                phase: Phase::Spinning,
                winners: Vec::new(),
                confetti: Vec::new(),
            },
            vec![Effect::EmitCue(Cue::Spin), Effect::ArmReveal],
        ),
        (Phase::Spinning, SessionEvent::RevealDue { winners, confetti }) => (
            SessionState {
                phase: Phase::Revealed,
                winners,
                confetti,
            },
            vec![Effect::EmitCue(Cue::Celebration), Effect::ArmConfettiExpiry],
        ),
        (_, SessionEvent::RevealDue { .. }) => (state.clone(), Vec::new()),
        (Phase::Revealed, SessionEvent::ConfettiExpired) => (
            SessionState {
                confetti: Vec::new(),
                ..state.clone()
            },
            Vec::new(),
        ),
        (_, SessionEvent::ConfettiExpired) => (state.clone(), Vec::new()),
        (Phase::Revealed, SessionEvent::Reset) => (SessionState::idle(), vec![Effect::DisarmAll]),
        (_, SessionEvent::Reset) => (state.clone(), Vec::new()),
        (_, SessionEvent::Abort) => (SessionState::idle(), vec![Effect::DisarmAll]),
    }
}
