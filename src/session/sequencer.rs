//! Sequencer driving the spin session.

use std::rc::Rc;

use anyhow::{Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::confetti::{self, DEFAULT_PALETTE};
use crate::pool::NamePool;
use crate::selector;
use crate::session::state::{Effect, Phase, SessionEvent, SessionState, apply};
use crate::traits::audio::CueEmitter;
use crate::traits::time::TimeProvider;

/// Tuning for one sequencer instance. Defaults: 2 winners, a 3 s spin,
/// 50 confetti pieces living 5 s.
#[derive(Debug, Clone)]
pub struct SessionParams {
    pub winner_count: usize,
    pub spin_duration_ms: u64,
    pub confetti_count: usize,
    pub confetti_lifetime_ms: u64,
    pub palette: Vec<String>,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            winner_count: 2,
            spin_duration_ms: 3_000,
            confetti_count: 50,
            confetti_lifetime_ms: 5_000,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeadlineKind {
    Reveal,
    ConfettiExpiry,
}

/// An armed one-shot deadline. The generation ties it to the arming
/// transition; a mismatch means the deadline is stale and must not fire.
#[derive(Debug, Clone, Copy)]
struct Deadline {
    kind: DeadlineKind,
    fire_at_ms: u64,
    generation: u64,
}

/// Owns one widget instance's session: the state cell, the entropy
/// source, the clock, the cue emitter, and the armed deadline.
///
/// All transitions go through the pure [`apply`] reducer; this type only
/// raises events and executes the effects the reducer returns. Deadlines
/// are plain values checked in [`Sequencer::update`] against the injected
/// clock, so dropping the sequencer cancels them implicitly and
/// [`Sequencer::abort`] cancels them explicitly.
pub struct Sequencer {
    pool: NamePool,
    params: SessionParams,
    time: Rc<dyn TimeProvider>,
    cues: Box<dyn CueEmitter>,
    rng: StdRng,
    state: SessionState,
    /// Selection drawn at start, published at the reveal.
    pending: Vec<String>,
    armed: Option<Deadline>,
    generation: u64,
}

impl Sequencer {
    /// Create a sequencer seeded from the operating system.
    pub fn new(
        pool: NamePool,
        params: SessionParams,
        time: Rc<dyn TimeProvider>,
        cues: Box<dyn CueEmitter>,
    ) -> Result<Self> {
        Self::with_rng(pool, params, time, cues, StdRng::from_os_rng())
    }

    /// Create a sequencer with an explicit entropy source. Tests use this
    /// with a seeded rng for deterministic draws.
    pub fn with_rng(
        pool: NamePool,
        params: SessionParams,
        time: Rc<dyn TimeProvider>,
        cues: Box<dyn CueEmitter>,
        rng: StdRng,
    ) -> Result<Self> {
        if params.winner_count == 0 {
            bail!("winner count must be at least 1");
        }
        if params.confetti_count == 0 {
            bail!("confetti count must be at least 1");
        }
        if params.palette.is_empty() {
            bail!("confetti palette is empty");
        }
        Ok(Self {
            pool,
            params,
            time,
            cues,
            rng,
            state: SessionState::idle(),
            pending: Vec::new(),
            armed: None,
            generation: 0,
        })
    }

    /// Read-only snapshot for the rendering layer.
    pub fn snapshot(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Begin a spin. Ignored while one is already in progress; from the
    /// revealed phase it begins a fresh session. The selection is drawn
    /// and the spin cue emitted synchronously, strictly before the reveal
    /// deadline is armed.
    pub fn start(&mut self) {
        if self.state.phase == Phase::Spinning {
            debug!("start ignored: spin already in progress");
            return;
        }
        let winners = selector::select(self.pool.names(), self.params.winner_count, &mut self.rng);
        debug!(count = winners.len(), "selection drawn");
        self.pending = winners;
        self.dispatch(SessionEvent::Start);
    }

    /// Return from the revealed phase to idle. A no-op in any other
    /// phase.
    pub fn reset(&mut self) {
        if self.state.phase != Phase::Revealed {
            debug!(phase = ?self.state.phase, "reset ignored");
        }
        self.dispatch(SessionEvent::Reset);
    }

    /// Cancel any armed deadline and drop back to idle. The teardown
    /// path: after this, no pending transition can fire.
    pub fn abort(&mut self) {
        self.pending.clear();
        self.dispatch(SessionEvent::Abort);
    }

    /// Poll the armed deadline against the clock, firing the transition
    /// it was armed for if due. Call from the owner's event loop.
    pub fn update(&mut self) {
        let Some(deadline) = self.armed else {
            return;
        };
        if self.time.now_ms() < deadline.fire_at_ms {
            return;
        }
        self.armed = None;
        if deadline.generation != self.generation {
            debug!("stale deadline dropped");
            return;
        }
        match deadline.kind {
            DeadlineKind::Reveal => {
                let winners = std::mem::take(&mut self.pending);
                let confetti = confetti::generate(
                    self.params.confetti_count,
                    &self.params.palette,
                    &mut self.rng,
                );
                self.dispatch(SessionEvent::RevealDue { winners, confetti });
            }
            DeadlineKind::ConfettiExpiry => self.dispatch(SessionEvent::ConfettiExpired),
        }
    }

    fn dispatch(&mut self, event: SessionEvent) {
        let (next, effects) = apply(&self.state, event);
        self.state = next;
        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::EmitCue(cue) => {
                // Best-effort: audio must never interrupt the machine.
                if let Err(e) = self.cues.emit(cue) {
                    warn!("audio cue failed: {e}");
                }
            }
            Effect::ArmReveal => self.arm(DeadlineKind::Reveal, self.params.spin_duration_ms),
            Effect::ArmConfettiExpiry => {
                self.arm(DeadlineKind::ConfettiExpiry, self.params.confetti_lifetime_ms)
            }
            Effect::DisarmAll => {
                self.armed = None;
                self.generation += 1;
            }
        }
    }

    fn arm(&mut self, kind: DeadlineKind, delay_ms: u64) {
        self.generation += 1;
        self.armed = Some(Deadline {
            kind,
            fire_at_ms: self.time.now_ms() + delay_ms,
            generation: self.generation,
        });
    }
}
