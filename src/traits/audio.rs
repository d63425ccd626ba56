use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;

/// A short synthesized sound tied to a specific state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Rising sweep played when a spin starts.
    Spin,
    /// Ascending tone triplet played at the reveal.
    Celebration,
}

/// Abstraction over audio cue backends.
/// Implementations: KiraCueEmitter (kira), NullCueEmitter (headless),
/// MockCueEmitter (testing).
pub trait CueEmitter {
    /// Play the given cue. Emission is best-effort: callers log and
    /// ignore failures rather than propagating them.
    fn emit(&mut self, cue: Cue) -> Result<()>;
}

/// No-op emitter for environments without audio output.
pub struct NullCueEmitter;

impl CueEmitter for NullCueEmitter {
    fn emit(&mut self, _cue: Cue) -> Result<()> {
        Ok(())
    }
}

/// Records emitted cues for deterministic tests.
///
/// The log is shared: clone the handle from [`MockCueEmitter::log`]
/// before handing the emitter to a sequencer.
pub struct MockCueEmitter {
    emitted: Rc<RefCell<Vec<Cue>>>,
}

impl MockCueEmitter {
    pub fn new() -> Self {
        Self {
            emitted: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Shared handle to the emission log.
    pub fn log(&self) -> Rc<RefCell<Vec<Cue>>> {
        Rc::clone(&self.emitted)
    }
}

impl Default for MockCueEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl CueEmitter for MockCueEmitter {
    fn emit(&mut self, cue: Cue) -> Result<()> {
        self.emitted.borrow_mut().push(cue);
        Ok(())
    }
}
