/// Abstraction over time sources.
/// Implementations: SystemClock (production), MockClock (testing).
pub trait TimeProvider {
    /// Milliseconds elapsed since an arbitrary epoch.
    fn now_ms(&self) -> u64;
}

/// System clock backed by std::time::Instant.
pub struct SystemClock {
    start: std::time::Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Mock clock for deterministic testing.
pub struct MockClock {
    current_ms: std::cell::Cell<u64>,
}

impl MockClock {
    pub fn new() -> Self {
        Self {
            current_ms: std::cell::Cell::new(0),
        }
    }

    pub fn set_time(&self, ms: u64) {
        self.current_ms.set(ms);
    }

    pub fn advance(&self, delta_ms: u64) {
        self.current_ms.set(self.current_ms.get() + delta_ms);
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for MockClock {
    fn now_ms(&self) -> u64 {
        self.current_ms.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_clock_advance() {
        let clock = MockClock::new();
        assert_eq!(clock.now_ms(), 0);
        clock.advance(3_000);
        assert_eq!(clock.now_ms(), 3_000);
        clock.advance(500);
        assert_eq!(clock.now_ms(), 3_500);
    }

    #[test]
    fn mock_clock_set() {
        let clock = MockClock::new();
        clock.set_time(5_000);
        assert_eq!(clock.now_ms(), 5_000);
    }

    #[test]
    fn system_clock_monotonic() {
        let clock = SystemClock::new();
        let t1 = clock.now_ms();
        let t2 = clock.now_ms();
        assert!(t2 >= t1);
    }
}
