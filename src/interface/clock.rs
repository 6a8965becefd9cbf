use std::time::{Duration, Instant};

/// Monotonic seconds source used by the mode timers
pub trait Clock {
    /// Whole seconds since an arbitrary fixed point; never decreases
    fn now_seconds(&self) -> u64;
}

/// Real clock counting from its creation, minus any time spent paused
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
    paused_at: Option<Instant>,
    paused_total: Duration,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::started_at(Instant::now())
    }

    fn started_at(start: Instant) -> Self {
        Self {
            start,
            paused_at: None,
            paused_total: Duration::ZERO,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Stop counting; the timers hold still until `resume`
    pub fn pause(&mut self) {
        self.pause_at(Instant::now());
    }

    pub fn resume(&mut self) {
        self.resume_at(Instant::now());
    }

    fn pause_at(&mut self, now: Instant) {
        if self.paused_at.is_none() {
            self.paused_at = Some(now);
        }
    }

    fn resume_at(&mut self, now: Instant) {
        if let Some(paused_at) = self.paused_at.take() {
            self.paused_total += now.saturating_duration_since(paused_at);
        }
    }

    fn elapsed_at(&self, now: Instant) -> Duration {
        let end = self.paused_at.unwrap_or(now);
        end.saturating_duration_since(self.start)
            .saturating_sub(self.paused_total)
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_seconds(&self) -> u64 {
        self.elapsed_at(Instant::now()).as_secs()
    }
}

/// Clock that only moves when told to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManualClock {
    seconds: u64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, seconds: u64) {
        self.seconds += seconds;
    }

    /// Jump forward to `seconds`; earlier values are ignored
    pub fn set(&mut self, seconds: u64) {
        self.seconds = self.seconds.max(seconds);
    }
}

impl Clock for ManualClock {
    fn now_seconds(&self) -> u64 {
        self.seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_never_goes_back() {
        let mut clock = ManualClock::new();
        clock.advance(10);
        clock.set(4);
        assert_eq!(clock.now_seconds(), 10);
        clock.set(30);
        assert_eq!(clock.now_seconds(), 30);
    }

    #[test]
    fn test_system_clock_skips_paused_time() {
        let t0 = Instant::now();
        let at = |secs| t0 + Duration::from_secs(secs);
        let mut clock = SystemClock::started_at(t0);

        clock.pause_at(at(5));
        assert!(clock.is_paused());
        assert_eq!(clock.elapsed_at(at(60)).as_secs(), 5);

        // A second pause does not move the pause point
        clock.pause_at(at(30));
        clock.resume_at(at(65));
        assert!(!clock.is_paused());
        assert_eq!(clock.elapsed_at(at(70)).as_secs(), 10);

        // Resuming while running changes nothing
        clock.resume_at(at(80));
        assert_eq!(clock.elapsed_at(at(90)).as_secs(), 30);
    }
}
