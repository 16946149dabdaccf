//! Repeating timer with a mutable period.
//!
//! The timer does not own a clock. Callers advance it with the elapsed time of
//! each fixed-timestep frame and get back how many times it fired, which keeps
//! it deterministic and easy to test.
//!
//! Changing the period tears the running interval down and starts a new one
//! from zero, so a stale period never fires again. A timer without a period is
//! stopped and never fires.

/// Cancellable repeating timer driven by elapsed milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalTimer {
    period_ms: Option<u32>,
    elapsed_ms: u32,
    /// Bumped every time the interval is recreated or cancelled.
    generation: u32,
}

impl IntervalTimer {
    /// A timer firing every `period_ms`, or a stopped timer for `None`.
    ///
    /// A zero period is treated as stopped.
    pub fn new(period_ms: Option<u32>) -> Self {
        Self {
            period_ms: period_ms.filter(|&p| p > 0),
            elapsed_ms: 0,
            generation: 0,
        }
    }

    pub fn stopped() -> Self {
        Self::new(None)
    }

    pub fn period_ms(&self) -> Option<u32> {
        self.period_ms
    }

    pub fn is_running(&self) -> bool {
        self.period_ms.is_some()
    }

    /// Changes with every restart or cancel; lets callers notice that the
    /// interval they were draining has been replaced.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Set a new period. A different period recreates the interval; setting
    /// the current period again keeps the running cadence.
    pub fn set_period(&mut self, period_ms: Option<u32>) {
        let period_ms = period_ms.filter(|&p| p > 0);
        if period_ms != self.period_ms {
            self.period_ms = period_ms;
            self.reset();
        }
    }

    /// Restart the cadence from zero while keeping the period.
    pub fn restart(&mut self) {
        self.reset();
    }

    /// Stop the timer; it will not fire until a period is set again.
    pub fn cancel(&mut self) {
        self.period_ms = None;
        self.reset();
    }

    fn reset(&mut self) {
        self.elapsed_ms = 0;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Advance by `elapsed_ms` and return how many times the timer fired.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let Some(period) = self.period_ms else {
            return 0;
        };

        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        let fired = self.elapsed_ms / period;
        self.elapsed_ms %= period;
        fired
    }
}

impl Default for IntervalTimer {
    fn default() -> Self {
        Self::stopped()
    }
}
