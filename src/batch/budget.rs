//! Wall-clock budget for a submission batch.

use std::time::{Duration, Instant};

/// Source of the current time.
///
/// The batch only ever asks "how long since we started", so tests can drive it
/// with a clock that jumps forward on demand.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> Instant;
}

/// The real monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A time limit measured from the moment it was started.
pub struct TimeBudget<'a, C: Clock> {
    clock: &'a C,
    started: Instant,
    limit: Duration,
}

impl<'a, C: Clock> TimeBudget<'a, C> {
    /// Starts the budget now.
    pub fn start(clock: &'a C, limit: Duration) -> Self {
        Self {
            clock,
            started: clock.now(),
            limit,
        }
    }

    /// Time spent since the budget started.
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.started)
    }

    /// Whether strictly more than the limit has passed.
    pub fn exceeded(&self) -> bool {
        self.elapsed() > self.limit
    }
}
