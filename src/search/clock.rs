//! Time sources for deadline checks
//!
//! The search only ever asks "how much time is left?". Injecting the
//! answer lets tests drive timeouts deterministically with `SteppedClock`
//! instead of sleeping.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Monotonic "time remaining until deadline" query
pub trait Clock {
    fn time_left(&self) -> Duration;
}

/// Wall-clock deadline measured from construction
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    deadline: Option<Instant>,
}

impl Countdown {
    /// Start a countdown of `budget` from now
    #[must_use]
    pub fn new(budget: Duration) -> Self {
        Self {
            deadline: Instant::now().checked_add(budget),
        }
    }
}

impl Clock for Countdown {
    fn time_left(&self) -> Duration {
        match self.deadline {
            Some(deadline) => deadline.saturating_duration_since(Instant::now()),
            None => Duration::MAX,
        }
    }
}

/// Never expires
#[derive(Debug, Clone, Copy, Default)]
pub struct Unlimited;

impl Clock for Unlimited {
    fn time_left(&self) -> Duration {
        Duration::MAX
    }
}

/// Fake clock: every poll burns a fixed `step` of the budget.
///
/// Makes "the deadline hits after N node expansions" reproducible.
#[derive(Debug)]
pub struct SteppedClock {
    remaining: Cell<Duration>,
    step: Duration,
    polls: Cell<u64>,
}

impl SteppedClock {
    #[must_use]
    pub fn new(budget: Duration, step: Duration) -> Self {
        Self {
            remaining: Cell::new(budget),
            step,
            polls: Cell::new(0),
        }
    }

    /// Number of times the clock has been read
    #[must_use]
    pub fn polls(&self) -> u64 {
        self.polls.get()
    }
}

impl Clock for SteppedClock {
    fn time_left(&self) -> Duration {
        let left = self.remaining.get();
        self.remaining.set(left.saturating_sub(self.step));
        self.polls.set(self.polls.get() + 1);
        left
    }
}
