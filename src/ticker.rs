//! Fixed-interval ticker that turns wall time into whole engine ticks

use std::time::{Duration, Instant};

/// Default time between ticks
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(10);

/// Most ticks delivered in one call. A host that stalls (suspended terminal,
/// slow render) skips the backlog instead of fast-forwarding through it.
pub const MAX_CATCH_UP: u32 = 10;

pub struct FixedTicker {
    interval: Duration,
    next: Instant,
}

impl FixedTicker {
    /// First tick is due immediately
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            next: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start a new schedule: the next tick is due at `now`
    pub fn restart(&mut self, now: Instant) {
        self.next = now;
    }

    /// Whole ticks that have come due by `now`
    pub fn due(&mut self, now: Instant) -> u32 {
        if now < self.next {
            return 0;
        }
        let behind = now.duration_since(self.next);
        let elapsed = (behind.as_nanos() / self.interval.as_nanos()) as u64 + 1;
        if elapsed > MAX_CATCH_UP as u64 {
            self.next = now + self.interval;
            return MAX_CATCH_UP;
        }
        self.next += self.interval * elapsed as u32;
        elapsed as u32
    }

    /// Time left until the next tick is due
    pub fn until_next(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }
}
