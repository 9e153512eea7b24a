use std::time::{Duration, Instant};

/// Tracks when the next game tick is due.
///
/// At most one tick is ever pending: arming the timer replaces any earlier
/// deadline, and a cancelled timer never fires.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct TickTimer {
    deadline: Option<Instant>,
}

impl TickTimer {
    pub(crate) fn new() -> TickTimer {
        TickTimer::default()
    }

    /// Schedule the next tick for `period` after `now`
    pub(crate) fn arm(&mut self, now: Instant, period: Duration) {
        self.deadline = Some(now + period);
    }

    /// Arm the timer if it isn't already armed
    pub(crate) fn ensure_armed(&mut self, now: Instant, period: Duration) {
        if !self.is_armed() {
            self.arm(now, period);
        }
    }

    pub(crate) fn cancel(&mut self) {
        self.deadline = None;
    }

    pub(crate) fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Return how long until the next tick is due, or `None` if no tick is
    /// scheduled
    pub(crate) fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    pub(crate) fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|d| d <= now)
    }
}
