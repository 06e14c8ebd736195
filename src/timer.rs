//! Cancellable single-shot deadlines.
//!
//! Deferred actions (the clear-hold prompt, the idle reminder) are stored as
//! explicit deadline values and checked against an injected clock each tick,
//! so the frame loop owns all timing and tests can drive time directly. At
//! most one deadline per kind is ever pending.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::time::{Duration, Instant};

/// A single pending deadline, or nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deadline {
    due: Option<Instant>,
}

impl Deadline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule (or reschedule) the deadline `delay` from `now`.
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.due = Some(now + delay);
    }

    /// Schedule only if nothing is pending. Returns true if this call armed it.
    pub fn arm_if_unarmed(&mut self, now: Instant, delay: Duration) -> bool {
        if self.due.is_some() {
            return false;
        }
        self.arm(now, delay);
        true
    }

    /// Cancel any pending deadline.
    pub fn disarm(&mut self) {
        self.due = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.due.is_some()
    }

    /// True exactly once when `now` has reached the deadline; firing disarms.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}
