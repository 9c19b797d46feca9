//! Deferred layout scheduling with debounce.
//!
//! Holds at most one pending layout deadline. Scheduling again replaces the
//! pending deadline, so a burst of resize events collapses into a single pass
//! that runs once the burst has been quiet for the debounce delay.
//!
//! Time is passed in by the caller rather than read from a clock, so the
//! event loop drives it with `Instant::now()` and tests drive it with
//! synthetic instants.

use std::time::{Duration, Instant};

/// Single-slot layout timer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutScheduler {
    pending: Option<Instant>,
}

impl LayoutScheduler {
    /// Create an idle scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a layout pass `delay` after `now`, cancelling any pending one.
    ///
    /// Returns true if a pending pass was cancelled.
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> bool {
        self.pending.replace(now + delay).is_some()
    }

    /// Consume the pending pass if it is due at `now`.
    ///
    /// Returns true exactly once per scheduled pass.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(deadline) if deadline <= now => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the pending pass, zero if overdue.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
