//! Cancellable single-slot timer.
//!
//! The debouncer never reads a clock. Callers pass `now` into every call, so a
//! test can drive it with a base `Instant` plus offsets.

use std::time::{Duration, Instant};

#[derive(Debug)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Holds at most one scheduled value and releases it once its quiet period
/// has passed without being rescheduled.
#[derive(Debug)]
pub struct Debouncer<T> {
    pending: Option<Pending<T>>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `value` to fire after `delay`, replacing anything pending.
    ///
    /// Returns true if an earlier value was superseded.
    pub fn schedule(&mut self, value: T, delay: Duration, now: Instant) -> bool {
        let deadline = now.checked_add(delay).unwrap_or(now);
        self.pending.replace(Pending { value, deadline }).is_some()
    }

    /// Drops the pending value without firing it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|pending| pending.value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Releases the pending value if its deadline is at or before `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if pending.deadline <= now => self.cancel(),
            _ => None,
        }
    }
}
