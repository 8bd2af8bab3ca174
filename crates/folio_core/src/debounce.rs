//! Cancel-and-reschedule debouncing for bursty input.
//!
//! # Responsibility
//! - Hold at most one pending scheduled task with a due instant.
//! - Replace the pending task whenever a new one is scheduled.
//!
//! # Invariants
//! - Scheduling always cancels the previous pending task.
//! - A task fires at most once, and never before `scheduled_at + quiet`.
//! - Time is supplied by the caller; this module never reads the clock.

use std::time::{Duration, Instant};

/// Handle identifying one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

#[derive(Debug)]
struct PendingTask<T> {
    id: TaskId,
    due_at: Instant,
    payload: T,
}

/// Coalesces a burst of scheduled payloads into the last one.
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet: Duration,
    next_id: u64,
    pending: Option<PendingTask<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            next_id: 0,
            pending: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// Schedules `payload` to fire once input has been quiet for the quiet
    /// period, cancelling any earlier pending task.
    pub fn schedule(&mut self, payload: T, now: Instant) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        self.pending = Some(PendingTask {
            id,
            due_at: now + self.quiet,
            payload,
        });
        id
    }

    /// Cancels the task identified by `id` if it is still pending.
    ///
    /// Returns `false` when the task already fired or was superseded.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let is_current = self.pending.as_ref().is_some_and(|task| task.id == id);
        if is_current {
            self.pending = None;
        }
        is_current
    }

    /// Returns the pending payload once it is due, clearing it.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let is_due = self
            .pending
            .as_ref()
            .is_some_and(|task| now >= task.due_at);
        if is_due {
            self.take_pending()
        } else {
            None
        }
    }

    /// Removes and returns the pending payload regardless of its due time.
    pub fn take_pending(&mut self) -> Option<T> {
        self.pending.take().map(|task| task.payload)
    }

    pub fn pending_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|task| task.due_at)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
