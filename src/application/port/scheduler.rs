// SPDX-License-Identifier: MPL-2.0
//! Deferred timer port definition.
//!
//! The overlay never blocks. It asks a [`Scheduler`] to deliver a
//! [`TimerEvent`] after a delay and receives it back later as a
//! [`TimerFired`] message on its own execution context. Hosts that run
//! timers on another thread or task must forward the message through a
//! channel rather than touching overlay state from the timer.
//!
//! # Stale fires
//!
//! Cancelling a timer that is already on its way back cannot always stop the
//! delivery. Each owner keeps its pending [`TimerId`] in a [`TimerSlot`] and
//! only accepts a fire whose id matches, so a superseded timer is ignored.

use std::time::Duration;

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// What a timer means when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerEvent {
    /// Auto-hide the transport controls.
    HideControls,
    /// Clear the feedback pulse.
    ClearPulse,
    /// Sample the engine position.
    PollPosition,
}

/// A timer delivered back to the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFired {
    pub id: TimerId,
    pub event: TimerEvent,
}

/// Port for one-shot deferred timers.
pub trait Scheduler {
    /// Schedules `event` to fire after `delay`.
    ///
    /// Returns `None` when the timer facility is unavailable; callers degrade
    /// instead of failing.
    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> Option<TimerId>;

    /// Cancels a pending timer. Unknown or already fired ids are ignored.
    fn cancel(&mut self, id: TimerId);

    /// Capability check: whether `schedule` can currently succeed.
    fn is_available(&self) -> bool;
}

// =============================================================================
// TimerSlot
// =============================================================================

/// At most one pending timer owned by a component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerSlot {
    pending: Option<TimerId>,
}

impl TimerSlot {
    /// Cancels the pending timer, if any, and schedules a replacement.
    ///
    /// Returns true if the replacement was scheduled.
    pub fn rearm<S: Scheduler + ?Sized>(
        &mut self,
        scheduler: &mut S,
        delay: Duration,
        event: TimerEvent,
    ) -> bool {
        self.cancel(scheduler);
        self.pending = scheduler.schedule(delay, event);
        self.pending.is_some()
    }

    /// Cancels the pending timer, if any.
    pub fn cancel<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(id) = self.pending.take() {
            scheduler.cancel(id);
        }
    }

    /// Consumes a fire if it belongs to the pending timer.
    ///
    /// Returns false for stale or foreign ids, leaving the slot untouched.
    pub fn claim(&mut self, id: TimerId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn pending(&self) -> Option<TimerId> {
        self.pending
    }
}
