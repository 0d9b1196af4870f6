// SPDX-License-Identifier: MPL-2.0
//! Deterministic scheduler driven by a simulated clock.
//!
//! Nothing fires on its own: the host (or a test) moves the clock forward and
//! receives the timers that fell due, earliest first. Timers with the same
//! deadline fire in scheduling order.

use crate::application::port::{Scheduler, TimerEvent, TimerFired, TimerId};
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<(Duration, TimerId), TimerEvent>,
    deadlines: HashMap<TimerId, Duration>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulated time elapsed since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of scheduled, not yet fired or cancelled timers.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Deadline of the next timer to fire.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Pops the earliest timer due at or before `until`, moving the clock to
    /// its deadline.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerFired> {
        let (&(deadline, id), _) = self.queue.first_key_value()?;
        if deadline > until {
            return None;
        }
        let event = self.queue.remove(&(deadline, id))?;
        self.deadlines.remove(&id);
        self.now = self.now.max(deadline);
        Some(TimerFired { id, event })
    }

    /// Moves the clock forward without firing anything.
    pub fn advance_clock_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Moves the clock forward by `by` and returns every timer that fell due.
    ///
    /// Timers scheduled while handling the returned fires are not included;
    /// use [`pop_due`](Self::pop_due) when handlers re-arm.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerFired> {
        let until = self.now.saturating_add(by);
        let mut fired = Vec::new();
        while let Some(timer) = self.pop_due(until) {
            fired.push(timer);
        }
        self.advance_clock_to(until);
        fired
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> Option<TimerId> {
        self.next_id += 1;
        let id = TimerId::new(self.next_id);
        let deadline = self.now.saturating_add(delay);
        self.queue.insert((deadline, id), event);
        self.deadlines.insert(id, deadline);
        Some(id)
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(deadline) = self.deadlines.remove(&id) {
            self.queue.remove(&(deadline, id));
        }
    }

    fn is_available(&self) -> bool {
        true
    }
}
