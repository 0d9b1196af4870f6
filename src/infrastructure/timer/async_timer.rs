// SPDX-License-Identifier: MPL-2.0
//! Scheduler backed by Tokio timers.
//!
//! Each timer is a spawned task sleeping for the delay and then sending a
//! [`TimerFired`] on an unbounded channel. The overlay drains that channel on
//! its own context, so no overlay state is touched from the timer task.
//! Cancelling aborts the task; a fire already queued in the channel is then
//! rejected by the owner's stale-id check.

use crate::application::port::{Scheduler, TimerEvent, TimerFired, TimerId};
use std::collections::HashMap;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct TokioScheduler {
    tx: mpsc::UnboundedSender<TimerFired>,
    tasks: HashMap<TimerId, JoinHandle<()>>,
    next_id: u64,
}

impl TokioScheduler {
    /// Creates the scheduler and the receiving end of its fire channel.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerFired>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            tx,
            tasks: HashMap::new(),
            next_id: 0,
        };
        (scheduler, rx)
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> Option<TimerId> {
        let Ok(runtime) = Handle::try_current() else {
            log::warn!("No Tokio runtime on this thread, cannot schedule {:?}", event);
            return None;
        };
        self.tasks.retain(|_, task| !task.is_finished());

        self.next_id += 1;
        let id = TimerId::new(self.next_id);
        let tx = self.tx.clone();
        let task = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the overlay was torn down.
            let _ = tx.send(TimerFired { id, event });
        });
        self.tasks.insert(id, task);
        Some(id)
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(task) = self.tasks.remove(&id) {
            task.abort();
        }
    }

    fn is_available(&self) -> bool {
        Handle::try_current().is_ok()
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}

impl std::fmt::Debug for TokioScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioScheduler")
            .field("tasks", &self.tasks.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
