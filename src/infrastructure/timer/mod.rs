// SPDX-License-Identifier: MPL-2.0
//! Timer adapters implementing [`Scheduler`].
//!
//! - [`ManualScheduler`]: simulated clock, advanced explicitly
//! - [`TokioScheduler`]: real timers on the current Tokio runtime
//! - [`NoTimers`]: no timer facility at all

mod async_timer;
mod manual;

pub use async_timer::TokioScheduler;
pub use manual::ManualScheduler;

use crate::application::port::{Scheduler, TimerEvent, TimerId};
use std::time::Duration;

/// Scheduler for hosts without a timer facility.
///
/// Every `schedule` call fails, so the overlay runs degraded: controls never
/// auto-hide, pulses stay until replaced, and the position is only sampled
/// on input.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTimers;

impl Scheduler for NoTimers {
    fn schedule(&mut self, _delay: Duration, _event: TimerEvent) -> Option<TimerId> {
        None
    }

    fn cancel(&mut self, _id: TimerId) {}

    fn is_available(&self) -> bool {
        false
    }
}
