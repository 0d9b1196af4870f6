// SPDX-License-Identifier: MPL-2.0
//! Transient feedback icon with its own auto-clear timer.
//!
//! Works regardless of controls visibility: a seek pressed while the controls
//! are hidden still flashes its icon.

use crate::application::port::{Scheduler, TimerEvent, TimerId, TimerSlot};
use crate::domain::overlay::{PulseDuration, PulseToken};

/// Feedback pulse state.
#[derive(Debug, Clone)]
pub struct PulseIndicator {
    token: PulseToken,
    duration: PulseDuration,
    timer: TimerSlot,
}

impl PulseIndicator {
    #[must_use]
    pub fn new(duration: PulseDuration) -> Self {
        Self {
            token: PulseToken::None,
            duration,
            timer: TimerSlot::default(),
        }
    }

    /// Shows `token`, replacing any current pulse and restarting the clear timer.
    ///
    /// Triggering [`PulseToken::None`] behaves like [`reset`](Self::reset).
    pub fn trigger<S: Scheduler + ?Sized>(&mut self, token: PulseToken, scheduler: &mut S) {
        if token.is_none() {
            self.reset(scheduler);
            return;
        }
        self.token = token;
        if !self
            .timer
            .rearm(scheduler, self.duration.as_duration(), TimerEvent::ClearPulse)
        {
            log::warn!("Timer facility unavailable, pulse {:?} will not auto-clear", token);
        }
    }

    /// Handles a fired clear timer. Returns true if the pulse was cleared.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if !self.timer.claim(id) {
            log::debug!("Ignoring stale pulse timer {}", id.value());
            return false;
        }
        let changed = !self.token.is_none();
        self.token = PulseToken::None;
        changed
    }

    /// Clears the pulse now and drops the pending timer.
    pub fn reset<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.timer.cancel(scheduler);
        self.token = PulseToken::None;
    }

    #[must_use]
    pub fn current(&self) -> PulseToken {
        self.token
    }

    #[must_use]
    pub fn has_pending_timer(&self) -> bool {
        self.timer.is_pending()
    }
}

impl Default for PulseIndicator {
    fn default() -> Self {
        Self::new(PulseDuration::default())
    }
}
