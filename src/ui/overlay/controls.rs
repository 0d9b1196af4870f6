// SPDX-License-Identifier: MPL-2.0
//! Transport controls visibility with auto-hide.
//!
//! Every `show()` restarts the hide timer, so controls stay up until the
//! configured delay has elapsed since the *last* interaction.

use crate::application::port::{Scheduler, TimerEvent, TimerId, TimerSlot};
use crate::domain::overlay::{ControlsVisibility, HideDelay};

/// Effects produced by visibility changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Visibility changed.
    VisibilityChanged(bool),
}

/// Controls visibility state machine.
#[derive(Debug, Clone)]
pub struct ControlsController {
    visibility: ControlsVisibility,
    hide_delay: HideDelay,
    timer: TimerSlot,
    /// False once a hide timer could not be scheduled.
    auto_hide: bool,
}

impl ControlsController {
    #[must_use]
    pub fn new(hide_delay: HideDelay) -> Self {
        Self {
            visibility: ControlsVisibility::Hidden,
            hide_delay,
            timer: TimerSlot::default(),
            auto_hide: true,
        }
    }

    /// Shows the controls and restarts the auto-hide timer.
    pub fn show<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) -> Effect {
        let was_visible = self.visibility.is_visible();
        self.visibility = ControlsVisibility::Visible;

        let scheduled = self.timer.rearm(
            scheduler,
            self.hide_delay.as_duration(),
            TimerEvent::HideControls,
        );
        if scheduled != self.auto_hide {
            if scheduled {
                log::info!("Controls auto-hide restored");
            } else {
                log::warn!("Timer facility unavailable, controls will not auto-hide");
            }
            self.auto_hide = scheduled;
        }

        if was_visible {
            Effect::None
        } else {
            Effect::VisibilityChanged(true)
        }
    }

    /// Hides the controls immediately and drops the pending timer.
    pub fn hide<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) -> Effect {
        self.timer.cancel(scheduler);
        if self.visibility.is_visible() {
            self.visibility = ControlsVisibility::Hidden;
            Effect::VisibilityChanged(false)
        } else {
            Effect::None
        }
    }

    /// Handles a fired hide timer. Stale ids are ignored.
    pub fn on_timer(&mut self, id: TimerId) -> Effect {
        if !self.timer.claim(id) {
            log::debug!("Ignoring stale hide timer {}", id.value());
            return Effect::None;
        }
        if self.visibility.is_visible() {
            self.visibility = ControlsVisibility::Hidden;
            Effect::VisibilityChanged(false)
        } else {
            Effect::None
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    /// Whether the last `show()` managed to arm the hide timer.
    #[must_use]
    pub fn auto_hide_enabled(&self) -> bool {
        self.auto_hide
    }

    #[must_use]
    pub fn has_pending_timer(&self) -> bool {
        self.timer.is_pending()
    }
}

impl Default for ControlsController {
    fn default() -> Self {
        Self::new(HideDelay::default())
    }
}
