// SPDX-License-Identifier: MPL-2.0
//! Overlay session: the components bound to one playback.
//!
//! The session owns the engine handle, the scheduler and the three stateful
//! components. Its lifetime is explicit: [`start`](OverlaySession::start)
//! samples the engine, shows the controls and arms the position poll;
//! [`stop`](OverlaySession::stop) cancels every outstanding timer. Fires that
//! still arrive after `stop()` are dropped.

use super::controls::{ControlsController, Effect};
use super::pulse::PulseIndicator;
use super::router::{FocusRouter, RouteContext, RouteOutcome};
use super::view::OverlayView;
use crate::application::port::{PlaybackEngine, Scheduler, TimerEvent, TimerFired, TimerSlot};
use crate::config::OverlaySettings;
use crate::domain::error::EngineError;
use crate::domain::overlay::{DpadEvent, FocusTarget, PollInterval, PulseToken};
use crate::domain::video::PlaybackProgress;
use crate::infrastructure::timer::ManualScheduler;
use std::time::Duration;

#[derive(Debug)]
pub struct OverlaySession<E, S> {
    engine: E,
    scheduler: S,
    controls: ControlsController,
    pulse: PulseIndicator,
    router: FocusRouter,
    poll: TimerSlot,
    poll_interval: PollInterval,
    progress: PlaybackProgress,
    is_playing: bool,
    running: bool,
}

impl<E: PlaybackEngine, S: Scheduler> OverlaySession<E, S> {
    pub fn new(engine: E, scheduler: S, settings: &OverlaySettings) -> Self {
        Self {
            engine,
            scheduler,
            controls: ControlsController::new(settings.hide_delay),
            pulse: PulseIndicator::new(settings.pulse_duration),
            router: FocusRouter::new(settings.seek_increment),
            poll: TimerSlot::default(),
            poll_interval: settings.poll_interval,
            progress: PlaybackProgress::default(),
            is_playing: false,
            running: false,
        }
    }

    /// Starts the session. Calling it on a running session does nothing.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        if !self.scheduler.is_available() {
            log::warn!("Starting overlay without timers: no auto-hide, no pulse clear, no polling");
        }
        self.refresh();
        self.controls.show(&mut self.scheduler);
        self.arm_poll();
        log::info!(
            "Overlay session started (poll every {} ms)",
            self.poll_interval.value()
        );
    }

    /// Tears the session down: cancels the hide, pulse and poll timers, hides
    /// the controls and clears the pulse.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.poll.cancel(&mut self.scheduler);
        self.controls.hide(&mut self.scheduler);
        self.pulse.reset(&mut self.scheduler);
        log::info!("Overlay session stopped");
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Routes a D-pad press, then refreshes the engine sample.
    ///
    /// # Errors
    ///
    /// Returns the engine's [`EngineError`] unchanged when it refuses a command.
    pub fn handle_input(&mut self, event: DpadEvent) -> Result<RouteOutcome, EngineError> {
        if !self.running {
            log::debug!("Dropping {} on stopped session", event);
            return Ok(RouteOutcome::Inactive);
        }
        let outcome = self.router.route(
            event,
            RouteContext {
                controls: &mut self.controls,
                pulse: &mut self.pulse,
                engine: &mut self.engine,
                scheduler: &mut self.scheduler,
            },
        );
        if let Err(err) = &outcome {
            log::warn!("Engine refused {}: {}", event, err);
        }
        self.refresh();
        outcome
    }

    /// Delivers a fired timer. Returns true if the rendered state changed.
    pub fn handle_timer(&mut self, fired: TimerFired) -> bool {
        if !self.running {
            log::debug!("Dropping {:?} timer after teardown", fired.event);
            return false;
        }
        match fired.event {
            TimerEvent::HideControls => self.controls.on_timer(fired.id) != Effect::None,
            TimerEvent::ClearPulse => self.pulse.on_timer(fired.id),
            TimerEvent::PollPosition => {
                if !self.poll.claim(fired.id) {
                    log::debug!("Ignoring stale poll timer {}", fired.id.value());
                    return false;
                }
                let changed = self.refresh();
                self.arm_poll();
                changed
            }
        }
    }

    /// Takes a fresh engine sample. Returns true if it differs from the last one.
    pub fn refresh(&mut self) -> bool {
        let progress = PlaybackProgress::from_samples(
            self.engine.position_secs(),
            self.engine.duration_secs(),
        );
        let is_playing = self.engine.is_playing();
        let changed = progress != self.progress || is_playing != self.is_playing;
        self.progress = progress;
        self.is_playing = is_playing;
        changed
    }

    fn arm_poll(&mut self) {
        self.poll.rearm(
            &mut self.scheduler,
            self.poll_interval.as_duration(),
            TimerEvent::PollPosition,
        );
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.controls.is_visible()
    }

    #[must_use]
    pub fn current_pulse(&self) -> PulseToken {
        self.pulse.current()
    }

    #[must_use]
    pub fn current_focus(&self) -> FocusTarget {
        self.router.current_focus()
    }

    #[must_use]
    pub fn progress(&self) -> PlaybackProgress {
        self.progress
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    #[must_use]
    pub fn auto_hide_enabled(&self) -> bool {
        self.controls.auto_hide_enabled()
    }

    #[must_use]
    pub fn view(&self) -> OverlayView {
        OverlayView::new(
            self.controls.is_visible(),
            self.pulse.current(),
            self.router.current_focus(),
            self.is_playing,
            &self.progress,
        )
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl<E: PlaybackEngine> OverlaySession<E, ManualScheduler> {
    /// Advances simulated time, delivering every timer that falls due in order.
    ///
    /// Timers armed by a delivered fire (the poll re-arm) are delivered too if
    /// they fall within the same window. Returns the number of fires delivered.
    pub fn advance(&mut self, by: Duration) -> usize {
        let until = self.scheduler.now().saturating_add(by);
        let mut delivered = 0;
        while let Some(fired) = self.scheduler.pop_due(until) {
            self.handle_timer(fired);
            delivered += 1;
        }
        self.scheduler.advance_clock_to(until);
        delivered
    }
}
