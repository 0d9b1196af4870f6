// SPDX-License-Identifier: MPL-2.0
//! D-pad routing for the transport controls.
//!
//! Policy:
//!
//! - Every press shows the controls (revealing them or restarting auto-hide).
//! - `Enter` toggles play/pause only if the controls were already visible;
//!   the first `Enter` on hidden controls just reveals them.
//! - `Left`/`Right` on the seeker seek by the configured increment and pulse,
//!   even when that same press revealed the controls. Seeks are suppressed
//!   while the engine has no usable duration.
//! - `Up`/`Down` move focus one row; moves past an edge are ignored.
//!
//! Engine failures are returned unchanged. The controls have already been
//! shown at that point; no pulse is emitted for a refused command.

use super::controls::ControlsController;
use super::pulse::PulseIndicator;
use crate::application::port::{PlaybackEngine, Scheduler};
use crate::domain::error::EngineError;
use crate::domain::overlay::{DpadEvent, FocusTarget, PulseToken, SeekIncrement};
use crate::domain::video::PlaybackProgress;

/// What a routed press did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RouteOutcome {
    /// The press only revealed the controls.
    Revealed,
    /// The press kept the controls up; nothing else changed.
    Acknowledged,
    /// Focus moved to a new target.
    FocusMoved(FocusTarget),
    /// Play/pause was toggled; `playing` is the new state.
    PlaybackToggled { playing: bool },
    /// A relative seek was issued to `fraction` of the total.
    Seeked { forward: bool, fraction: f64 },
    /// A seek was requested but the total duration is not known yet.
    SeekSuppressed,
    /// The session is not running; the press was dropped.
    Inactive,
}

/// Collaborators a press may touch.
pub struct RouteContext<'a, E: ?Sized, S: ?Sized> {
    pub controls: &'a mut ControlsController,
    pub pulse: &'a mut PulseIndicator,
    pub engine: &'a mut E,
    pub scheduler: &'a mut S,
}

/// Focus state and D-pad policy.
#[derive(Debug, Clone, Default)]
pub struct FocusRouter {
    focus: FocusTarget,
    seek_increment: SeekIncrement,
}

impl FocusRouter {
    #[must_use]
    pub fn new(seek_increment: SeekIncrement) -> Self {
        Self {
            focus: FocusTarget::default(),
            seek_increment,
        }
    }

    #[must_use]
    pub fn current_focus(&self) -> FocusTarget {
        self.focus
    }

    /// Routes one press.
    ///
    /// # Errors
    ///
    /// Returns the engine's [`EngineError`] unchanged if a play, pause or seek
    /// command is refused.
    pub fn route<E, S>(
        &mut self,
        event: DpadEvent,
        ctx: RouteContext<'_, E, S>,
    ) -> Result<RouteOutcome, EngineError>
    where
        E: PlaybackEngine + ?Sized,
        S: Scheduler + ?Sized,
    {
        let RouteContext {
            controls,
            pulse,
            engine,
            scheduler,
        } = ctx;

        let was_visible = controls.is_visible();
        controls.show(scheduler);

        if let Some(forward) = event.seek_direction() {
            if !self.focus.is_seeker() {
                return Ok(Self::passive(was_visible));
            }
            return self.seek(forward, engine, pulse, scheduler);
        }

        if event == DpadEvent::Enter {
            if !was_visible {
                return Ok(RouteOutcome::Revealed);
            }
            let playing = if engine.is_playing() {
                engine.pause()?;
                false
            } else {
                engine.play()?;
                true
            };
            pulse.trigger(PulseToken::for_toggle(playing), scheduler);
            return Ok(RouteOutcome::PlaybackToggled { playing });
        }

        let next = if event == DpadEvent::Up {
            self.focus.above()
        } else {
            self.focus.below()
        };
        match next {
            Some(target) => {
                self.focus = target;
                Ok(RouteOutcome::FocusMoved(target))
            }
            None => Ok(Self::passive(was_visible)),
        }
    }

    fn seek<E, S>(
        &self,
        forward: bool,
        engine: &mut E,
        pulse: &mut PulseIndicator,
        scheduler: &mut S,
    ) -> Result<RouteOutcome, EngineError>
    where
        E: PlaybackEngine + ?Sized,
        S: Scheduler + ?Sized,
    {
        let progress =
            PlaybackProgress::from_samples(engine.position_secs(), engine.duration_secs());
        let step = self.seek_increment.value();
        let delta = if forward { step } else { -step };
        let Some(fraction) = progress.seek_fraction(delta) else {
            log::debug!("Seek suppressed: duration unknown");
            return Ok(RouteOutcome::SeekSuppressed);
        };
        engine.seek_to(fraction)?;
        pulse.trigger(PulseToken::for_seek(forward), scheduler);
        Ok(RouteOutcome::Seeked { forward, fraction })
    }

    fn passive(was_visible: bool) -> RouteOutcome {
        if was_visible {
            RouteOutcome::Acknowledged
        } else {
            RouteOutcome::Revealed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::timer::ManualScheduler;
    use crate::test_utils::{assert_abs_diff_eq, EngineCommand, FakeEngine};

    struct Fixture {
        router: FocusRouter,
        controls: ControlsController,
        pulse: PulseIndicator,
        engine: FakeEngine,
        scheduler: ManualScheduler,
    }

    impl Fixture {
        fn new(engine: FakeEngine) -> Self {
            Self {
                router: FocusRouter::new(SeekIncrement::new(10.0)),
                controls: ControlsController::default(),
                pulse: PulseIndicator::default(),
                engine,
                scheduler: ManualScheduler::new(),
            }
        }

        fn press(&mut self, event: DpadEvent) -> Result<RouteOutcome, EngineError> {
            self.router.route(
                event,
                RouteContext {
                    controls: &mut self.controls,
                    pulse: &mut self.pulse,
                    engine: &mut self.engine,
                    scheduler: &mut self.scheduler,
                },
            )
        }
    }

    #[test]
    fn every_press_shows_controls() {
        for event in [
            DpadEvent::Up,
            DpadEvent::Down,
            DpadEvent::Left,
            DpadEvent::Right,
            DpadEvent::Enter,
        ] {
            let mut fx = Fixture::new(FakeEngine::prepared(120.0));
            fx.press(event).expect("press should succeed");
            assert!(fx.controls.is_visible(), "{event} should show controls");
        }
    }

    #[test]
    fn first_enter_reveals_second_toggles() {
        let mut fx = Fixture::new(FakeEngine::prepared(120.0).playing());

        assert_eq!(fx.press(DpadEvent::Enter), Ok(RouteOutcome::Revealed));
        assert!(fx.engine.commands.is_empty());
        assert!(fx.pulse.current().is_none());

        assert_eq!(
            fx.press(DpadEvent::Enter),
            Ok(RouteOutcome::PlaybackToggled { playing: false })
        );
        assert_eq!(fx.engine.commands, vec![EngineCommand::Pause]);
        assert_eq!(fx.pulse.current(), PulseToken::Pause);

        assert_eq!(
            fx.press(DpadEvent::Enter),
            Ok(RouteOutcome::PlaybackToggled { playing: true })
        );
        assert_eq!(fx.pulse.current(), PulseToken::Play);
    }

    #[test]
    fn right_on_seeker_seeks_forward_and_pulses() {
        let mut fx = Fixture::new(FakeEngine::prepared(120.0).at(30.0));

        let outcome = fx.press(DpadEvent::Right).expect("seek should succeed");
        match outcome {
            RouteOutcome::Seeked { forward, fraction } => {
                assert!(forward);
                assert_abs_diff_eq!(fraction, 40.0 / 120.0, epsilon = 1e-12);
            }
            other => panic!("expected seek, got {other:?}"),
        }
        assert_eq!(fx.pulse.current(), PulseToken::SeekForward);
    }

    #[test]
    fn left_while_hidden_reveals_and_seeks() {
        let mut fx = Fixture::new(FakeEngine::prepared(120.0).at(30.0));
        assert!(!fx.controls.is_visible());

        let outcome = fx.press(DpadEvent::Left).expect("seek should succeed");
        assert!(matches!(outcome, RouteOutcome::Seeked { forward: false, .. }));
        assert!(fx.controls.is_visible());
        assert_eq!(fx.pulse.current(), PulseToken::SeekBack);
    }

    #[test]
    fn seek_is_suppressed_without_duration() {
        let mut fx = Fixture::new(FakeEngine::unprepared().at(5.0));

        assert_eq!(fx.press(DpadEvent::Right), Ok(RouteOutcome::SeekSuppressed));
        assert!(fx.engine.commands.is_empty());
        assert!(fx.pulse.current().is_none());
        assert!(fx.controls.is_visible());
    }

    #[test]
    fn horizontal_press_off_seeker_does_not_seek() {
        let mut fx = Fixture::new(FakeEngine::prepared(120.0));

        assert_eq!(
            fx.press(DpadEvent::Down),
            Ok(RouteOutcome::FocusMoved(FocusTarget::PlayPauseIcon))
        );
        assert_eq!(fx.press(DpadEvent::Left), Ok(RouteOutcome::Acknowledged));
        assert_eq!(fx.press(DpadEvent::Right), Ok(RouteOutcome::Acknowledged));
        assert!(fx.engine.commands.is_empty());
    }

    #[test]
    fn vertical_moves_follow_adjacency_and_stop_at_edges() {
        let mut fx = Fixture::new(FakeEngine::prepared(120.0));

        assert_eq!(
            fx.press(DpadEvent::Up),
            Ok(RouteOutcome::FocusMoved(FocusTarget::ClosedCaptionButton))
        );
        assert_eq!(fx.press(DpadEvent::Up), Ok(RouteOutcome::Acknowledged));
        assert_eq!(fx.router.current_focus(), FocusTarget::ClosedCaptionButton);

        fx.press(DpadEvent::Down).expect("move down");
        fx.press(DpadEvent::Down).expect("move down");
        assert_eq!(fx.router.current_focus(), FocusTarget::PlayPauseIcon);
        assert_eq!(fx.press(DpadEvent::Down), Ok(RouteOutcome::Acknowledged));
    }

    #[test]
    fn engine_failure_is_propagated_unchanged() {
        let mut fx = Fixture::new(FakeEngine::prepared(120.0).at(30.0));
        fx.engine.fail_next = Some(EngineError::Rejected("busy".to_string()));

        assert_eq!(
            fx.press(DpadEvent::Right),
            Err(EngineError::Rejected("busy".to_string()))
        );
        assert!(fx.controls.is_visible());
        assert!(fx.pulse.current().is_none());
    }
}
