// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the overlay core driven through its public API.
//!
//! Time is simulated with `ManualScheduler`, so every timing assertion is
//! exact to the millisecond.

use approx::assert_abs_diff_eq;
use playback_overlay::application::port::{PlaybackEngine, TimerEvent};
use playback_overlay::config::{self, Config, OverlayConfig, OverlaySettings};
use playback_overlay::domain::error::EngineError;
use playback_overlay::domain::overlay::{
    DpadEvent, FocusTarget, HideDelay, PulseDuration, PulseToken,
};
use playback_overlay::infrastructure::{ManualScheduler, NoTimers};
use playback_overlay::ui::overlay::{
    ControlsController, OverlaySession, PulseIndicator, RouteOutcome,
};
use playback_overlay::ui::progress_format;
use std::time::Duration;
use tempfile::tempdir;

/// Engine whose position only moves when told to.
#[derive(Debug, Default)]
struct StubEngine {
    position: f64,
    duration: Option<f64>,
    playing: bool,
    seeks: Vec<f64>,
}

impl StubEngine {
    fn with_duration(duration: f64) -> Self {
        Self {
            duration: Some(duration),
            ..Self::default()
        }
    }
}

impl PlaybackEngine for StubEngine {
    fn position_secs(&self) -> f64 {
        self.position
    }

    fn duration_secs(&self) -> Option<f64> {
        self.duration
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn play(&mut self) -> Result<(), EngineError> {
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), EngineError> {
        self.playing = false;
        Ok(())
    }

    fn seek_to(&mut self, fraction: f64) -> Result<(), EngineError> {
        let duration = self.duration.ok_or(EngineError::NotPrepared)?;
        self.seeks.push(fraction);
        self.position = fraction * duration;
        Ok(())
    }
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn session(engine: StubEngine) -> OverlaySession<StubEngine, ManualScheduler> {
    let settings = OverlaySettings {
        hide_delay: HideDelay::new(4_000),
        pulse_duration: PulseDuration::new(1_000),
        ..OverlaySettings::default()
    };
    let mut session = OverlaySession::new(engine, ManualScheduler::new(), &settings);
    session.start();
    session
}

// =============================================================================
// Controls visibility
// =============================================================================

#[test]
fn controls_stay_visible_until_delay_after_last_show() {
    let mut scheduler = ManualScheduler::new();
    let mut controls = ControlsController::new(HideDelay::new(4_000));

    controls.show(&mut scheduler);
    for _ in 0..5 {
        // Spaced strictly less than the delay apart.
        for fired in scheduler.advance(ms(3_999)) {
            controls.on_timer(fired.id);
        }
        assert!(controls.is_visible());
        controls.show(&mut scheduler);
    }

    for fired in scheduler.advance(ms(3_999)) {
        controls.on_timer(fired.id);
    }
    assert!(controls.is_visible());

    let fired = scheduler.advance(ms(1));
    assert_eq!(fired.len(), 1);
    controls.on_timer(fired[0].id);
    assert!(!controls.is_visible());
}

#[test]
fn controls_without_timers_never_auto_hide() {
    let mut controls = ControlsController::new(HideDelay::new(4_000));
    controls.show(&mut NoTimers);

    assert!(controls.is_visible());
    assert!(!controls.auto_hide_enabled());

    controls.hide(&mut NoTimers);
    assert!(!controls.is_visible());
}

// =============================================================================
// Pulse
// =============================================================================

#[test]
fn rapid_pulses_coalesce_into_one_clear() {
    let mut scheduler = ManualScheduler::new();
    let mut pulse = PulseIndicator::new(PulseDuration::new(1_000));

    for _ in 0..4 {
        pulse.trigger(PulseToken::SeekForward, &mut scheduler);
        assert_eq!(scheduler.pending_count(), 1);
        scheduler.advance(ms(400));
    }
    pulse.trigger(PulseToken::SeekBack, &mut scheduler);

    let fired = scheduler.advance(ms(999));
    assert!(fired.is_empty());
    assert_eq!(pulse.current(), PulseToken::SeekBack);

    let fired = scheduler.advance(ms(1));
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].event, TimerEvent::ClearPulse);
    assert!(pulse.on_timer(fired[0].id));
    assert_eq!(pulse.current(), PulseToken::None);
}

#[test]
fn pulse_shows_while_controls_hidden() {
    let mut session = session(StubEngine::with_duration(600.0));
    session.advance(ms(4_000));
    assert!(!session.is_visible());

    session.handle_input(DpadEvent::Left).expect("seek back");
    assert_eq!(session.current_pulse(), PulseToken::SeekBack);
}

// =============================================================================
// Progress formatting
// =============================================================================

#[test]
fn formats_positions() {
    assert_eq!(progress_format::format(ms(3_661_000)), "1:01:01");
    assert_eq!(progress_format::format(ms(65_000)), "01:05");
    assert_eq!(progress_format::format(ms(5_000)), "00:05");
    assert_eq!(progress_format::format(ms(5_999)), "00:05");
}

#[test]
fn fraction_is_safe_for_zero_total() {
    assert_abs_diff_eq!(
        progress_format::fraction(Duration::from_secs(30), Some(Duration::from_secs(120))),
        0.25
    );
    for secs in [0, 1, 60, 86_400] {
        let current = Duration::from_secs(secs);
        assert_abs_diff_eq!(progress_format::fraction(current, Some(Duration::ZERO)), 0.0);
        assert_abs_diff_eq!(progress_format::fraction(current, None), 0.0);
    }
}

// =============================================================================
// Routing
// =============================================================================

#[test]
fn enter_reveals_then_toggles() {
    let mut session = session(StubEngine::with_duration(600.0));
    session.advance(ms(4_000));
    assert!(!session.is_visible());

    assert_eq!(
        session.handle_input(DpadEvent::Enter),
        Ok(RouteOutcome::Revealed)
    );
    assert!(session.is_visible());
    assert!(!session.engine().playing);

    assert_eq!(
        session.handle_input(DpadEvent::Enter),
        Ok(RouteOutcome::PlaybackToggled { playing: true })
    );
    assert!(session.engine().playing);
    assert_eq!(session.current_pulse(), PulseToken::Play);
}

#[test]
fn seek_moves_by_increment() {
    let mut engine = StubEngine::with_duration(200.0);
    engine.position = 50.0;
    let mut session = session(engine);

    session.handle_input(DpadEvent::Right).expect("seek");
    assert_abs_diff_eq!(session.engine().seeks[0], 0.3);
    assert_eq!(session.view().position_label, "01:00");
}

#[test]
fn seek_is_suppressed_until_duration_known() {
    let mut session = session(StubEngine::default());

    assert_eq!(
        session.handle_input(DpadEvent::Right),
        Ok(RouteOutcome::SeekSuppressed)
    );
    assert!(session.current_pulse().is_none());
    assert_eq!(session.view().duration_label, progress_format::UNKNOWN_DURATION_LABEL);
}

#[test]
fn focus_moves_between_rows_and_stops_at_edges() {
    let mut session = session(StubEngine::with_duration(60.0));
    assert_eq!(session.current_focus(), FocusTarget::Seeker);

    session.handle_input(DpadEvent::Up).expect("up");
    assert_eq!(session.current_focus(), FocusTarget::ClosedCaptionButton);
    assert_eq!(
        session.handle_input(DpadEvent::Up),
        Ok(RouteOutcome::Acknowledged)
    );

    session.handle_input(DpadEvent::Down).expect("down");
    session.handle_input(DpadEvent::Down).expect("down");
    assert_eq!(session.current_focus(), FocusTarget::PlayPauseIcon);

    // Left/Right only seek on the seeker.
    assert_eq!(
        session.handle_input(DpadEvent::Right),
        Ok(RouteOutcome::Acknowledged)
    );
    assert!(session.engine().seeks.is_empty());
}

// =============================================================================
// Teardown
// =============================================================================

#[test]
fn no_callbacks_after_teardown() {
    let mut session = session(StubEngine::with_duration(600.0));
    session.handle_input(DpadEvent::Right).expect("seek");
    assert!(session.scheduler().pending_count() >= 3);

    session.stop();
    assert_eq!(session.scheduler().pending_count(), 0);

    let before = session.view();
    session.engine_mut().position = 300.0;
    let delivered = session.advance(Duration::from_secs(60));

    assert_eq!(delivered, 0);
    assert_eq!(session.view(), before);
    assert!(!session.is_running());
}

#[test]
fn fire_in_flight_at_teardown_changes_nothing() {
    let mut session = session(StubEngine::with_duration(600.0));
    session.handle_input(DpadEvent::Right).expect("seek");
    let in_flight = session
        .scheduler_mut()
        .pop_due(ms(1_000))
        .expect("poll due");

    session.stop();
    let before = session.view();
    session.engine_mut().position = 300.0;

    assert!(!session.handle_timer(in_flight));
    assert_eq!(session.view(), before);
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn config_round_trip_feeds_session_settings() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("overlay").join("settings.toml");
    let config = Config {
        overlay: OverlayConfig {
            hide_delay_ms: Some(2_500),
            pulse_duration_ms: Some(750),
            poll_interval_ms: None,
            seek_increment_secs: Some(30.0),
        },
    };

    config::save_to_path(&config, &path).expect("save");
    let loaded = config::load_from_path(&path).expect("load");
    let settings = loaded.overlay_settings();

    assert_eq!(settings.hide_delay.value(), 2_500);
    assert_eq!(settings.pulse_duration.value(), 750);
    assert_eq!(settings.poll_interval, OverlaySettings::default().poll_interval);
    assert_abs_diff_eq!(settings.seek_increment.value(), 30.0);
}

#[test]
fn malformed_config_falls_back_to_defaults() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[overlay\nhide_delay_ms = ").expect("write");

    let loaded = config::load_from_path(&path).expect("load");
    assert_eq!(loaded.overlay_settings(), OverlaySettings::default());
}
