// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and a scriptable playback engine.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

use crate::application::port::PlaybackEngine;
use crate::domain::error::EngineError;

/// Command received by a [`FakeEngine`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineCommand {
    Play,
    Pause,
    SeekTo(f64),
}

/// In-memory engine with a settable position and a command log.
#[derive(Debug, Default)]
pub struct FakeEngine {
    pub position_secs: f64,
    pub duration_secs: Option<f64>,
    pub playing: bool,
    /// Returned (once) by the next command instead of applying it.
    pub fail_next: Option<EngineError>,
    pub commands: Vec<EngineCommand>,
}

impl FakeEngine {
    pub fn prepared(duration_secs: f64) -> Self {
        Self {
            duration_secs: Some(duration_secs),
            ..Self::default()
        }
    }

    pub fn unprepared() -> Self {
        Self::default()
    }

    pub fn at(mut self, position_secs: f64) -> Self {
        self.position_secs = position_secs;
        self
    }

    pub fn playing(mut self) -> Self {
        self.playing = true;
        self
    }

    fn command(&mut self, command: EngineCommand) -> Result<(), EngineError> {
        if let Some(err) = self.fail_next.take() {
            return Err(err);
        }
        self.commands.push(command);
        Ok(())
    }
}

impl PlaybackEngine for FakeEngine {
    fn position_secs(&self) -> f64 {
        self.position_secs
    }

    fn duration_secs(&self) -> Option<f64> {
        self.duration_secs
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn play(&mut self) -> Result<(), EngineError> {
        self.command(EngineCommand::Play)?;
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), EngineError> {
        self.command(EngineCommand::Pause)?;
        self.playing = false;
        Ok(())
    }

    fn seek_to(&mut self, fraction: f64) -> Result<(), EngineError> {
        let Some(duration) = self.duration_secs else {
            return Err(EngineError::NotPrepared);
        };
        self.command(EngineCommand::SeekTo(fraction))?;
        self.position_secs = fraction * duration;
        Ok(())
    }
}
