// SPDX-License-Identifier: MPL-2.0
//! Wall-clock playback engine simulation.
//!
//! Stands in for a real media engine in the demo binary. Position is tracked
//! as an anchor (last known position) plus the monotonic time elapsed since
//! playback resumed, clamped to the duration.
//!
//! # Invariants
//!
//! - The anchor position is finite, non-negative and never past the duration
//! - The anchor instant is `None` while paused

use crate::application::port::PlaybackEngine;
use crate::domain::error::EngineError;
use crate::domain::video::sanitize_secs;
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct SimulatedEngine {
    duration_secs: Option<f64>,
    anchor_secs: f64,
    /// Set while playing.
    anchor_at: Option<Instant>,
}

impl SimulatedEngine {
    /// Creates a paused engine for media of the given length.
    #[must_use]
    pub fn new(duration_secs: f64) -> Self {
        Self {
            duration_secs: Some(sanitize_secs(duration_secs)),
            ..Self::default()
        }
    }

    /// Creates an engine that has not reported its duration yet.
    #[must_use]
    pub fn unprepared() -> Self {
        Self::default()
    }

    /// Finishes preparation, making the duration known.
    pub fn prepare(&mut self, duration_secs: f64) {
        self.duration_secs = Some(sanitize_secs(duration_secs));
        self.anchor_secs = self.clamp(self.anchor_secs);
    }

    fn clamp(&self, secs: f64) -> f64 {
        let secs = sanitize_secs(secs);
        match self.duration_secs {
            Some(duration) => secs.min(duration),
            None => secs,
        }
    }

    fn reanchor(&mut self) {
        self.anchor_secs = self.position_secs();
        if self.anchor_at.is_some() {
            self.anchor_at = Some(Instant::now());
        }
    }
}

impl PlaybackEngine for SimulatedEngine {
    fn position_secs(&self) -> f64 {
        let elapsed = self
            .anchor_at
            .map_or(0.0, |started| started.elapsed().as_secs_f64());
        self.clamp(self.anchor_secs + elapsed)
    }

    fn duration_secs(&self) -> Option<f64> {
        self.duration_secs
    }

    fn is_playing(&self) -> bool {
        self.anchor_at.is_some()
            && self
                .duration_secs
                .is_some_and(|duration| self.position_secs() < duration)
    }

    fn play(&mut self) -> Result<(), EngineError> {
        if self.duration_secs.is_none() {
            return Err(EngineError::NotPrepared);
        }
        if self.anchor_at.is_none() {
            self.anchor_at = Some(Instant::now());
        }
        Ok(())
    }

    fn pause(&mut self) -> Result<(), EngineError> {
        self.reanchor();
        self.anchor_at = None;
        Ok(())
    }

    fn seek_to(&mut self, fraction: f64) -> Result<(), EngineError> {
        let Some(duration) = self.duration_secs else {
            return Err(EngineError::NotPrepared);
        };
        if !fraction.is_finite() {
            return Err(EngineError::Rejected(format!(
                "seek fraction {fraction} is not finite"
            )));
        }
        self.anchor_secs = self.clamp(fraction.clamp(0.0, 1.0) * duration);
        if self.anchor_at.is_some() {
            self.anchor_at = Some(Instant::now());
        }
        Ok(())
    }
}
