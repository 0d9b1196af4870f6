// SPDX-License-Identifier: MPL-2.0
//! Playback progress value object.
//!
//! Engines report raw `f64` seconds that may be negative, NaN or infinite
//! while they are still preparing. Every sample goes through
//! [`sanitize_secs`] before it reaches the overlay.
//!
//! # Invariants
//!
//! - Position and total are finite and non-negative
//! - When the total is known, position never exceeds it
//! - [`PlaybackProgress::fraction`] is always within `[0, 1]`

use std::time::Duration;

/// Clamps a raw engine sample to a finite, non-negative number of seconds.
#[inline]
#[must_use]
pub fn sanitize_secs(secs: f64) -> f64 {
    if secs.is_finite() && secs > 0.0 {
        secs
    } else {
        0.0
    }
}

fn secs_to_duration(secs: f64) -> Duration {
    Duration::try_from_secs_f64(sanitize_secs(secs)).unwrap_or(Duration::MAX)
}

/// Position and total duration of the current media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackProgress {
    position: Duration,
    /// `None` until the engine reports a duration.
    total: Option<Duration>,
}

impl PlaybackProgress {
    /// Creates a progress value, clamping the position to the known total.
    #[must_use]
    pub fn new(position: Duration, total: Option<Duration>) -> Self {
        let position = match total {
            Some(total) => position.min(total),
            None => position,
        };
        Self { position, total }
    }

    /// Builds a progress value from raw engine samples in seconds.
    #[must_use]
    pub fn from_samples(position_secs: f64, total_secs: Option<f64>) -> Self {
        Self::new(
            secs_to_duration(position_secs),
            total_secs.map(secs_to_duration),
        )
    }

    #[must_use]
    pub fn position(&self) -> Duration {
        self.position
    }

    #[must_use]
    pub fn total(&self) -> Option<Duration> {
        self.total
    }

    /// Time left until the end, when the total is known.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.total.map(|total| total.saturating_sub(self.position))
    }

    /// Returns true if relative seeks can be computed (total known and non-zero).
    #[must_use]
    pub fn is_seekable(&self) -> bool {
        self.total.is_some_and(|total| !total.is_zero())
    }

    /// Position as a fraction of the total, `0.0` when the total is unknown or zero.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        match self.total {
            Some(total) if !total.is_zero() => {
                (self.position.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }

    /// Target fraction for a relative seek of `delta_secs` (negative seeks back).
    ///
    /// Returns `None` while the total is unknown or zero.
    #[must_use]
    pub fn seek_fraction(&self, delta_secs: f64) -> Option<f64> {
        if !self.is_seekable() {
            return None;
        }
        let total = self.total?.as_secs_f64();
        let delta = if delta_secs.is_finite() { delta_secs } else { 0.0 };
        let target = (self.position.as_secs_f64() + delta).clamp(0.0, total);
        Some((target / total).clamp(0.0, 1.0))
    }
}
