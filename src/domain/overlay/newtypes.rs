// SPDX-License-Identifier: MPL-2.0
//! Overlay timing newtypes.
//!
//! This module provides type-safe wrappers for the overlay timing values,
//! ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_HIDE_DELAY_MS, DEFAULT_POLL_INTERVAL_MS, DEFAULT_PULSE_DURATION_MS,
    DEFAULT_SEEK_INCREMENT_SECS, MAX_HIDE_DELAY_MS, MAX_POLL_INTERVAL_MS, MAX_PULSE_DURATION_MS,
    MAX_SEEK_INCREMENT_SECS, MIN_HIDE_DELAY_MS, MIN_POLL_INTERVAL_MS, MIN_PULSE_DURATION_MS,
    MIN_SEEK_INCREMENT_SECS,
};
use std::time::Duration;

/// Declares a millisecond newtype clamped to `[$min, $max]`.
macro_rules! millis_newtype {
    ($(#[$meta:meta])* $name:ident, $min:expr, $max:expr, $default:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name(u64);

        impl $name {
            /// Creates a new value in milliseconds, clamping to valid range.
            #[must_use]
            pub fn new(millis: u64) -> Self {
                Self(millis.clamp($min, $max))
            }

            /// Creates a value from a `Duration`, clamping to valid range.
            #[must_use]
            pub fn from_duration(duration: Duration) -> Self {
                Self::new(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
            }

            /// Returns the value in milliseconds.
            #[must_use]
            pub fn value(self) -> u64 {
                self.0
            }

            /// Returns the value as a Duration.
            #[must_use]
            pub fn as_duration(self) -> Duration {
                Duration::from_millis(self.0)
            }

            /// Returns true if this is the minimum value.
            #[must_use]
            pub fn is_min(self) -> bool {
                self.0 <= $min
            }

            /// Returns true if this is the maximum value.
            #[must_use]
            pub fn is_max(self) -> bool {
                self.0 >= $max
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self($default)
            }
        }
    };
}

millis_newtype!(
    /// Delay after the last interaction before the controls auto-hide.
    HideDelay,
    MIN_HIDE_DELAY_MS,
    MAX_HIDE_DELAY_MS,
    DEFAULT_HIDE_DELAY_MS
);

millis_newtype!(
    /// How long a feedback pulse stays on screen.
    PulseDuration,
    MIN_PULSE_DURATION_MS,
    MAX_PULSE_DURATION_MS,
    DEFAULT_PULSE_DURATION_MS
);

millis_newtype!(
    /// Interval between two playback position samples.
    PollInterval,
    MIN_POLL_INTERVAL_MS,
    MAX_POLL_INTERVAL_MS,
    DEFAULT_POLL_INTERVAL_MS
);

// =============================================================================
// SeekIncrement
// =============================================================================

/// Relative seek distance in seconds for Left/Right on the seeker.
///
/// Non-finite input falls back to the default.
///
/// # Example
///
/// ```
/// use playback_overlay::domain::overlay::SeekIncrement;
///
/// let step = SeekIncrement::new(30.0);
/// assert_eq!(step.value(), 30.0);
///
/// // Values outside range are clamped
/// assert_eq!(SeekIncrement::new(0.0).value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekIncrement(f64);

impl SeekIncrement {
    /// Creates a new seek increment, clamping to valid range.
    #[must_use]
    pub fn new(secs: f64) -> Self {
        if !secs.is_finite() {
            return Self::default();
        }
        Self(secs.clamp(MIN_SEEK_INCREMENT_SECS, MAX_SEEK_INCREMENT_SECS))
    }

    /// Returns the increment in seconds.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the increment as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f64(self.0)
    }
}

impl Default for SeekIncrement {
    fn default() -> Self {
        Self(DEFAULT_SEEK_INCREMENT_SECS)
    }
}
