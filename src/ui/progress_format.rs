// SPDX-License-Identifier: MPL-2.0
//! Elapsed/total time labels and the seeker fill fraction.
//!
//! Pure functions called once per position sample. Hours are shown only when
//! non-zero and are never padded; minutes and seconds are always two digits.
//! Sub-second parts are truncated.
//!
//! # Examples
//!
//! ```
//! use playback_overlay::ui::progress_format::{format, fraction};
//! use std::time::Duration;
//!
//! assert_eq!(format(Duration::from_millis(3_661_000)), "1:01:01");
//! assert_eq!(format(Duration::from_millis(65_000)), "01:05");
//! assert_eq!(fraction(Duration::from_secs(30), Some(Duration::from_secs(120))), 0.25);
//! ```

use crate::domain::video::{sanitize_secs, PlaybackProgress};
use std::time::Duration;

/// Label shown for a total duration the engine has not reported yet.
pub const UNKNOWN_DURATION_LABEL: &str = "--:--";

/// Formats a duration as `MM:SS`, or `H:MM:SS` when it reaches an hour.
#[must_use]
pub fn format(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

/// Formats a raw engine sample in seconds; invalid samples render as `00:00`.
#[must_use]
pub fn format_secs(seconds: f64) -> String {
    format(Duration::try_from_secs_f64(sanitize_secs(seconds)).unwrap_or(Duration::MAX))
}

/// Formats a total that may still be unknown.
#[must_use]
pub fn format_total(total: Option<Duration>) -> String {
    total.map_or_else(|| UNKNOWN_DURATION_LABEL.to_string(), format)
}

/// Formats the time left as `-MM:SS` / `-H:MM:SS`, `None` while the total is unknown.
#[must_use]
pub fn format_remaining(current: Duration, total: Option<Duration>) -> Option<String> {
    PlaybackProgress::new(current, total)
        .remaining()
        .map(|remaining| format!("-{}", format(remaining)))
}

/// `current / total` clamped to `[0, 1]`; `0.0` when the total is zero or unknown.
#[must_use]
pub fn fraction(current: Duration, total: Option<Duration>) -> f64 {
    PlaybackProgress::new(current, total).fraction()
}
