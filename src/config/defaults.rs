// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the overlay. Constants are organized by category.
//!
//! # Categories
//!
//! - **Controls**: Auto-hide delay of the transport controls
//! - **Pulse**: Lifetime of the transient feedback icon
//! - **Poll**: Interval between playback position samples
//! - **Seek**: Relative seek distance for Left/Right on the seeker

// ==========================================================================
// Controls Defaults
// ==========================================================================

/// Default auto-hide delay for the transport controls (in milliseconds).
pub const DEFAULT_HIDE_DELAY_MS: u64 = 4_000;

/// Minimum auto-hide delay (in milliseconds).
pub const MIN_HIDE_DELAY_MS: u64 = 500;

/// Maximum auto-hide delay (in milliseconds).
pub const MAX_HIDE_DELAY_MS: u64 = 60_000;

// ==========================================================================
// Pulse Defaults
// ==========================================================================

/// Default time a feedback pulse stays on screen (in milliseconds).
pub const DEFAULT_PULSE_DURATION_MS: u64 = 1_000;

/// Minimum pulse duration (in milliseconds).
pub const MIN_PULSE_DURATION_MS: u64 = 100;

/// Maximum pulse duration (in milliseconds).
pub const MAX_PULSE_DURATION_MS: u64 = 5_000;

// ==========================================================================
// Poll Defaults
// ==========================================================================

/// Default interval between playback position samples (in milliseconds).
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 300;

/// Minimum poll interval (in milliseconds).
pub const MIN_POLL_INTERVAL_MS: u64 = 50;

/// Maximum poll interval (in milliseconds).
pub const MAX_POLL_INTERVAL_MS: u64 = 2_000;

// ==========================================================================
// Seek Defaults
// ==========================================================================

/// Default relative seek distance (in seconds).
pub const DEFAULT_SEEK_INCREMENT_SECS: f64 = 10.0;

/// Minimum seek distance (in seconds).
pub const MIN_SEEK_INCREMENT_SECS: f64 = 1.0;

/// Maximum seek distance (in seconds).
pub const MAX_SEEK_INCREMENT_SECS: f64 = 120.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Hide delay validation
    assert!(MIN_HIDE_DELAY_MS > 0);
    assert!(MAX_HIDE_DELAY_MS >= MIN_HIDE_DELAY_MS);
    assert!(DEFAULT_HIDE_DELAY_MS >= MIN_HIDE_DELAY_MS);
    assert!(DEFAULT_HIDE_DELAY_MS <= MAX_HIDE_DELAY_MS);

    // Pulse duration validation
    assert!(MIN_PULSE_DURATION_MS > 0);
    assert!(MAX_PULSE_DURATION_MS >= MIN_PULSE_DURATION_MS);
    assert!(DEFAULT_PULSE_DURATION_MS >= MIN_PULSE_DURATION_MS);
    assert!(DEFAULT_PULSE_DURATION_MS <= MAX_PULSE_DURATION_MS);

    // Poll interval validation
    assert!(MIN_POLL_INTERVAL_MS > 0);
    assert!(MAX_POLL_INTERVAL_MS >= MIN_POLL_INTERVAL_MS);
    assert!(DEFAULT_POLL_INTERVAL_MS >= MIN_POLL_INTERVAL_MS);
    assert!(DEFAULT_POLL_INTERVAL_MS <= MAX_POLL_INTERVAL_MS);

    // Seek increment validation
    assert!(MIN_SEEK_INCREMENT_SECS > 0.0);
    assert!(MAX_SEEK_INCREMENT_SECS >= MIN_SEEK_INCREMENT_SECS);
    assert!(DEFAULT_SEEK_INCREMENT_SECS >= MIN_SEEK_INCREMENT_SECS);
    assert!(DEFAULT_SEEK_INCREMENT_SECS <= MAX_SEEK_INCREMENT_SECS);
};
