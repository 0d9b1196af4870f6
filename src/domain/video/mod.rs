// SPDX-License-Identifier: MPL-2.0
//! Video playback domain types.
//!
//! This module contains playback value objects that are independent of any
//! presentation or infrastructure concerns.

pub mod progress;

// Re-export commonly used types
pub use progress::{sanitize_secs, PlaybackProgress};
