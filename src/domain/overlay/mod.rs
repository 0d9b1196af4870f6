// SPDX-License-Identifier: MPL-2.0
//! Overlay domain types.
//!
//! Value objects describing what the playback overlay shows, independent of
//! any timer facility or rendering layer.

pub mod focus;
pub mod input;
pub mod newtypes;
pub mod pulse;
pub mod visibility;

// Re-export commonly used types
pub use focus::FocusTarget;
pub use input::DpadEvent;
pub use newtypes::{HideDelay, PollInterval, PulseDuration, SeekIncrement};
pub use pulse::PulseToken;
pub use visibility::ControlsVisibility;
