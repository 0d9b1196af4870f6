// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the overlay logic remains
//! independent of any UI runtime or media engine.
//!
//! # Available Ports
//!
//! - [`engine`]: Playback engine reads and transport commands
//! - [`scheduler`]: Cancellable one-shot deferred timers
//!
//! # Design Notes
//!
//! - No `async fn`: timers come back as [`TimerFired`] messages
//! - Engine commands return domain [`EngineError`](crate::domain::error::EngineError)

pub mod engine;
pub mod scheduler;

// Re-export main types for convenience
pub use engine::PlaybackEngine;
pub use scheduler::{Scheduler, TimerEvent, TimerFired, TimerId, TimerSlot};
