// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`timer`]: [`Scheduler`] implementations (simulated, Tokio, none)
//! - [`engine`]: Wall-clock [`PlaybackEngine`] simulation for the demo binary
//!
//! [`Scheduler`]: crate::application::port::Scheduler
//! [`PlaybackEngine`]: crate::application::port::PlaybackEngine

pub mod engine;
pub mod timer;

// Re-export main types for convenience
pub use engine::SimulatedEngine;
pub use timer::{ManualScheduler, NoTimers, TokioScheduler};
