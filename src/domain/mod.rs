// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core overlay rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`EngineError`](error::EngineError))
//! - [`overlay`]: Overlay value objects ([`FocusTarget`](overlay::FocusTarget),
//!   [`PulseToken`](overlay::PulseToken), [`HideDelay`](overlay::HideDelay))
//! - [`video`]: Playback types ([`PlaybackProgress`](video::PlaybackProgress))

pub mod error;
pub mod overlay;
pub mod video;
