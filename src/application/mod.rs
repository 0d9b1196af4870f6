// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports the overlay depends on.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The overlay components in [`crate::ui`] only see the ports
//!
//! # Example
//!
//! ```ignore
//! use playback_overlay::application::port::{PlaybackEngine, Scheduler};
//!
//! // Infrastructure implements the port traits
//! struct ExoPlayerBridge { /* ... */ }
//! impl PlaybackEngine for ExoPlayerBridge { /* ... */ }
//! ```

pub mod port;
