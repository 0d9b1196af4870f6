// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! Failures reported by the external playback engine. The overlay core never
//! recovers from these itself; they are handed back to the caller unchanged.

mod engine;

pub use engine::EngineError;
