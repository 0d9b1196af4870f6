// SPDX-License-Identifier: MPL-2.0
//! Playback engine port definition.
//!
//! This module defines the [`PlaybackEngine`] trait the overlay talks to.
//! The engine owns decoding, buffering and rendering; the overlay only reads
//! its reported state and issues transport commands.
//!
//! # Design Notes
//!
//! - Reads are infallible and may return garbage while the engine prepares;
//!   callers sanitise them through [`PlaybackProgress`](crate::domain::video::PlaybackProgress)
//! - Commands return [`EngineError`], which the overlay propagates unchanged
//! - Methods are not `async`; the overlay runs on a single logical context

use crate::domain::error::EngineError;

// =============================================================================
// PlaybackEngine Trait
// =============================================================================

/// Port for the external playback engine.
///
/// # Example
///
/// ```ignore
/// use playback_overlay::application::port::PlaybackEngine;
///
/// fn toggle(engine: &mut impl PlaybackEngine) {
///     let result = if engine.is_playing() { engine.pause() } else { engine.play() };
///     if let Err(e) = result {
///         eprintln!("Engine refused toggle: {e}");
///     }
/// }
/// ```
pub trait PlaybackEngine {
    /// Current playback position in seconds.
    fn position_secs(&self) -> f64;

    /// Total media duration in seconds, `None` until the engine knows it.
    fn duration_secs(&self) -> Option<f64>;

    /// Returns true while media is playing.
    fn is_playing(&self) -> bool;

    /// Starts or resumes playback.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] if the engine refuses the command.
    fn play(&mut self) -> Result<(), EngineError>;

    /// Pauses playback.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] if the engine refuses the command.
    fn pause(&mut self) -> Result<(), EngineError>;

    /// Seeks to a position expressed as a fraction of the total duration.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] if the engine refuses the seek.
    fn seek_to(&mut self, fraction: f64) -> Result<(), EngineError>;
}

impl<E: PlaybackEngine + ?Sized> PlaybackEngine for Box<E> {
    fn position_secs(&self) -> f64 {
        (**self).position_secs()
    }

    fn duration_secs(&self) -> Option<f64> {
        (**self).duration_secs()
    }

    fn is_playing(&self) -> bool {
        (**self).is_playing()
    }

    fn play(&mut self) -> Result<(), EngineError> {
        (**self).play()
    }

    fn pause(&mut self) -> Result<(), EngineError> {
        (**self).pause()
    }

    fn seek_to(&mut self, fraction: f64) -> Result<(), EngineError> {
        (**self).seek_to(fraction)
    }
}
