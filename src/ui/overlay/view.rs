// SPDX-License-Identifier: MPL-2.0
//! Render snapshot of the overlay.

use crate::domain::overlay::{FocusTarget, PulseToken};
use crate::domain::video::PlaybackProgress;
use crate::ui::progress_format;
use std::fmt;

/// Everything a rendering layer needs to draw the overlay for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView {
    pub controls_visible: bool,
    pub pulse: PulseToken,
    pub focus: FocusTarget,
    pub is_playing: bool,
    pub position_label: String,
    pub duration_label: String,
    pub remaining_label: Option<String>,
    /// Seeker fill, within `[0, 1]`.
    pub fraction: f64,
}

impl OverlayView {
    #[must_use]
    pub fn new(
        controls_visible: bool,
        pulse: PulseToken,
        focus: FocusTarget,
        is_playing: bool,
        progress: &PlaybackProgress,
    ) -> Self {
        Self {
            controls_visible,
            pulse,
            focus,
            is_playing,
            position_label: progress_format::format(progress.position()),
            duration_label: progress_format::format_total(progress.total()),
            remaining_label: progress_format::format_remaining(
                progress.position(),
                progress.total(),
            ),
            fraction: progress.fraction(),
        }
    }
}

impl fmt::Display for OverlayView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_playing { "playing" } else { "paused" };
        if self.controls_visible {
            write!(
                f,
                "[{}] {} / {} ({:>3.0}%) focus={:?}",
                state,
                self.position_label,
                self.duration_label,
                self.fraction * 100.0,
                self.focus
            )?;
        } else {
            write!(f, "[{}] controls hidden", state)?;
        }
        if !self.pulse.is_none() {
            write!(f, " {}", self.pulse.label())?;
        }
        Ok(())
    }
}
