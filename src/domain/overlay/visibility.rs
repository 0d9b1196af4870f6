// SPDX-License-Identifier: MPL-2.0
//! Controls visibility state.

/// Whether the transport controls are on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlsVisibility {
    /// Controls are drawn over the video.
    Visible,
    /// Controls are off screen; only pulses may be drawn.
    #[default]
    Hidden,
}

impl ControlsVisibility {
    /// Returns true if the controls are on screen.
    #[must_use]
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}
