// SPDX-License-Identifier: MPL-2.0
//! Focus targets of the transport controls.
//!
//! The controls form a single column, top to bottom:
//!
//! ```text
//! ClosedCaptionButton
//! Seeker
//! PlayPauseIcon
//! ```
//!
//! Up/Down moves one row; moving past either end leaves focus unchanged.

/// Control that should currently own input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FocusTarget {
    /// Closed caption toggle, top row.
    ClosedCaptionButton,
    /// Scrubber, middle row.
    #[default]
    Seeker,
    /// Play/pause icon, bottom row.
    PlayPauseIcon,
}

impl FocusTarget {
    /// All targets in row order, top to bottom.
    pub const ROWS: [FocusTarget; 3] = [
        FocusTarget::ClosedCaptionButton,
        FocusTarget::Seeker,
        FocusTarget::PlayPauseIcon,
    ];

    fn row(self) -> usize {
        match self {
            Self::ClosedCaptionButton => 0,
            Self::Seeker => 1,
            Self::PlayPauseIcon => 2,
        }
    }

    /// Target one row up, or `None` at the top edge.
    #[must_use]
    pub fn above(self) -> Option<Self> {
        self.row()
            .checked_sub(1)
            .and_then(|row| Self::ROWS.get(row).copied())
    }

    /// Target one row down, or `None` at the bottom edge.
    #[must_use]
    pub fn below(self) -> Option<Self> {
        Self::ROWS.get(self.row() + 1).copied()
    }

    /// Returns true if Left/Right on this target seeks.
    #[must_use]
    pub fn is_seeker(self) -> bool {
        matches!(self, Self::Seeker)
    }
}
