// SPDX-License-Identifier: MPL-2.0
//! Feedback pulse tokens.

/// Icon briefly shown to acknowledge a button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PulseToken {
    /// Nothing is shown.
    #[default]
    None,
    /// Relative seek forward.
    SeekForward,
    /// Relative seek backward.
    SeekBack,
    /// Playback resumed.
    Play,
    /// Playback paused.
    Pause,
}

impl PulseToken {
    /// Returns true if no icon is shown.
    #[must_use]
    pub fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// Token acknowledging a seek in the given direction.
    #[must_use]
    pub fn for_seek(forward: bool) -> Self {
        if forward {
            Self::SeekForward
        } else {
            Self::SeekBack
        }
    }

    /// Token acknowledging a play/pause toggle, given the new playing state.
    #[must_use]
    pub fn for_toggle(now_playing: bool) -> Self {
        if now_playing {
            Self::Play
        } else {
            Self::Pause
        }
    }

    /// Short stable name, used by text front-ends.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "",
            Self::SeekForward => ">>",
            Self::SeekBack => "<<",
            Self::Play => "|>",
            Self::Pause => "||",
        }
    }
}
