// SPDX-License-Identifier: MPL-2.0
//! Remote-control input events.

use std::fmt;
use std::str::FromStr;

/// A D-pad press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DpadEvent {
    Up,
    Down,
    Left,
    Right,
    Enter,
}

impl DpadEvent {
    /// Seek direction for horizontal presses.
    #[must_use]
    pub fn seek_direction(self) -> Option<bool> {
        match self {
            Self::Left => Some(false),
            Self::Right => Some(true),
            _ => None,
        }
    }
}

impl fmt::Display for DpadEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::Enter => "enter",
        };
        f.write_str(name)
    }
}

impl FromStr for DpadEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Self::Up),
            "down" | "d" => Ok(Self::Down),
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            "enter" | "ok" | "select" | "e" => Ok(Self::Enter),
            other => Err(format!("unknown D-pad key: {other:?}")),
        }
    }
}
