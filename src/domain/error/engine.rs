// SPDX-License-Identifier: MPL-2.0
//! Playback engine command errors.

use std::fmt;

/// A play, pause or seek command refused by the playback engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The engine has not reported a duration yet and cannot accept the command.
    NotPrepared,

    /// The engine refused the command.
    Rejected(String),

    /// The engine is gone (released or crashed).
    Disconnected,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::NotPrepared => write!(f, "Playback engine is not prepared"),
            EngineError::Rejected(msg) => write!(f, "Command rejected: {}", msg),
            EngineError::Disconnected => write!(f, "Playback engine disconnected"),
        }
    }
}

impl std::error::Error for EngineError {}
