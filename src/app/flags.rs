// SPDX-License-Identifier: MPL-2.0
//! Command-line flags for the demo binary.

use crate::config::{self, Config, OverlaySettings};
use crate::domain::overlay::HideDelay;
use crate::error::{Error, Result};
use std::path::PathBuf;

/// Simulated media length when `--duration` is not given (1h30).
pub const DEFAULT_DURATION_SECS: f64 = 5_400.0;

pub const USAGE: &str = "\
Usage: playback-overlay [--config <path>] [--duration <secs>] [--hide-delay-ms <ms>]

Reads D-pad commands from stdin, one per line:
  up | down | left | right | enter | quit";

/// Parsed command-line flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flags {
    /// Optional settings file; the platform config directory is used otherwise.
    pub config_path: Option<PathBuf>,
    /// Simulated media length in seconds. A non-positive value starts the
    /// engine unprepared.
    pub duration_secs: Option<f64>,
    /// Overrides the configured auto-hide delay.
    pub hide_delay_ms: Option<u64>,
    pub help: bool,
}

impl Flags {
    /// Parses flags from the process arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed values or unknown arguments.
    pub fn from_env() -> Result<Self> {
        Self::parse(pico_args::Arguments::from_env())
    }

    /// Parses flags from an explicit argument list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed values or unknown arguments.
    pub fn parse(mut args: pico_args::Arguments) -> Result<Self> {
        let flags = Self {
            help: args.contains(["-h", "--help"]),
            config_path: args.opt_value_from_str("--config").map_err(arg_error)?,
            duration_secs: args.opt_value_from_str("--duration").map_err(arg_error)?,
            hide_delay_ms: args
                .opt_value_from_str("--hide-delay-ms")
                .map_err(arg_error)?,
        };
        let rest = args.finish();
        if !rest.is_empty() {
            return Err(Error::Config(format!("unexpected arguments: {rest:?}")));
        }
        Ok(flags)
    }

    /// Loads the configuration and applies flag overrides on top of it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if an explicit `--config` file cannot be read.
    pub fn settings(&self) -> Result<OverlaySettings> {
        let config = match &self.config_path {
            Some(path) => config::load_from_path(path)?,
            None => config::load()?,
        };
        Ok(self.apply(&config))
    }

    fn apply(&self, config: &Config) -> OverlaySettings {
        let mut settings = config.overlay_settings();
        if let Some(ms) = self.hide_delay_ms {
            settings.hide_delay = HideDelay::new(ms);
        }
        settings
    }

    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs.unwrap_or(DEFAULT_DURATION_SECS)
    }
}

fn arg_error(err: pico_args::Error) -> Error {
    Error::Config(err.to_string())
}
