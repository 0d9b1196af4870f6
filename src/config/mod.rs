// SPDX-License-Identifier: MPL-2.0
//! This module handles the overlay configuration, loading and saving the
//! timing preferences to a `settings.toml` file.
//!
//! Every field is optional; missing or out-of-range values fall back to the
//! defaults in [`defaults`] once converted with [`Config::overlay_settings`].
//!
//! # Examples
//!
//! ```no_run
//! use playback_overlay::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.overlay.hide_delay_ms = Some(6_000);
//! config::save(&config).expect("Failed to save config");
//!
//! let settings = config.overlay_settings();
//! assert_eq!(settings.hide_delay.value(), 6_000);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::overlay::{HideDelay, PollInterval, PulseDuration, SeekIncrement};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PlaybackOverlay";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub overlay: OverlayConfig,
}

/// `[overlay]` section of `settings.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfig {
    #[serde(default)]
    pub hide_delay_ms: Option<u64>,
    #[serde(default)]
    pub pulse_duration_ms: Option<u64>,
    #[serde(default)]
    pub poll_interval_ms: Option<u64>,
    #[serde(default)]
    pub seek_increment_secs: Option<f64>,
}

/// Validated timing settings consumed by an overlay session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlaySettings {
    pub hide_delay: HideDelay,
    pub pulse_duration: PulseDuration,
    pub poll_interval: PollInterval,
    pub seek_increment: SeekIncrement,
}

impl Config {
    /// Resolves the optional fields into clamped settings.
    #[must_use]
    pub fn overlay_settings(&self) -> OverlaySettings {
        let overlay = &self.overlay;
        OverlaySettings {
            hide_delay: overlay
                .hide_delay_ms
                .map(HideDelay::new)
                .unwrap_or_default(),
            pulse_duration: overlay
                .pulse_duration_ms
                .map(PulseDuration::new)
                .unwrap_or_default(),
            poll_interval: overlay
                .poll_interval_ms
                .map(PollInterval::new)
                .unwrap_or_default(),
            seek_increment: overlay
                .seek_increment_secs
                .map(SeekIncrement::new)
                .unwrap_or_default(),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!(
                "Ignoring malformed config at {}: {}",
                path.display(),
                err
            );
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
