//! Launcher configuration.
//!
//! Loaded from `<config dir>/launchdeck/config.json`; every field is
//! defaulted so a missing or partial file is fine. A malformed file logs a
//! warning and falls back to defaults rather than refusing to start.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

const DEFAULT_WINDOW_WIDTH: u32 = 500;
const DEFAULT_WINDOW_HEIGHT: u32 = 700;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Initial window width in logical pixels (default: 500)
    #[serde(default = "default_window_width")]
    pub window_width: u32,
    /// Initial window height in logical pixels (default: 700)
    #[serde(default = "default_window_height")]
    pub window_height: u32,
    /// Directory handed to the engine at startup; None means "load all".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scripts_dir: Option<String>,
    /// Tracing env-filter directive used when RUST_LOG is unset (default: "info")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_window_width() -> u32 {
    DEFAULT_WINDOW_WIDTH
}
fn default_window_height() -> u32 {
    DEFAULT_WINDOW_HEIGHT
}
fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            scripts_dir: None,
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// The path the engine should load scripts from; empty means "load all".
    pub fn startup_load_path(&self) -> &str {
        self.scripts_dir.as_deref().unwrap_or("")
    }
}

pub fn config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("launchdeck").join("config.json"))
}

/// Load configuration from the default location, falling back to defaults.
pub fn load_config() -> Config {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("No config directory on this platform, using defaults");
            Config::default()
        }
    }
}

/// Load configuration from `path`, falling back to defaults on any failure.
pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        info!(path = %path.display(), "Config file not found, using defaults");
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read config, using defaults");
            Config::default()
        }
        Ok(contents) => match serde_json::from_str::<Config>(&contents) {
            Ok(config) => {
                info!(path = %path.display(), "Loaded config");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Invalid config, using defaults");
                Config::default()
            }
        },
    }
}
