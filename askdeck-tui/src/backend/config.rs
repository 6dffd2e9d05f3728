//! Application configuration
//!
//! Loaded once at startup from `config.json` under the config dir.
//! A missing or unreadable file falls back to the defaults.

use std::path::PathBuf;

use serde::Deserialize;

use crate::view::theme::Theme;

/// Config directory for this application
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("askdeck")
}

fn config_file() -> PathBuf {
    config_dir().join("config.json")
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Base URL of the question API
    pub api_base_url: String,
    /// Color theme
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8787/api".to_string(),
            theme: Theme::Dark,
        }
    }
}

impl AppConfig {
    /// Load the configuration, falling back to defaults
    pub fn load() -> Self {
        let path = config_file();
        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                log::warn!("invalid config file {}: {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }
}
