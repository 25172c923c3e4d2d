//! Application configuration
//!
//! Configuration loaded from `.movie-lander.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration loaded from `.movie-lander.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// JSON file with the movies seeded into the list at startup.
    /// The bundled dataset is used when unset.
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,

    /// JSON file with the offline catalog searched from the navbar.
    /// The bundled catalog is used when unset.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// How long the event loop waits for input before checking for
    /// queued actions again, in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_poll_interval_ms() -> u64 {
    100
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: None,
            catalog_path: None,
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        match crate::load_config_file() {
            Some(content) => Self::from_toml(&content),
            None => {
                log::debug!("Using default app config");
                Self::default()
            }
        }
    }

    /// Parse config content, falling back to defaults on error
    pub fn from_toml(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(config) => {
                log::info!("Loaded app config from file");
                config
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                Self::default()
            }
        }
    }
}
