//! Application configuration
//!
//! Loaded from an optional TOML file, then overridden by `ENCORE_`-prefixed
//! environment variables (`ENCORE_PLAYBACK__REPEAT=all`).

use crate::error::Result;
use crate::theme::ThemeSettings;
use crate::types::{RepeatMode, ShuffleMode};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "ENCORE";

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "encore.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub playback: PlaybackSettings,

    #[serde(default)]
    pub appearance: ThemeSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Initial sequencing modes for the playback store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlaybackSettings {
    #[serde(default)]
    pub repeat: RepeatMode,

    #[serde(default)]
    pub shuffle: ShuffleMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingSettings {
    /// `tracing` filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "encore=info".to_string()
}

impl AppConfig {
    /// Load `encore.toml` from the working directory (if present) and the environment
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Load from a specific file (if present) and the environment
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut settings = config::Config::builder();

        if path.exists() {
            tracing::debug!("Loading configuration from {}", path.display());
            settings = settings.add_source(config::File::from(path));
        }

        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings.build()?.try_deserialize()?;
        Ok(config)
    }
}
