//! TOML-based settings for pbiforge.
//!
//! Example configuration:
//! ```toml
//! [export]
//! output_dir = "./out"
//! extension = "pbix"
//! pretty = true
//!
//! [logging]
//! level = "debug"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::export::DEFAULT_EXTENSION;

/// Local settings file name.
pub const SETTINGS_FILE: &str = "pbiforge.toml";

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// Root settings structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Export configuration.
    pub export: ExportSettings,

    /// Logging configuration.
    pub logging: LoggingSettings,
}

/// Export configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Directory to save into (defaults to the user's download directory).
    pub output_dir: Option<PathBuf>,

    /// File extension of exported documents.
    pub extension: String,

    /// Pretty-print the JSON document.
    pub pretty: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_dir: None,
            extension: DEFAULT_EXTENSION.to_string(),
            pretty: true,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// One of: error, warn, info, debug, trace.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl LoggingSettings {
    /// Parse the configured level.
    pub fn level(&self) -> Result<tracing::Level, SettingsError> {
        tracing::Level::from_str(&self.level)
            .map_err(|_| SettingsError::InvalidLogLevel(self.level.clone()))
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings from the default locations.
    ///
    /// Searches in order:
    /// 1. `./pbiforge.toml`
    /// 2. `<config dir>/pbiforge/config.toml`
    ///
    /// Falls back to defaults when neither exists.
    pub fn load() -> Result<Self, SettingsError> {
        let local_config = PathBuf::from(SETTINGS_FILE);
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("pbiforge").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        Ok(Settings::default())
    }
}
