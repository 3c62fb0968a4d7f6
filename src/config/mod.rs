//! Settings for the pbiforge binary and embedders.
//!
//! Handles export and logging settings loaded from TOML.

mod settings;

pub use settings::{ExportSettings, LoggingSettings, Settings, SettingsError, SETTINGS_FILE};
