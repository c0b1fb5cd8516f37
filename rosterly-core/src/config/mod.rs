//! Configuration for Rosterly
//!
//! Settings come from defaults, a TOML file, or `ROSTERLY_*` environment
//! variables. Every load path runs validation before the config is
//! handed out.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

mod error;

pub use error::ConfigError;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Remote backend settings
    pub backend: BackendConfig,

    /// CSV export settings
    pub export: ExportConfig,

    /// Log output settings
    pub logging: LoggingConfig,
}

/// Remote backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Name of the remote document collection
    pub collection: String,

    /// Delay in-memory backend operations to mimic a remote round-trip
    pub simulate_latency: bool,
}

/// CSV export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Default file name for CSV exports
    pub file_name: String,
}

/// Log output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum severity: trace, debug, info, warn, or error
    pub level: String,

    /// Emit JSON lines instead of human-readable text
    pub json_format: bool,

    /// Prefix events with a timestamp
    pub with_timestamp: bool,

    /// Include the emitting module path
    pub with_target: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            export: ExportConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            collection: "users".to_string(),
            simulate_latency: false,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: "users.csv".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            with_timestamp: true,
            with_target: true,
        }
    }
}

/// Read a boolean environment variable, absent counting as unset
fn env_flag(name: &str) -> Result<Option<bool>, ConfigError> {
    match env::var(name) {
        Ok(value) => value.parse().map(Some).map_err(|_| {
            ConfigError::InvalidValue(format!("{} must be true or false, got {:?}", name, value))
        }),
        Err(_) => Ok(None),
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Variables follow the pattern ROSTERLY_<SECTION>_<KEY>, for example
    /// `ROSTERLY_BACKEND_COLLECTION=staff`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(collection) = env::var("ROSTERLY_BACKEND_COLLECTION") {
            config.backend.collection = collection;
        }
        if let Some(flag) = env_flag("ROSTERLY_BACKEND_SIMULATE_LATENCY")? {
            config.backend.simulate_latency = flag;
        }

        if let Ok(file_name) = env::var("ROSTERLY_EXPORT_FILE_NAME") {
            config.export.file_name = file_name;
        }

        if let Ok(level) = env::var("ROSTERLY_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(flag) = env_flag("ROSTERLY_LOG_JSON")? {
            config.logging.json_format = flag;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileReadError(format!("{}: {}", path.display(), e)))?;

        let config: Self =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Check settings that have to hold regardless of where they came from
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend.collection.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "collection name must not be empty".to_string(),
            ));
        }

        if self.export.file_name.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "export file name must not be empty".to_string(),
            ));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::ValidationFailed(format!(
                "Invalid log level: {}",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Write the configuration out as TOML
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path, contents)
            .map_err(|e| ConfigError::FileWriteError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }
}
