//! Configuration errors

use thiserror::Error;

/// Failures while loading, validating, or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A setting parsed but fails a semantic check
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    /// An environment variable held a value of the wrong shape
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    /// The config file could not be read
    #[error("Failed to read configuration file: {0}")]
    FileReadError(String),

    /// The config file could not be written
    #[error("Failed to write configuration file: {0}")]
    FileWriteError(String),

    /// The file contents are not valid TOML for this config
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// The config could not be rendered back to TOML
    #[error("Failed to serialize configuration: {0}")]
    SerializeError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::ValidationFailed("collection name must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration validation failed: collection name must not be empty"
        );

        let err = ConfigError::InvalidValue("Invalid JSON flag: oops".to_string());
        assert!(err.to_string().starts_with("Invalid configuration value"));
    }
}
