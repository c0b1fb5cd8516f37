//! Logging setup errors

use std::fmt;

/// Failures raised while configuring log output
#[derive(Debug, Clone)]
pub enum LoggingError {
    /// Installing the global subscriber failed, usually because one is
    /// already set for this process
    InitializationFailed(String),
    /// The requested settings cannot be applied
    InvalidConfiguration(String),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (prefix, detail) = match self {
            LoggingError::InitializationFailed(msg) => ("Failed to initialize logging", msg),
            LoggingError::InvalidConfiguration(msg) => ("Invalid logging configuration", msg),
        };
        write!(f, "{}: {}", prefix, detail)
    }
}

impl std::error::Error for LoggingError {}
