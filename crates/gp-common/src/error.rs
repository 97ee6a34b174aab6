//! Error types for the GP results viewer services.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using GpError.
pub type GpResult<T> = Result<T, GpError>;

/// Primary error type for startup and export operations.
///
/// Request handling never produces one of these: unknown query values are
/// coerced and missing images become placeholders.
#[derive(Debug, Error)]
pub enum GpError {
    // === Configuration Errors ===
    #[error("Failed to read configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),

    #[error("Configuration list '{0}' must not be empty")]
    EmptyOptionList(&'static str),

    #[error("Invalid configuration value for '{field}': {message}")]
    InvalidConfig { field: &'static str, message: String },

    // === Filesystem Errors ===
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GpError {
    /// Short machine-readable code used in structured log fields.
    pub fn code(&self) -> &'static str {
        match self {
            GpError::ConfigRead { .. } => "config_read",
            GpError::ConfigParse(_) => "config_parse",
            GpError::EmptyOptionList(_) => "empty_option_list",
            GpError::InvalidConfig { .. } => "invalid_config",
            GpError::Write { .. } => "write",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_message_names_the_list() {
        let err = GpError::EmptyOptionList("dates");
        assert_eq!(err.to_string(), "Configuration list 'dates' must not be empty");
        assert_eq!(err.code(), "empty_option_list");
    }

    #[test]
    fn test_config_read_keeps_source() {
        let err = GpError::ConfigRead {
            path: PathBuf::from("/etc/catalog.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("/etc/catalog.yaml"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
