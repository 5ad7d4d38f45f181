//! Error types for aerostack.
//!
//! The dashboard core (filtering, aggregation, view composition) is total
//! and has no error path; these types cover the fallible edges around it:
//! configuration, data loading, and terminal I/O.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for aerostack operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Data Source Errors ===
    /// Failed to read a data file.
    #[error("failed to read data file {path}: {source}")]
    DataFile {
        /// Path to the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a data file.
    #[error("failed to parse data file {path}: {source}")]
    DataParse {
        /// Path to the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    // === Terminal Errors ===
    /// Terminal setup, drawing, or teardown failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for aerostack operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Create a data file read error.
    #[must_use]
    pub fn data_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DataFile {
            path: path.into(),
            source,
        }
    }

    /// Create a data file parse error.
    #[must_use]
    pub fn data_parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::DataParse {
            path: path.into(),
            source,
        }
    }

    /// Check if this error came from loading or parsing a data file.
    #[must_use]
    pub fn is_data_error(&self) -> bool {
        matches!(self, Self::DataFile { .. } | Self::DataParse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation_display() {
        let err = Error::config_validation("tick_rate_ms must be greater than 0");
        assert_eq!(
            err.to_string(),
            "invalid configuration: tick_rate_ms must be greater than 0"
        );
    }

    #[test]
    fn test_data_file_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::data_file("/tmp/orders.json", io_err);
        let msg = err.to_string();
        assert!(msg.contains("/tmp/orders.json"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_data_parse_display() {
        let parse_err = serde_json::from_str::<i32>("not json").unwrap_err();
        let err = Error::data_parse("/tmp/orders.json", parse_err);
        assert!(err.to_string().contains("/tmp/orders.json"));
    }

    #[test]
    fn test_is_data_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert!(Error::data_file("/x", io_err).is_data_error());
        assert!(!Error::config_validation("bad").is_data_error());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Terminal(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<i32>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
