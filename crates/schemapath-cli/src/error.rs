//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use schemapath_schemas::SchemaError;
use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from schemapath-core library
    #[error("{0}")]
    Core(#[from] schemapath_core::Error),

    /// Schema document could not be loaded
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// One or more checked paths did not fit the schema
    #[error("{invalid} of {total} path(s) invalid")]
    InvalidPaths { invalid: usize, total: usize },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidPaths { .. } => 1,
            Self::Core(_) => 2,
            Self::Schema(_) => 3,
            Self::FileNotFound { .. } => 4,
            Self::Config(_) => 5,
            Self::Io(_) => 10,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::Other { .. } => 99,
        }
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            Error::InvalidPaths { invalid: 1, total: 2 },
            Error::Core(schemapath_core::Error::syntax("bad", 0, "")),
            Error::Schema(SchemaError::malformed_array("/")),
            Error::FileNotFound { path: PathBuf::from("x.json") },
            Error::config("bad"),
            Error::other("bad"),
        ];
        let mut codes: Vec<i32> = errors.iter().map(Error::exit_code).collect();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
        assert!(codes.iter().all(|&code| code != 0));
    }

    #[test]
    fn test_format_error_plain() {
        let err = Error::InvalidPaths { invalid: 2, total: 3 };
        assert_eq!(format_error(&err, false), "Error: 2 of 3 path(s) invalid");
    }

    #[test]
    fn test_core_error_is_not_prefixed_twice() {
        let err = Error::from(schemapath_core::Error::syntax("expected ']'", 3, "a[0"));
        assert_eq!(err.to_string(), "Syntax error at position 3: expected ']'");
    }
}
