//! Error types for the schemapath core library
//!
//! Path diagnostics and schema contract violations are kept apart: a
//! diagnostic says the caller's path does not fit the schema, a
//! [`SchemaError`] says the schema itself is unusable.

use crate::diagnostic::Diagnostic;
use schemapath_schemas::SchemaError;
use thiserror::Error;

/// Main error type for schemapath operations
#[derive(Error, Debug)]
pub enum Error {
    /// The path does not fit the schema
    #[error("Invalid path: {0}")]
    InvalidPath(Diagnostic),

    /// The schema cannot be walked (bad `$ref`, malformed node, I/O)
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// A path string could not be parsed
    #[error("Syntax error at position {position}: {message}")]
    Syntax {
        message: String,
        position: usize,
        input: String,
    },

    /// A JSON segment list could not be decoded
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a syntax error for a path string
    pub fn syntax(message: impl Into<String>, position: usize, input: impl Into<String>) -> Self {
        Self::Syntax {
            message: message.into(),
            position,
            input: input.into(),
        }
    }

    /// Create a JSON decoding error
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// The validation diagnostic, if this is an invalid path
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Self::InvalidPath(diagnostic) => Some(diagnostic),
            _ => None,
        }
    }

    /// Whether the caller-supplied path is at fault
    pub fn is_path_error(&self) -> bool {
        matches!(self, Self::InvalidPath(_) | Self::Syntax { .. } | Self::Json { .. })
    }

    /// Whether the schema document is at fault
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::Schema(err) if err.is_contract_violation())
    }
}

impl From<Diagnostic> for Error {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::InvalidPath(diagnostic)
    }
}
