//! Error types for schema loading, parsing and reference resolution
//!
//! Copyright (c) 2025 Schemapath Team
//! Licensed under the Apache-2.0 license

use std::path::PathBuf;
use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while turning JSON into a [`SchemaDocument`](crate::SchemaDocument)
/// or while resolving references inside one.
///
/// None of these describe a bad candidate path. They mean the schema itself
/// does not have the shape the path walker relies on.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// File I/O errors
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parsing errors
    #[error("Failed to parse YAML file '{path}': {source}")]
    YamlParseError {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// JSON parsing errors
    #[error("Failed to parse JSON file '{path}': {source}")]
    JsonParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Unsupported file format
    #[error("Unsupported file format for '{path}'. Expected .yaml, .yml, or .json")]
    UnsupportedFormat { path: PathBuf },

    /// A schema keyword holds a value of the wrong JSON type
    #[error("Malformed schema node at '{pointer}': {reason}")]
    MalformedNode { pointer: String, reason: String },

    /// An array node declares neither `items` nor `prefixItems`
    #[error("Array schema at '{pointer}' has neither 'items' nor 'prefixItems'")]
    MalformedArray { pointer: String },

    /// A `$ref` names a key that is missing from the definitions map
    #[error("Unresolved reference '{reference}': no definition named '{key}'")]
    UnresolvedReference { reference: String, key: String },
}

impl SchemaError {
    /// Create an I/O error with path context
    pub fn io_error(path: PathBuf, error: std::io::Error) -> Self {
        Self::IoError {
            path,
            source: error,
        }
    }

    /// Create a YAML parsing error with path context
    pub fn yaml_parse_error(path: PathBuf, error: serde_yaml::Error) -> Self {
        Self::YamlParseError {
            path,
            source: error,
        }
    }

    /// Create a JSON parsing error with path context
    pub fn json_parse_error(path: PathBuf, error: serde_json::Error) -> Self {
        Self::JsonParseError {
            path,
            source: error,
        }
    }

    /// Create an unsupported format error
    pub fn unsupported_format(path: PathBuf) -> Self {
        Self::UnsupportedFormat { path }
    }

    /// Create a malformed node error
    pub fn malformed_node(pointer: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedNode {
            pointer: pointer.into(),
            reason: reason.into(),
        }
    }

    /// Create a malformed array error
    pub fn malformed_array(pointer: impl Into<String>) -> Self {
        Self::MalformedArray {
            pointer: pointer.into(),
        }
    }

    /// Create an unresolved reference error
    pub fn unresolved_reference(reference: impl Into<String>, key: impl Into<String>) -> Self {
        Self::UnresolvedReference {
            reference: reference.into(),
            key: key.into(),
        }
    }

    /// Get the file path associated with this error, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::IoError { path, .. } => Some(path),
            Self::YamlParseError { path, .. } => Some(path),
            Self::JsonParseError { path, .. } => Some(path),
            Self::UnsupportedFormat { path } => Some(path),
            _ => None,
        }
    }

    /// Get the JSON pointer of the offending schema node, if any
    pub fn pointer(&self) -> Option<&str> {
        match self {
            Self::MalformedNode { pointer, .. } | Self::MalformedArray { pointer } => Some(pointer),
            _ => None,
        }
    }

    /// Whether the schema content (rather than the file holding it) is at fault
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::MalformedNode { .. } | Self::MalformedArray { .. } | Self::UnresolvedReference { .. }
        )
    }
}
