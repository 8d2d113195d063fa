//! Parsing of JSON and YAML schema files
//!
//! Copyright (c) 2025 Schemapath Team
//! Licensed under the Apache-2.0 license

use crate::error::{SchemaError, SchemaResult};
use serde_json::Value;
use std::path::Path;

/// Supported file formats for schema documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML format (.yaml, .yml)
    Yaml,
    /// JSON format (.json)
    Json,
}

impl Format {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> SchemaResult<Self> {
        if let Some(extension) = path.extension().and_then(|ext| ext.to_str()) {
            match extension.to_lowercase().as_str() {
                "yaml" | "yml" => Ok(Format::Yaml),
                "json" => Ok(Format::Json),
                _ => Err(SchemaError::unsupported_format(path.to_path_buf())),
            }
        } else {
            Err(SchemaError::unsupported_format(path.to_path_buf()))
        }
    }

    /// Get file extensions for this format
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Format::Yaml => &["yaml", "yml"],
            Format::Json => &["json"],
        }
    }
}

/// Stateless parser turning file content into JSON values
#[derive(Debug, Default)]
pub struct SchemaParser;

impl SchemaParser {
    /// Create a new schema parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a schema file, detecting format from extension
    pub fn parse_file(&self, path: &Path) -> SchemaResult<Value> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SchemaError::io_error(path.to_path_buf(), e))?;

        match Format::from_path(path) {
            Ok(format) => self.parse_content(&content, format, path),
            Err(_) => self.parse_with_fallback(&content, path).map(|(value, _)| value),
        }
    }

    /// Parse content with explicit format
    pub fn parse_content(&self, content: &str, format: Format, path: &Path) -> SchemaResult<Value> {
        match format {
            Format::Yaml => self.parse_yaml(content, path),
            Format::Json => self.parse_json(content, path),
        }
    }

    /// Parse YAML content
    pub fn parse_yaml(&self, content: &str, path: &Path) -> SchemaResult<Value> {
        // YAML-specific errors surface here, before conversion
        let yaml_value: serde_yaml::Value = serde_yaml::from_str(content)
            .map_err(|e| SchemaError::yaml_parse_error(path.to_path_buf(), e))?;

        serde_json::to_value(yaml_value)
            .map_err(|e| SchemaError::json_parse_error(path.to_path_buf(), e))
    }

    /// Parse JSON content
    pub fn parse_json(&self, content: &str, path: &Path) -> SchemaResult<Value> {
        serde_json::from_str(content)
            .map_err(|e| SchemaError::json_parse_error(path.to_path_buf(), e))
    }

    /// Try JSON, then YAML, for content without a recognised extension
    pub fn parse_with_fallback(&self, content: &str, path: &Path) -> SchemaResult<(Value, Format)> {
        if let Ok(value) = self.parse_json(content, path) {
            return Ok((value, Format::Json));
        }

        if let Ok(value) = self.parse_yaml(content, path) {
            return Ok((value, Format::Yaml));
        }

        Err(SchemaError::unsupported_format(path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_format_detection() {
        assert_eq!(Format::from_path(Path::new("model.yaml")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("model.YML")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("model.json")).unwrap(), Format::Json);
        assert!(Format::from_path(Path::new("model.txt")).is_err());
        assert!(Format::from_path(Path::new("model")).is_err());
        assert_eq!(Format::Yaml.extensions(), &["yaml", "yml"]);
    }

    #[test]
    fn test_yaml_parsing() -> SchemaResult<()> {
        let parser = SchemaParser::new();
        let yaml = r#"
type: object
properties:
  name:
    type: string
"#;
        let value = parser.parse_yaml(yaml, Path::new("model.yaml"))?;
        assert_eq!(value["type"], "object");
        assert_eq!(value["properties"]["name"]["type"], "string");
        Ok(())
    }

    #[test]
    fn test_json_parsing_error_keeps_path() {
        let parser = SchemaParser::new();
        let err = parser.parse_json("{", Path::new("broken.json")).unwrap_err();
        assert!(matches!(err, SchemaError::JsonParseError { .. }));
        assert_eq!(err.path().map(|p| p.display().to_string()), Some("broken.json".into()));
    }

    #[test]
    fn test_fallback_parsing() -> SchemaResult<()> {
        let parser = SchemaParser::new();

        let (value, format) = parser.parse_with_fallback(r#"{"type": "object"}"#, Path::new("schema"))?;
        assert_eq!(format, Format::Json);
        assert_eq!(value["type"], "object");

        let (value, format) = parser.parse_with_fallback("type: array\nitems: {}", Path::new("schema"))?;
        assert_eq!(format, Format::Yaml);
        assert_eq!(value["type"], "array");

        Ok(())
    }

    #[test]
    fn test_parse_file() -> SchemaResult<()> {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.yml");
        fs::write(&path, "type: object\n").unwrap();

        let parser = SchemaParser::new();
        assert_eq!(parser.parse_file(&path)?["type"], "object");

        let missing = dir.path().join("missing.json");
        assert!(matches!(parser.parse_file(&missing), Err(SchemaError::IoError { .. })));
        Ok(())
    }
}
