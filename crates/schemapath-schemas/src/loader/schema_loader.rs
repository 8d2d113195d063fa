//! Schema loader producing shared, parsed documents
//!
//! Copyright (c) 2025 Schemapath Team
//! Licensed under the Apache-2.0 license

use crate::document::SchemaDocument;
use crate::error::{SchemaError, SchemaResult};
use crate::loader::parser::{Format, SchemaParser};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Loads schema documents and caches them by canonical path
#[derive(Debug, Default)]
pub struct SchemaLoader {
    parser: SchemaParser,
    cache: HashMap<PathBuf, Arc<SchemaDocument>>,
}

impl SchemaLoader {
    /// Create a new schema loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and parse a schema file.
    ///
    /// Repeated loads of the same file return the cached document.
    pub fn load_file(&mut self, path: &Path) -> SchemaResult<Arc<SchemaDocument>> {
        let canonical = path
            .canonicalize()
            .map_err(|e| SchemaError::io_error(path.to_path_buf(), e))?;

        if let Some(document) = self.cache.get(&canonical) {
            debug!(path = %canonical.display(), "Schema cache hit");
            return Ok(Arc::clone(document));
        }

        let value = self.parser.parse_file(&canonical)?;
        let document = Arc::new(SchemaDocument::from_value(&value)?);
        debug!(
            path = %canonical.display(),
            definitions = document.definitions().len(),
            "Loaded schema document"
        );

        self.cache.insert(canonical, Arc::clone(&document));
        Ok(document)
    }

    /// Parse a schema document from in-memory content
    pub fn load_str(&self, content: &str, format: Format) -> SchemaResult<SchemaDocument> {
        let value = self.parser.parse_content(content, format, Path::new("<memory>"))?;
        SchemaDocument::from_value(&value)
    }

    /// Number of cached documents
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    /// Drop all cached documents
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::SchemaNode;
    use std::fs;
    use tempfile::tempdir;

    const ORDER_SCHEMA: &str = r##"{
        "$defs": {
            "Line": {"type": "object", "properties": {"sku": {"type": "string"}}}
        },
        "type": "object",
        "properties": {
            "lines": {"type": "array", "items": {"$ref": "#/$defs/Line"}}
        }
    }"##;

    #[test]
    fn test_load_file_uses_cache() -> SchemaResult<()> {
        let dir = tempdir().unwrap();
        let path = dir.path().join("order.json");
        fs::write(&path, ORDER_SCHEMA).unwrap();

        let mut loader = SchemaLoader::new();
        let first = loader.load_file(&path)?;
        let second = loader.load_file(&path)?;

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(loader.cached(), 1);
        assert_eq!(first.definition("Line").map(SchemaNode::kind), Some("object"));

        loader.clear_cache();
        assert_eq!(loader.cached(), 0);
        Ok(())
    }

    #[test]
    fn test_load_str_yaml() -> SchemaResult<()> {
        let loader = SchemaLoader::new();
        let document = loader.load_str(
            "type: array\nprefixItems:\n  - type: string\n  - type: integer\n",
            Format::Yaml,
        )?;
        assert_eq!(document.root().kind(), "array");
        Ok(())
    }

    #[test]
    fn test_load_file_reports_malformed_schema() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        fs::write(&path, "type: array\n").unwrap();

        let mut loader = SchemaLoader::new();
        let err = loader.load_file(&path).unwrap_err();
        assert!(matches!(err, SchemaError::MalformedArray { .. }));
        assert_eq!(loader.cached(), 0);
    }

    #[test]
    fn test_load_missing_file() {
        let mut loader = SchemaLoader::new();
        let err = loader.load_file(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, SchemaError::IoError { .. }));
    }
}
