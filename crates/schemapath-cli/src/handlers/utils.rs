//! Shared utilities for command handlers

use crate::config::Config;
use crate::error::{Error, Result};
use schemapath_schemas::Format;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Locate a schema document.
///
/// An existing file is used as given. Otherwise the name is looked up in
/// `paths.schemas_dir`, first as written and then with each supported
/// extension appended.
pub fn resolve_schema_path(schema: &Path, config: &Config) -> Result<PathBuf> {
    if schema.is_file() {
        return Ok(schema.to_path_buf());
    }

    let Some(dir) = &config.paths.schemas_dir else {
        return Err(Error::FileNotFound {
            path: schema.to_path_buf(),
        });
    };

    let base = dir.join(schema);
    let mut candidates = vec![base.clone()];
    for format in [Format::Json, Format::Yaml] {
        for ext in format.extensions() {
            let mut name = base.clone().into_os_string();
            name.push(".");
            name.push(ext);
            candidates.push(PathBuf::from(name));
        }
    }

    debug!(schema = %schema.display(), dir = %dir.display(), "Searching schemas directory");
    candidates
        .into_iter()
        .find(|p| p.is_file())
        .ok_or_else(|| Error::FileNotFound {
            path: schema.to_path_buf(),
        })
}
