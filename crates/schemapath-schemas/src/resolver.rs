//! Local `$ref` resolution
//!
//! Only same-document references into the definitions map are supported
//! (`#/$defs/<key>`, or `#/definitions/<key>` from older generators). The
//! key is the last `/`-separated component of the reference, with JSON
//! Pointer escapes decoded.
//!
//! Copyright (c) 2025 Schemapath Team
//! Licensed under the Apache-2.0 license

use crate::document::{Definitions, SchemaNode};
use crate::error::{SchemaError, SchemaResult};

/// Resolve `reference` to the node stored in `definitions`.
///
/// A missing key is a malformed schema, reported as
/// [`SchemaError::UnresolvedReference`].
pub fn resolve<'a>(reference: &str, definitions: &'a Definitions) -> SchemaResult<&'a SchemaNode> {
    let key = reference_key(reference);
    definitions
        .get(key.as_str())
        .ok_or_else(|| SchemaError::unresolved_reference(reference, key))
}

/// Extract the definition key from a reference string.
///
/// `~1` and `~0` are decoded as JSON Pointer escapes, so a definition key
/// that literally contains `~1` cannot be referenced.
pub fn reference_key(reference: &str) -> String {
    let last = reference.rsplit('/').next().unwrap_or(reference);
    last.replace("~1", "/").replace("~0", "~")
}
