//! Typed paths
//!
//! A [`PathType`] is bound to one schema document and is the only way to
//! obtain a [`TypedPath`]: every path it hands out has been validated
//! against that document.
//!
//! ```rust
//! use schemapath_core::{PathType, Segment};
//! use serde_json::json;
//!
//! let order = PathType::from_value(&json!({
//!     "type": "object",
//!     "properties": {
//!         "lines": {"type": "array", "items": {"$ref": "#/$defs/Line"}}
//!     },
//!     "$defs": {
//!         "Line": {"type": "object", "properties": {"sku": {"type": "string"}}}
//!     }
//! })).unwrap();
//!
//! let sku = order.path([Segment::from("lines"), 0.into(), "sku".into()]).unwrap();
//! assert_eq!(sku.to_string(), "lines[0].sku");
//! assert!(order.parse("lines[0].price").is_err());
//! ```
//!
//! Copyright (c) 2025 Schemapath Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::format;
use crate::segment::Segment;
use crate::validator::{FailurePolicy, Validator, Verdict};
use schemapath_schemas::SchemaDocument;
use serde::de::{self, DeserializeSeed, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::debug;

/// Factory for paths validated against one schema document
#[derive(Debug, Clone)]
pub struct PathType {
    document: Arc<SchemaDocument>,
    policy: FailurePolicy,
}

/// A path that is known to be valid against its document.
///
/// Equality and hashing look at the segments only.
#[derive(Debug, Clone)]
pub struct TypedPath {
    segments: Vec<Segment>,
    document: Arc<SchemaDocument>,
}

impl PathType {
    /// Create a path type for `document`
    pub fn new(document: impl Into<Arc<SchemaDocument>>) -> Self {
        Self {
            document: document.into(),
            policy: FailurePolicy::default(),
        }
    }

    /// Parse a JSON Schema value and create a path type for it
    pub fn from_value(schema: &Value) -> Result<Self> {
        Ok(Self::new(SchemaDocument::from_value(schema)?))
    }

    /// Choose which diagnostic is reported when all alternatives fail
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The document paths are validated against
    pub fn document(&self) -> &SchemaDocument {
        &self.document
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Validate without constructing a path
    pub fn validate(&self, segments: &[Segment]) -> Result<Verdict> {
        Ok(Validator::new(&self.document)
            .with_policy(self.policy)
            .validate(segments)?)
    }

    /// Construct a validated path
    pub fn path<I, S>(&self, segments: I) -> Result<TypedPath>
    where
        I: IntoIterator<Item = S>,
        S: Into<Segment>,
    {
        let segments: Vec<Segment> = segments.into_iter().map(Into::into).collect();
        match self.validate(&segments)? {
            Verdict::Valid => Ok(TypedPath {
                segments,
                document: Arc::clone(&self.document),
            }),
            Verdict::Invalid(diagnostic) => {
                debug!(path = %format::format(&segments), %diagnostic, "Rejected path");
                Err(Error::InvalidPath(diagnostic))
            }
        }
    }

    /// Construct a validated path from its string form (`lines[0].sku`)
    pub fn parse(&self, text: &str) -> Result<TypedPath> {
        self.path(format::parse(text)?)
    }

    /// Construct a validated path from a JSON array of segments
    pub fn from_json(&self, json: &str) -> Result<TypedPath> {
        let segments: Vec<Segment> = serde_json::from_str(json)
            .map_err(|e| Error::json("expected an array of strings and integers", e))?;
        self.path(segments)
    }
}

impl TypedPath {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// The document this path was validated against
    pub fn document(&self) -> &SchemaDocument {
        &self.document
    }
}

impl PartialEq for TypedPath {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Eq for TypedPath {}

impl Hash for TypedPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.segments.hash(state);
    }
}

impl fmt::Display for TypedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::format(&self.segments))
    }
}

impl AsRef<[Segment]> for TypedPath {
    fn as_ref(&self) -> &[Segment] {
        &self.segments
    }
}

impl<'a> IntoIterator for &'a TypedPath {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl Serialize for TypedPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.segments.serialize(serializer)
    }
}

/// Deserialize a segment array and validate it against this path type
impl<'de> DeserializeSeed<'de> for &PathType {
    type Value = TypedPath;

    fn deserialize<D>(self, deserializer: D) -> std::result::Result<TypedPath, D::Error>
    where
        D: Deserializer<'de>,
    {
        let segments = Vec::<Segment>::deserialize(deserializer)?;
        self.path(segments).map_err(de::Error::custom)
    }
}
