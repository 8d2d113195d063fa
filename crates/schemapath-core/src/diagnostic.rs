//! Diagnostics for paths that do not fit a schema
//!
//! Copyright (c) 2025 Schemapath Team
//! Licensed under the Apache-2.0 license

use crate::segment::Segment;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Why a candidate path failed to validate.
///
/// Returned as a value by the validator; only the path factory turns it into
/// an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Zero-based index of the offending segment
    pub position: usize,
    /// The offending segment
    pub segment: Segment,
    /// What the schema expected at that point
    pub reason: Reason,
}

/// Failure category of a [`Diagnostic`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reason {
    /// The object node has no property with this name
    UnknownProperty {
        /// Declared property names, in declaration order
        available: Vec<String>,
    },
    /// The node cannot be navigated with this segment
    NotNavigable {
        /// The schema node the segment was applied to
        schema: Value,
    },
}

impl Diagnostic {
    /// The segment names no declared property of an object node
    pub fn unknown_property<'a>(
        position: usize,
        segment: Segment,
        available: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            position,
            segment,
            reason: Reason::UnknownProperty {
                available: available.into_iter().map(str::to_string).collect(),
            },
        }
    }

    /// The segment cannot be applied to `schema`
    pub fn not_navigable(position: usize, segment: Segment, schema: Value) -> Self {
        Self {
            position,
            segment,
            reason: Reason::NotNavigable { schema },
        }
    }

    /// Human-readable description without the position suffix
    pub fn message(&self) -> String {
        match &self.reason {
            Reason::UnknownProperty { available } => {
                let names = available
                    .iter()
                    .map(|name| format!("{name:?}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("key '{}' doesn't exist in [{}]", self.segment, names)
            }
            Reason::NotNavigable { schema } => {
                format!("key '{}' doesn't exist in schema: {}", self.segment, schema)
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (segment {})", self.message(), self.position)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_property_message() {
        let diagnostic = Diagnostic::unknown_property(1, Segment::from("c"), ["b"]);
        assert_eq!(diagnostic.message(), r#"key 'c' doesn't exist in ["b"]"#);
        assert_eq!(diagnostic.to_string(), r#"key 'c' doesn't exist in ["b"] (segment 1)"#);
    }

    #[test]
    fn test_unknown_property_without_properties() {
        let diagnostic = Diagnostic::unknown_property(0, Segment::from("a"), []);
        assert_eq!(diagnostic.message(), "key 'a' doesn't exist in []");
    }

    #[test]
    fn test_not_navigable_message() {
        let diagnostic = Diagnostic::not_navigable(2, Segment::from("x"), json!({"type": "string"}));
        assert_eq!(
            diagnostic.message(),
            r#"key 'x' doesn't exist in schema: {"type":"string"}"#
        );
    }

    #[test]
    fn test_serialization() {
        let diagnostic = Diagnostic::unknown_property(0, Segment::from(3), ["a", "b"]);
        assert_eq!(
            serde_json::to_value(&diagnostic).unwrap(),
            json!({
                "position": 0,
                "segment": 3,
                "reason": {"kind": "unknown_property", "available": ["a", "b"]}
            })
        );
    }
}
