//! Schemapath Schemas - JSON Schema documents for path validation
//!
//! This crate turns JSON Schema (as produced by model schema generators such
//! as pydantic or schemars) into a closed, typed node model that a path
//! walker can match exhaustively:
//! - **Object** nodes with declared `properties`
//! - **Array** nodes with uniform `items` or positional `prefixItems`, plus
//!   any `anyOf` alternatives for non-index segments
//! - **Reference** nodes (`$ref`) into the document's `$defs`
//! - **Union** nodes (`anyOf`)
//! - **Leaf** nodes for everything else
//!
//! ## Quick Start
//!
//! ```rust
//! use schemapath_schemas::{SchemaDocument, SchemaNode};
//! use serde_json::json;
//!
//! let document = SchemaDocument::from_value(&json!({
//!     "$ref": "#/$defs/User",
//!     "$defs": {
//!         "User": {"type": "object", "properties": {"name": {"type": "string"}}}
//!     }
//! })).unwrap();
//!
//! let user = document.resolve("#/$defs/User").unwrap();
//! assert_eq!(user.kind(), "object");
//! ```
//!
//! ## Malformed Schemas
//!
//! Shapes the walker cannot interpret (an array without item schemas, a
//! non-string `$ref`, ...) are rejected while parsing with a JSON Pointer to
//! the offending node. References are not checked up front: a `$ref` to a
//! missing definition fails when it is resolved.
//!
//! Copyright (c) 2025 Schemapath Team
//! Licensed under the Apache-2.0 license

pub mod document;
pub mod error;
pub mod loader;
pub mod resolver;

pub use document::{
    ArrayItems, ArraySchema, Definitions, ObjectSchema, SchemaDocument, SchemaNode, UnionSchema,
};
pub use error::{SchemaError, SchemaResult};
pub use loader::{Format, SchemaLoader, SchemaParser};
pub use resolver::resolve;
