//! Schemapath Core - typed, schema-validated paths into data models
//!
//! A path is a sequence of [`Segment`]s (property names and array indices)
//! that addresses a location inside data described by a JSON Schema. This
//! crate checks paths against a [`SchemaDocument`] and hands out
//! [`TypedPath`] values that are known to fit it.
//!
//! # Main Components
//!
//! - **Validator**: walks the schema tree, following `$ref`, `anyOf`,
//!   `items` and `prefixItems`, and reports a [`Diagnostic`] on failure
//! - **Path types**: [`PathType`] binds a document and constructs [`TypedPath`]s
//! - **Path strings**: [`format`] and [`parse`] for the `lines[0].sku` syntax
//! - **Models**: with the `schemars` feature, paths into `JsonSchema` types
//!
//! # Example
//!
//! ```rust
//! use schemapath_core::{validate, Segment, SchemaDocument};
//! use serde_json::json;
//!
//! let document = SchemaDocument::from_value(&json!({
//!     "type": "object",
//!     "properties": {"tags": {"type": "array", "items": {"type": "string"}}}
//! })).unwrap();
//!
//! let ok = validate(&[Segment::from("tags"), Segment::from(0)], &document).unwrap();
//! assert!(ok.is_valid());
//!
//! let bad = validate(&[Segment::from("name")], &document).unwrap();
//! assert_eq!(bad.diagnostic().unwrap().position, 0);
//! ```

pub mod diagnostic;
pub mod error;
pub mod format;
#[cfg(feature = "schemars")]
pub mod model;
pub mod path;
pub mod segment;
pub mod validator;

pub use diagnostic::{Diagnostic, Reason};
pub use error::{Error, Result};
pub use format::{format, parse};
#[cfg(feature = "schemars")]
pub use model::ModelPath;
pub use path::{PathType, TypedPath};
pub use segment::Segment;
pub use validator::{validate, validate_node, FailurePolicy, Validator, Verdict};

// Re-export the schema model so callers need only one dependency
pub use schemapath_schemas::{SchemaDocument, SchemaError, SchemaNode, SchemaResult};
