//! Schema file loading
//!
//! This module reads JSON Schema documents from disk or memory:
//! - JSON and YAML parsing, detected from the file extension
//! - Content sniffing for files with an unknown extension
//! - An in-memory cache of parsed documents keyed by canonical path
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use schemapath_schemas::loader::SchemaLoader;
//! use std::path::Path;
//!
//! let mut loader = SchemaLoader::new();
//! let document = loader.load_file(Path::new("order.schema.json"))?;
//! println!("{} definitions", document.definitions().len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Copyright (c) 2025 Schemapath Team
//! Licensed under the Apache-2.0 license

pub mod parser;
pub mod schema_loader;

pub use parser::{Format, SchemaParser};
pub use schema_loader::SchemaLoader;
