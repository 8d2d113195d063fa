//! Schema Loader Demonstration
//!
//! This example loads the same model from YAML and JSON files, follows
//! `$ref` links through `$defs`, and shows how malformed schemas are
//! reported.
//!
//! Copyright (c) 2025 Schemapath Team
//! Licensed under the Apache-2.0 license

use schemapath_schemas::{Format, SchemaLoader, SchemaNode, SchemaResult};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ORDER_YAML: &str = r##"
$ref: "#/$defs/Order"
$defs:
  Order:
    type: object
    properties:
      id: {type: string}
      lines:
        type: array
        items: {$ref: "#/$defs/Line"}
  Line:
    type: object
    properties:
      sku: {type: string}
      quantity: {type: integer}
"##;

fn main() -> SchemaResult<()> {
    println!("Schema Loader Demonstration");
    println!("===========================\n");

    let temp_dir = TempDir::new().unwrap();
    let base_path = temp_dir.path();
    create_example_files(base_path);

    let mut loader = SchemaLoader::new();

    // Load from YAML and walk through the root reference
    let document = loader.load_file(&base_path.join("order.yaml"))?;
    let root = document.resolve("#/$defs/Order")?;
    describe("Order", root);

    if let SchemaNode::Object(order) = root {
        if let Some(SchemaNode::Array(_)) = order.property("lines") {
            println!("  lines is an array node");
        }
    }

    // The second load is served from the cache
    loader.load_file(&base_path.join("order.yaml"))?;
    println!("\nCached documents: {}", loader.cached());

    // The same document in JSON
    let json = fs::read_to_string(base_path.join("order.json")).unwrap();
    let from_json = loader.load_str(&json, Format::Json)?;
    println!("JSON and YAML agree: {}", from_json == *document);

    // Malformed schemas are rejected with a pointer to the node
    match loader.load_str(r#"{"type": "array"}"#, Format::Json) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("\nRejected: {}", e),
    }

    // Dangling references fail only when resolved
    let dangling = loader.load_str(r##"{"$ref": "#/$defs/Missing"}"##, Format::Json)?;
    if let Err(e) = dangling.resolve("#/$defs/Missing") {
        println!("Resolution failed: {}", e);
    }

    Ok(())
}

fn create_example_files(base_path: &Path) {
    fs::write(base_path.join("order.yaml"), ORDER_YAML).unwrap();

    let value: serde_json::Value = serde_yaml::from_str(ORDER_YAML).unwrap();
    fs::write(
        base_path.join("order.json"),
        serde_json::to_string_pretty(&value).unwrap(),
    )
    .unwrap();
}

fn describe(name: &str, node: &SchemaNode) {
    match node {
        SchemaNode::Object(object) => {
            let names: Vec<_> = object.property_names().collect();
            println!("{} is an object with properties {:?}", name, names);
        }
        other => println!("{} is a {} node", name, other.kind()),
    }
}
