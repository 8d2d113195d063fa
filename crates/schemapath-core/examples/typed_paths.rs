//! Typed path demonstration
//!
//! Builds a path type from a schema, constructs paths from segments and
//! strings, and prints the diagnostics for paths that do not fit.
//!
//! Copyright (c) 2025 Schemapath Team
//! Licensed under the Apache-2.0 license

use schemapath_core::{FailurePolicy, PathType, Result, Segment};
use serde_json::json;

fn main() -> Result<()> {
    let order = PathType::from_value(&json!({
        "$ref": "#/$defs/Order",
        "$defs": {
            "Order": {
                "type": "object",
                "properties": {
                    "id": {"type": "string"},
                    "lines": {"type": "array", "items": {"$ref": "#/$defs/Line"}},
                    "shipping": {"anyOf": [{"$ref": "#/$defs/Address"}, {"type": "null"}]}
                }
            },
            "Line": {"type": "object", "properties": {"sku": {}, "quantity": {}}},
            "Address": {"type": "object", "properties": {"city": {}, "zip": {}}}
        }
    }))?;

    let sku = order.path([Segment::from("lines"), 0.into(), "sku".into()])?;
    println!("constructed: {sku}");
    println!("as JSON:     {}", serde_json::to_string(&sku).unwrap());

    let city = order.parse("shipping.city")?;
    println!("parsed:      {city} ({} segments)", city.len());

    for candidate in ["lines[0].price", "shipping.country", "id[0]"] {
        match order.parse(candidate) {
            Ok(path) => println!("valid:       {path}"),
            Err(e) => println!("rejected:    {candidate}: {e}"),
        }
    }

    let deepest = order.clone().with_policy(FailurePolicy::Deepest);
    if let Err(e) = deepest.parse("shipping.country") {
        println!("deepest:     {e}");
    }

    Ok(())
}
