//! Property-based tests for validation and path strings
//!
//! These tests verify invariants that should hold for all segment
//! sequences, independent of the concrete schema.

use proptest::prelude::*;
use schemapath_core::{format, parse, validate, PathType, SchemaDocument, Segment};
use serde_json::json;

/// Strategy for generating segments, biased toward awkward keys
fn segment_strategy() -> impl Strategy<Value = Segment> {
    prop_oneof![
        "[a-z_][a-z0-9_]{0,8}".prop_map(Segment::Key),
        "[0-9]{1,4}".prop_map(Segment::Key),
        "[ -~]{0,10}".prop_map(Segment::Key),
        "\\PC{0,6}".prop_map(Segment::Key),
        any::<i64>().prop_map(Segment::Index),
    ]
}

fn path_strategy() -> impl Strategy<Value = Vec<Segment>> {
    proptest::collection::vec(segment_strategy(), 0..8)
}

fn catalog() -> SchemaDocument {
    SchemaDocument::from_value(&json!({
        "$ref": "#/$defs/Catalog",
        "$defs": {
            "Catalog": {
                "type": "object",
                "properties": {
                    "items": {"type": "array", "items": {"$ref": "#/$defs/Item"}},
                    "meta": {"anyOf": [{"type": "object", "properties": {"a": {}}}, {"type": "null"}]}
                }
            },
            "Item": {
                "type": "object",
                "properties": {
                    "name": {"type": "string"},
                    "children": {"type": "array", "items": {"$ref": "#/$defs/Item"}}
                }
            }
        }
    }))
    .expect("catalog schema")
}

proptest! {
    #[test]
    fn test_format_parse_inverse(segments in path_strategy()) {
        let text = format(&segments);
        prop_assert_eq!(parse(&text).unwrap(), segments);
    }

    #[test]
    fn test_format_is_deterministic(segments in path_strategy()) {
        prop_assert_eq!(format(&segments), format(&segments.clone()));
    }

    #[test]
    fn test_validation_is_deterministic(segments in path_strategy()) {
        let doc = catalog();
        let first = validate(&segments, &doc).unwrap();
        let second = validate(&segments, &doc).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_diagnostic_points_inside_path(segments in path_strategy()) {
        let doc = catalog();
        if let Some(diagnostic) = validate(&segments, &doc).unwrap().diagnostic() {
            prop_assert!(diagnostic.position < segments.len());
            prop_assert_eq!(&diagnostic.segment, &segments[diagnostic.position]);
        }
    }

    #[test]
    fn test_valid_prefixes_stay_valid(segments in path_strategy()) {
        let doc = catalog();
        if validate(&segments, &doc).unwrap().is_valid() {
            for end in 0..segments.len() {
                prop_assert!(validate(&segments[..end], &doc).unwrap().is_valid());
            }
        }
    }

    #[test]
    fn test_recursive_paths_are_valid(depth in 0usize..6, index in 0i64..1000) {
        let catalog = PathType::new(catalog());
        let mut segments = vec![Segment::from("items"), Segment::Index(index)];
        for _ in 0..depth {
            segments.push(Segment::from("children"));
            segments.push(Segment::Index(index));
        }
        segments.push(Segment::from("name"));

        let path = catalog.path(segments.clone()).unwrap();
        prop_assert_eq!(path.segments(), segments.as_slice());
        prop_assert_eq!(catalog.parse(&path.to_string()).unwrap(), path);
    }
}
