//! Benchmarks for path validation and path strings
//!
//! Copyright (c) 2025 Schemapath Team
//! Licensed under the Apache-2.0 license

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use schemapath_core::{format, parse, FailurePolicy, PathType, SchemaDocument, Segment, Validator};
use serde_json::json;

fn create_test_document() -> SchemaDocument {
    SchemaDocument::from_value(&json!({
        "$ref": "#/$defs/Node",
        "$defs": {
            "Node": {
                "type": "object",
                "properties": {
                    "name": {"type": "string"},
                    "attributes": {
                        "anyOf": [
                            {"type": "object", "properties": {"color": {}, "size": {}}},
                            {"type": "object", "properties": {"weight": {}}},
                            {"type": "null"}
                        ]
                    },
                    "children": {"type": "array", "items": {"$ref": "#/$defs/Node"}}
                }
            }
        }
    }))
    .expect("benchmark schema")
}

fn nested_path(depth: usize) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(depth * 2 + 1);
    for i in 0..depth {
        segments.push(Segment::from("children"));
        segments.push(Segment::from(i));
    }
    segments.push(Segment::from("name"));
    segments
}

fn bench_validate_depth(c: &mut Criterion) {
    let document = create_test_document();
    let validator = Validator::new(&document);

    let mut group = c.benchmark_group("validate_depth");
    for depth in [1, 8, 32, 128] {
        let path = nested_path(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &path, |b, path| {
            b.iter(|| validator.validate(black_box(path)))
        });
    }
    group.finish();
}

fn bench_union_failure(c: &mut Criterion) {
    let document = create_test_document();
    let path = vec![Segment::from("attributes"), Segment::from("missing")];

    let mut group = c.benchmark_group("union_failure");
    for policy in [FailurePolicy::Last, FailurePolicy::Deepest] {
        let validator = Validator::new(&document).with_policy(policy);
        group.bench_function(format!("{policy:?}"), |b| {
            b.iter(|| validator.validate(black_box(&path)))
        });
    }
    group.finish();
}

fn bench_path_strings(c: &mut Criterion) {
    let path_type = PathType::new(create_test_document());
    let path = nested_path(16);
    let text = format(&path);

    c.bench_function("format", |b| b.iter(|| format(black_box(&path))));
    c.bench_function("parse", |b| b.iter(|| parse(black_box(&text))));
    c.bench_function("path_type_parse", |b| {
        b.iter(|| path_type.parse(black_box(&text)))
    });
}

criterion_group!(
    benches,
    bench_validate_depth,
    bench_union_failure,
    bench_path_strings
);
criterion_main!(benches);
