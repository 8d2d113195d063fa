// Tests for output formatting
//
// These tests cover the check report in every output format and the
// quiet/color behavior of the writer.

use super::*;
use schemapath_core::{FailurePolicy, PathType};
use serde_json::json;

fn sample_report() -> CheckReport {
    let path_type = PathType::from_value(&json!({
        "type": "object",
        "properties": {
            "tags": {"type": "array", "items": {"type": "string"}}
        }
    }))
    .unwrap();

    let mut report = CheckReport::new("user.json", FailurePolicy::Last);
    report.push(PathOutcome::valid("tags[0]", &path_type.parse("tags[0]").unwrap()));
    let err = path_type.parse("name").unwrap_err();
    report.push(PathOutcome::invalid("name", &err));
    report
}

fn writer(format: OutputFormat, quiet: bool) -> (OutputWriter, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let writer = OutputWriter::with_writer(format, false, quiet, Box::new(buffer.clone()));
    (writer, buffer)
}

#[test]
fn test_check_report_human() {
    let formatted = OutputFormat::Human.format_check_report(&sample_report()).unwrap();
    assert_eq!(
        formatted,
        "✓ tags[0]\n\
         ✗ name: key 'name' doesn't exist in [\"tags\"] (segment 0)\n\
         1 of 2 path(s) invalid against user.json"
    );
}

#[test]
fn test_check_report_json() {
    let formatted = OutputFormat::Json.format_check_report(&sample_report()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&formatted).unwrap();
    assert_eq!(value["schema"], "user.json");
    assert_eq!(value["results"][0]["segments"], json!(["tags", 0]));
    assert_eq!(value["results"][1]["valid"], json!(false));
}

#[test]
fn test_check_report_yaml() {
    let formatted = OutputFormat::Yaml.format_check_report(&sample_report()).unwrap();
    assert!(formatted.contains("schema: user.json"));
    assert!(formatted.contains("policy: last"));
}

#[test]
fn test_writer_human_report() {
    let (mut output, buffer) = writer(OutputFormat::Human, false);
    output.check_report(&sample_report()).unwrap();

    let written = buffer.contents();
    assert!(written.contains("tags[0]\n"));
    assert!(written.contains("✗ name: key 'name'"));
    assert!(written.contains("INFO: 1 of 2 path(s) invalid"));
}

#[test]
fn test_writer_quiet_keeps_failures() {
    let (mut output, buffer) = writer(OutputFormat::Human, true);
    output.check_report(&sample_report()).unwrap();

    let written = buffer.contents();
    assert!(!written.contains("tags[0]"));
    assert!(written.contains("✗ name"));
    assert!(!written.contains("INFO"));
}

#[test]
fn test_writer_machine_formats_skip_messages() {
    let (mut output, buffer) = writer(OutputFormat::JsonPretty, false);
    output.info("hello").unwrap();
    output.success("done").unwrap();
    output.error("bad").unwrap();
    assert_eq!(buffer.contents(), "");

    output.data(&json!({"a": 1})).unwrap();
    assert_eq!(buffer.contents(), "{\n  \"a\": 1\n}\n");
}

#[test]
fn test_output_formatter_trait() {
    let value = json!({"path": "a.b"});
    assert_eq!(OutputFormat::Json.format(&value).unwrap(), r#"{"path":"a.b"}"#);
    assert_eq!(OutputFormat::Yaml.format(&value).unwrap(), "path: a.b\n");
    assert_eq!(OutputWriter::new(OutputFormat::Yaml, false, false).format(), OutputFormat::Yaml);
}
