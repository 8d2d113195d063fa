//! Result types produced by the check command

use schemapath_core::{Diagnostic, Error as CoreError, FailurePolicy, Segment, TypedPath};
use serde::Serialize;

/// Outcome of checking a batch of paths against one schema
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub schema: String,
    pub policy: FailurePolicy,
    pub results: Vec<PathOutcome>,
}

/// Outcome for a single candidate path
#[derive(Debug, Clone, Serialize)]
pub struct PathOutcome {
    /// The path as given on the command line
    pub input: String,
    pub valid: bool,
    /// Canonical path string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<Segment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<Diagnostic>,
}

impl CheckReport {
    pub fn new(schema: impl Into<String>, policy: FailurePolicy) -> Self {
        Self {
            schema: schema.into(),
            policy,
            results: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: PathOutcome) {
        self.results.push(outcome);
    }

    pub fn invalid_count(&self) -> usize {
        self.results.iter().filter(|r| !r.valid).count()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }
}

impl PathOutcome {
    pub fn valid(input: impl Into<String>, path: &TypedPath) -> Self {
        Self {
            input: input.into(),
            valid: true,
            path: Some(path.to_string()),
            segments: Some(path.segments().to_vec()),
            error: None,
            diagnostic: None,
        }
    }

    pub fn invalid(input: impl Into<String>, error: &CoreError) -> Self {
        let message = match error.diagnostic() {
            Some(diagnostic) => diagnostic.to_string(),
            None => error.to_string(),
        };
        Self {
            input: input.into(),
            valid: false,
            path: None,
            segments: None,
            error: Some(message),
            diagnostic: error.diagnostic().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemapath_core::PathType;
    use serde_json::json;

    #[test]
    fn test_report_counts_and_serialization() {
        let path_type = PathType::from_value(&json!({
            "type": "object",
            "properties": {"id": {"type": "string"}}
        }))
        .unwrap();

        let mut report = CheckReport::new("user.json", FailurePolicy::Last);
        report.push(PathOutcome::valid("id", &path_type.parse("id").unwrap()));
        let err = path_type.parse("name").unwrap_err();
        report.push(PathOutcome::invalid("name", &err));

        assert_eq!(report.total(), 2);
        assert_eq!(report.invalid_count(), 1);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["policy"], json!("last"));
        assert_eq!(value["results"][0], json!({
            "input": "id",
            "valid": true,
            "path": "id",
            "segments": ["id"]
        }));
        assert_eq!(value["results"][1]["diagnostic"]["reason"]["available"], json!(["id"]));
        assert_eq!(
            value["results"][1]["error"],
            json!(r#"key 'name' doesn't exist in ["id"] (segment 0)"#)
        );
    }

    #[test]
    fn test_syntax_errors_have_no_diagnostic() {
        let err = CoreError::syntax("expected ']'", 3, "a[0");
        let outcome = PathOutcome::invalid("a[0", &err);
        assert!(!outcome.valid);
        assert!(outcome.diagnostic.is_none());
        assert_eq!(
            outcome.error.as_deref(),
            Some("Syntax error at position 3: expected ']'")
        );
    }
}
