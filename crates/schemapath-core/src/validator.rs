//! Path validation against schema documents
//!
//! The walker consumes one segment per object or array step. References and
//! unions consume nothing: a reference is replaced by its definition, and a
//! union hands the whole remaining path to each alternative in turn.
//!
//! Copyright (c) 2025 Schemapath Team
//! Licensed under the Apache-2.0 license

use crate::diagnostic::Diagnostic;
use crate::segment::Segment;
use schemapath_schemas::{ArrayItems, SchemaDocument, SchemaNode, SchemaResult};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Outcome of validating a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(Diagnostic),
}

/// Which diagnostic to report when every alternative of a union or
/// `prefixItems` list fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// The last alternative's diagnostic
    #[default]
    Last,
    /// The diagnostic that got furthest along the path; the earlier
    /// alternative wins ties
    Deepest,
}

/// Walks a [`SchemaDocument`] with candidate paths.
///
/// Cyclic `$ref` chains that never consume a segment recurse without bound.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'d> {
    document: &'d SchemaDocument,
    policy: FailurePolicy,
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(diagnostic) => Some(diagnostic),
        }
    }

    pub fn into_result(self) -> Result<(), Diagnostic> {
        match self {
            Verdict::Valid => Ok(()),
            Verdict::Invalid(diagnostic) => Err(diagnostic),
        }
    }
}

impl FailurePolicy {
    fn pick(self, current: Option<Diagnostic>, next: Diagnostic) -> Diagnostic {
        match (self, current) {
            (FailurePolicy::Deepest, Some(current)) if current.position >= next.position => current,
            _ => next,
        }
    }
}

impl<'d> Validator<'d> {
    /// Create a validator using [`FailurePolicy::Last`]
    pub fn new(document: &'d SchemaDocument) -> Self {
        Self {
            document,
            policy: FailurePolicy::default(),
        }
    }

    /// Set the failure policy for exhausted alternatives
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validate `path` from the document root.
    ///
    /// `Err` is reserved for schema contract violations such as a `$ref`
    /// naming a missing definition. An unresolvable reference inside one
    /// alternative aborts the whole walk, even if a later alternative would
    /// have matched.
    pub fn validate(&self, path: &[Segment]) -> SchemaResult<Verdict> {
        self.walk(self.document.root(), path, 0)
    }

    /// Validate `path` starting at `node`, resolving references against the
    /// validator's document
    pub fn validate_node(&self, path: &[Segment], node: &SchemaNode) -> SchemaResult<Verdict> {
        self.walk(node, path, 0)
    }

    fn walk(&self, node: &SchemaNode, path: &[Segment], position: usize) -> SchemaResult<Verdict> {
        let Some((head, tail)) = path.split_first() else {
            return Ok(Verdict::Valid);
        };
        trace!(position, segment = %head, node = node.kind(), "Walking schema node");

        match node {
            SchemaNode::Reference(reference) => {
                let target = self.document.resolve(reference)?;
                self.walk(target, path, position)
            }
            SchemaNode::Object(object) => match object.property(&head.as_key()) {
                Some(child) => self.walk(child, tail, position + 1),
                None => Ok(Verdict::Invalid(Diagnostic::unknown_property(
                    position,
                    head.clone(),
                    object.property_names(),
                ))),
            },
            SchemaNode::Array(array) if head.is_index() => {
                let verdict = match array.items() {
                    ArrayItems::Items(item) => Some(self.walk(item, tail, position + 1)?),
                    ArrayItems::PrefixItems(options) => self.any_of(options, tail, position + 1)?,
                };
                Ok(verdict.unwrap_or_else(|| self.not_navigable(node, head, position)))
            }
            // Non-index segments on an array fall through to its `anyOf`
            SchemaNode::Array(array) => {
                let verdict = self.any_of(array.any_of(), path, position)?;
                Ok(verdict.unwrap_or_else(|| self.not_navigable(node, head, position)))
            }
            SchemaNode::Union(union) => {
                let verdict = self.any_of(union.alternatives(), path, position)?;
                Ok(verdict.unwrap_or_else(|| self.not_navigable(node, head, position)))
            }
            SchemaNode::Leaf(_) => Ok(self.not_navigable(node, head, position)),
        }
    }

    /// Try each alternative in order; `None` when there are none
    fn any_of(
        &self,
        alternatives: &[SchemaNode],
        path: &[Segment],
        position: usize,
    ) -> SchemaResult<Option<Verdict>> {
        let mut failure = None;
        for (index, alternative) in alternatives.iter().enumerate() {
            match self.walk(alternative, path, position)? {
                Verdict::Valid => {
                    trace!(alternative = index, "Alternative matched");
                    return Ok(Some(Verdict::Valid));
                }
                Verdict::Invalid(diagnostic) => {
                    failure = Some(self.policy.pick(failure, diagnostic));
                }
            }
        }
        Ok(failure.map(Verdict::Invalid))
    }

    fn not_navigable(&self, node: &SchemaNode, head: &Segment, position: usize) -> Verdict {
        Verdict::Invalid(Diagnostic::not_navigable(position, head.clone(), node.to_value()))
    }
}

/// Validate `path` against `document` with the default policy
pub fn validate(path: &[Segment], document: &SchemaDocument) -> SchemaResult<Verdict> {
    Validator::new(document).validate(path)
}

/// Validate `path` against `node`, resolving references in `document`
pub fn validate_node(
    path: &[Segment],
    node: &SchemaNode,
    document: &SchemaDocument,
) -> SchemaResult<Verdict> {
    Validator::new(document).validate_node(path, node)
}
