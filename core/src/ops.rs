//! # Plan Documents
//!
//! The serializable output of the planner: one optional class-level
//! insertion, one optional import, and the member-level insertions in
//! selection order. The host applies ops top to bottom.
#![deny(missing_docs)]

use crate::annotations::{AnnotationKind, SWAGGER_PACKAGE};
use crate::snapshot::models::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One annotation insertion.
///
/// `text` is inserted immediately before `anchor`, which is the node the
/// host resolves inside the declaration `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertionOp {
    /// Declaration that receives the annotation.
    pub target: NodeId,
    /// Node the annotation text goes before.
    pub anchor: NodeId,
    /// Which annotation is inserted.
    pub annotation: AnnotationKind,
    /// Exact source text to insert.
    pub text: String,
}

impl InsertionOp {
    /// Builds an op from the annotation's static template.
    pub fn new(target: NodeId, anchor: NodeId, annotation: AnnotationKind) -> Self {
        InsertionOp {
            target,
            anchor,
            annotation,
            text: annotation.spec().template.to_string(),
        }
    }
}

impl fmt::Display for InsertionOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "insert {} on {} {} before {}",
            self.annotation,
            self.annotation.spec().target,
            self.target,
            self.anchor
        )
    }
}

/// One import insertion.
///
/// Applied at file level, immediately before the entity declaration, never
/// inside the class body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOp {
    /// Package to import, wildcard-style.
    pub package: String,
}

impl ImportOp {
    /// The single import every planned annotation resolves against.
    pub fn swagger() -> Self {
        ImportOp {
            package: SWAGGER_PACKAGE.to_string(),
        }
    }
}

impl fmt::Display for ImportOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "import {}.*", self.package)
    }
}

/// Ordered plan for one entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Class-level insertion, absent when the class is already annotated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_op: Option<InsertionOp>,
    /// Import insertion, absent when the import is already present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_op: Option<ImportOp>,
    /// Member and parameter insertions, in selection order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub member_ops: Vec<InsertionOp>,
}

impl Plan {
    /// True when there is nothing to apply.
    pub fn is_empty(&self) -> bool {
        self.class_op.is_none() && self.import_op.is_none() && self.member_ops.is_empty()
    }

    /// Total number of ops, imports included.
    pub fn len(&self) -> usize {
        self.class_op.iter().count() + self.import_op.iter().count() + self.member_ops.len()
    }

    /// All insertion ops in application order.
    pub fn insertion_ops(&self) -> impl Iterator<Item = &InsertionOp> {
        self.class_op.iter().chain(self.member_ops.iter())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Nothing to insert, the selection is already annotated.");
        }
        let mut lines = vec![format!("Planned {} op(s):", self.len())];
        if let Some(op) = &self.class_op {
            lines.push(format!("  {}", op));
        }
        if let Some(op) = &self.import_op {
            lines.push(format!("  {}", op));
        }
        for op in &self.member_ops {
            lines.push(format!("  {}", op));
        }
        write!(f, "{}", lines.join("\n"))
    }
}
