//! # Snapshot Models
//!
//! definition of the snapshot structures a host serializes for one
//! generation run: the class-like entity, its members and parameters, and
//! the child-node skeleton the anchor policy reads.
//!
//! Annotation and import sets are `IndexSet`s so the host's declaration
//! order survives round-trips through the document formats.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle the host assigns to every node in one snapshot.
///
/// Ids are opaque to the planner; they only need to be unique within the
/// snapshot (see [`crate::snapshot::validate`]).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Classification of a snapshot child node.
///
/// The planner only ever distinguishes documentation from everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A documentation comment node.
    DocComment,
    /// Any non-documentation node (modifiers, keywords, nested elements).
    Code,
}

/// An immediate AST child as the host snapshotted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildNode {
    /// Host handle for this node.
    pub id: NodeId,
    /// Documentation or code.
    pub kind: NodeKind,
    /// The node's own children, in order. Hosts may stop at any depth;
    /// the anchor policy reads at most one level below the entity's
    /// leading child.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ChildNode>,
}

/// Entity classification inferred from the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A web controller; the selector offers its methods.
    Controller,
    /// Any other class; the selector offers its fields.
    Plain,
}

/// The class-like declaration being annotated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Host handle for the declaration itself.
    pub id: NodeId,
    /// Simple class name. Drives the controller classification.
    pub name: String,
    /// Qualified names of annotations already present on the class.
    #[serde(default)]
    pub annotations: IndexSet<String>,
    /// On-demand imports already present in the containing file.
    #[serde(default)]
    pub imports: IndexSet<String>,
    /// Immediate children in declaration order (anchor policy input).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ChildNode>,
    /// Declared members in declaration order.
    #[serde(default)]
    pub members: Vec<Member>,
}

impl Entity {
    /// Classifies the entity by the name-substring heuristic.
    ///
    /// Kept in one place so a richer classifier (tags, annotations) can
    /// replace the heuristic without touching the selector or planner.
    pub fn kind(&self) -> EntityKind {
        if self.name.contains("Controller") {
            EntityKind::Controller
        } else {
            EntityKind::Plain
        }
    }

    /// Looks up a declared member by host id.
    pub fn member(&self, id: NodeId) -> Option<&Member> {
        self.members.iter().find(|m| m.id() == id)
    }
}

/// A declared member: either a field or a method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Member {
    /// A field declaration.
    Field(FieldMember),
    /// A method declaration.
    Method(MethodMember),
}

impl Member {
    /// Host handle of the underlying declaration.
    pub fn id(&self) -> NodeId {
        match self {
            Member::Field(f) => f.id,
            Member::Method(m) => m.id,
        }
    }

    /// Declared name.
    pub fn name(&self) -> &str {
        match self {
            Member::Field(f) => &f.name,
            Member::Method(m) => &m.name,
        }
    }

    /// Annotations already present on the declaration.
    pub fn annotations(&self) -> &IndexSet<String> {
        match self {
            Member::Field(f) => &f.annotations,
            Member::Method(m) => &m.annotations,
        }
    }

    /// Immediate children in declaration order.
    pub fn children(&self) -> &[ChildNode] {
        match self {
            Member::Field(f) => &f.children,
            Member::Method(m) => &m.children,
        }
    }

    /// True for field members.
    pub fn is_field(&self) -> bool {
        matches!(self, Member::Field(_))
    }

    /// Human word for the member kind, used in listings and errors.
    pub fn kind_label(&self) -> &'static str {
        if self.is_field() {
            "field"
        } else {
            "method"
        }
    }
}

/// A field declaration snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMember {
    /// Host handle.
    pub id: NodeId,
    /// Field name.
    pub name: String,
    /// Declared type text. Informational; the planner never interprets it.
    #[serde(default)]
    pub ty: String,
    /// Qualified names of annotations already on the field.
    #[serde(default)]
    pub annotations: IndexSet<String>,
    /// Immediate children in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ChildNode>,
}

/// A method declaration snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodMember {
    /// Host handle.
    pub id: NodeId,
    /// Method name.
    pub name: String,
    /// Qualified names of annotations already on the method.
    #[serde(default)]
    pub annotations: IndexSet<String>,
    /// Parameters in declaration order.
    #[serde(default)]
    pub params: Vec<Parameter>,
    /// Immediate children in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ChildNode>,
}

/// A method parameter snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Host handle.
    pub id: NodeId,
    /// Parameter name.
    pub name: String,
    /// Declared type text. Informational; the planner never interprets it.
    #[serde(default)]
    pub ty: String,
    /// Qualified names of annotations already on the parameter.
    #[serde(default)]
    pub annotations: IndexSet<String>,
    /// Immediate children in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ChildNode>,
}
