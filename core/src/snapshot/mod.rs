#![deny(missing_docs)]

//! # Snapshot Module
//!
//! Read-only view of the class a host editor hands to the planner.
//! The host owns the live AST; the planner only ever sees these structures
//! and emits mutation requests against the node ids they carry.

pub mod models;
pub mod validation;

// Re-export major types and functions to keep the crate-level API flat.
pub use models::{
    ChildNode, Entity, EntityKind, FieldMember, Member, MethodMember, NodeId, NodeKind, Parameter,
};
pub use validation::validate;
