#![deny(missing_docs)]

//! # Swaggen Core
//!
//! Core library for planning Swagger annotation insertions over host
//! editor snapshots.
//!
//! A host (an IDE plugin, the bundled CLI) serializes one class-like
//! declaration as an [`Entity`] snapshot, asks the selector which members
//! are worth annotating, and hands the chosen ids to the planner. The
//! planner answers with an ordered [`Plan`] of insertion ops the host
//! carries out through its [`PlanApplier`].

/// Shared error types.
pub mod error;

/// Static annotation catalog.
pub mod annotations;

/// Snapshot model and validation.
pub mod snapshot;

/// Member candidate selection.
pub mod selector;

/// Insertion anchor resolution.
pub mod anchor;

/// Plan document types.
pub mod ops;

/// The insertion planner.
pub mod planner;

/// Plan application seam and the in-memory applier.
pub mod apply;

pub use anchor::{class_anchor, element_anchor};
pub use annotations::{
    AnnotationKind, AnnotationSpec, TargetKind, ANNOTATION_SPECS, MAPPING_ANNOTATIONS,
    SWAGGER_PACKAGE,
};
pub use apply::{PlanApplier, SnapshotApplier};
pub use error::{AppError, AppResult};
pub use ops::{ImportOp, InsertionOp, Plan};
pub use planner::plan;
pub use selector::{select_candidates, select_candidates_with, MethodPolicy, SelectionUi};
pub use snapshot::{
    ChildNode, Entity, EntityKind, FieldMember, Member, MethodMember, NodeId, NodeKind, Parameter,
};
