//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use crate::snapshot::NodeId;
use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// The planner was invoked with an empty selection.
    ///
    /// Callers are expected to no-op on empty selections before planning,
    /// so reaching this variant indicates a caller bug rather than a user
    /// condition.
    #[display("Empty selection: nothing to plan")]
    EmptySelection,

    /// A single run selected both fields and methods.
    #[from(ignore)]
    #[display("Mixed selection: {_0} and {_1} cannot be planned together")]
    MixedSelectionKind(String, String),

    /// A selected member id does not belong to the planned entity.
    #[from(ignore)]
    #[display("Member {_0} does not belong to the planned entity")]
    ForeignMember(NodeId),

    /// An op's target or anchor node is not present in the snapshot.
    #[from(ignore)]
    #[display("Anchor {_0} not found in the snapshot")]
    AnchorMissing(NodeId),

    /// The snapshot violates the host contract (duplicate ids, empty names).
    #[from(ignore)]
    #[display("Invalid snapshot: {_0}")]
    InvalidSnapshot(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
