//! # Snapshot Validation
//!
//! Structural host-contract checks performed before planning.
//!
//! The planner trusts ids to address nodes unambiguously, so a snapshot
//! with duplicate ids (or unnamed members) is rejected up front instead of
//! producing a plan that the applier cannot anchor deterministically.

use crate::error::{AppError, AppResult};
use crate::snapshot::models::{ChildNode, Entity, Member, NodeId};
use std::collections::HashSet;

/// Validates the host contract for one snapshot.
///
/// - every node id (entity, children at any depth, members, parameters)
///   occurs exactly once;
/// - the entity, member and parameter names are non-empty.
pub fn validate(entity: &Entity) -> AppResult<()> {
    if entity.name.is_empty() {
        return Err(AppError::InvalidSnapshot("entity has an empty name".into()));
    }

    let mut seen = HashSet::new();
    claim(entity.id, &mut seen)?;
    claim_children(&entity.children, &mut seen)?;

    for member in &entity.members {
        claim(member.id(), &mut seen)?;
        if member.name().is_empty() {
            return Err(AppError::InvalidSnapshot(format!(
                "member {} has an empty name",
                member.id()
            )));
        }
        claim_children(member.children(), &mut seen)?;

        if let Member::Method(method) = member {
            for param in &method.params {
                claim(param.id, &mut seen)?;
                if param.name.is_empty() {
                    return Err(AppError::InvalidSnapshot(format!(
                        "parameter {} has an empty name",
                        param.id
                    )));
                }
                claim_children(&param.children, &mut seen)?;
            }
        }
    }

    Ok(())
}

fn claim(id: NodeId, seen: &mut HashSet<NodeId>) -> AppResult<()> {
    if !seen.insert(id) {
        return Err(AppError::InvalidSnapshot(format!("duplicate node id {}", id)));
    }
    Ok(())
}

fn claim_children(children: &[ChildNode], seen: &mut HashSet<NodeId>) -> AppResult<()> {
    for child in children {
        claim(child.id, seen)?;
        claim_children(&child.children, seen)?;
    }
    Ok(())
}
