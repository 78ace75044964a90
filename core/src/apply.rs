//! # Plan Application
//!
//! The mutation seam between the planner and a host editor, plus the
//! in-memory applier used to test planner idempotence end to end.

use crate::error::{AppError, AppResult};
use crate::ops::Plan;
use crate::snapshot::models::{ChildNode, Entity, Member, NodeId};
use std::collections::HashSet;

/// Host seam for carrying out a plan.
///
/// A host editor resolves each op's `anchor` id to its live AST node and
/// inserts the op's text before it, inside a single write action so the
/// whole plan lands atomically. Reformatting afterwards is the host's
/// business.
pub trait PlanApplier {
    /// Applies every op of `plan`, or fails without partial effect.
    fn apply(&mut self, plan: &Plan) -> AppResult<()>;
}

/// Applier that mutates a snapshot instead of a live AST.
///
/// Records each insertion in the owning declaration's annotation set and
/// the import in the entity's import set, which is exactly the state the
/// planner consults. Replanning the updated snapshot therefore yields an
/// empty plan.
#[derive(Debug, Clone)]
pub struct SnapshotApplier {
    entity: Entity,
}

impl SnapshotApplier {
    /// Wraps a snapshot for in-memory application.
    pub fn new(entity: Entity) -> Self {
        SnapshotApplier { entity }
    }

    /// The current snapshot state.
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    /// Consumes the applier, returning the updated snapshot.
    pub fn into_entity(self) -> Entity {
        self.entity
    }
}

impl PlanApplier for SnapshotApplier {
    fn apply(&mut self, plan: &Plan) -> AppResult<()> {
        // 1. Check every op before mutating anything, so a bad plan leaves
        //    the snapshot untouched.
        let annotatable = annotatable_ids(&self.entity);
        let known = known_ids(&self.entity);
        for op in plan.insertion_ops() {
            if !annotatable.contains(&op.target) {
                return Err(AppError::ForeignMember(op.target));
            }
            if !known.contains(&op.anchor) {
                return Err(AppError::AnchorMissing(op.anchor));
            }
        }

        // 2. Record the annotations on their targets.
        for op in plan.insertion_ops() {
            record(&mut self.entity, op.target, op.annotation.qualified_name())?;
        }

        // 3. Record the import.
        if let Some(import) = &plan.import_op {
            self.entity.imports.insert(import.package.clone());
        }

        Ok(())
    }
}

/// Ids of declarations that can carry an annotation.
fn annotatable_ids(entity: &Entity) -> HashSet<NodeId> {
    let mut ids = HashSet::new();
    ids.insert(entity.id);
    for member in &entity.members {
        ids.insert(member.id());
        if let Member::Method(method) = member {
            for param in &method.params {
                ids.insert(param.id);
            }
        }
    }
    ids
}

/// Every id in the snapshot, child nodes included. Anchors may point at
/// any of these.
fn known_ids(entity: &Entity) -> HashSet<NodeId> {
    let mut ids = annotatable_ids(entity);
    collect_children(&entity.children, &mut ids);
    for member in &entity.members {
        collect_children(member.children(), &mut ids);
        if let Member::Method(method) = member {
            for param in &method.params {
                collect_children(&param.children, &mut ids);
            }
        }
    }
    ids
}

fn collect_children(children: &[ChildNode], ids: &mut HashSet<NodeId>) {
    for child in children {
        ids.insert(child.id);
        collect_children(&child.children, ids);
    }
}

fn record(entity: &mut Entity, target: NodeId, annotation: &str) -> AppResult<()> {
    if entity.id == target {
        entity.annotations.insert(annotation.to_string());
        return Ok(());
    }
    for member in &mut entity.members {
        match member {
            Member::Field(field) if field.id == target => {
                field.annotations.insert(annotation.to_string());
                return Ok(());
            }
            Member::Method(method) => {
                if method.id == target {
                    method.annotations.insert(annotation.to_string());
                    return Ok(());
                }
                for param in &mut method.params {
                    if param.id == target {
                        param.annotations.insert(annotation.to_string());
                        return Ok(());
                    }
                }
            }
            _ => {}
        }
    }
    Err(AppError::ForeignMember(target))
}
