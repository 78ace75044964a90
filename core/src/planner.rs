//! # Annotation Planner
//!
//! Turns a validated snapshot plus a member selection into an ordered
//! [`Plan`](crate::ops::Plan). Planning is pure: nothing here touches the
//! host AST, and replanning an already-annotated entity yields an empty
//! plan, so applying a plan twice never duplicates an annotation.

use crate::anchor::{class_anchor, element_anchor};
use crate::annotations::{AnnotationKind, SWAGGER_PACKAGE};
use crate::error::{AppError, AppResult};
use crate::ops::{ImportOp, InsertionOp, Plan};
use crate::snapshot::models::{Entity, FieldMember, Member, MethodMember, NodeId};
use std::collections::HashSet;

/// Plans annotation insertions for the selected members of `entity`.
///
/// The selection must be non-empty, belong to the entity, and hold a single
/// member kind. The first selected member decides the class-level
/// annotation: `@ApiModel` for fields, `@Api` for methods.
pub fn plan(entity: &Entity, selection: &[NodeId]) -> AppResult<Plan> {
    if selection.is_empty() {
        return Err(AppError::EmptySelection);
    }

    // 1. Resolve ids against the entity, collapsing repeated picks onto
    //    their first occurrence.
    let members = resolve_selection(entity, selection)?;

    // 2. One run annotates one kind of member.
    ensure_homogeneous(&members)?;

    let mut result = Plan::default();

    // 3. Class-level annotation, decided by the selection kind.
    let class_kind = if members[0].is_field() {
        AnnotationKind::ApiModel
    } else {
        AnnotationKind::Api
    };
    if !entity.annotations.contains(class_kind.qualified_name()) {
        result.class_op = Some(InsertionOp::new(entity.id, class_anchor(entity), class_kind));
    }

    // 4. Import once per file.
    if !entity.imports.contains(SWAGGER_PACKAGE) {
        result.import_op = Some(ImportOp::swagger());
    }

    // 5. Member ops, in selection order.
    for member in members {
        match member {
            Member::Field(field) => plan_field(field, &mut result.member_ops),
            Member::Method(method) => plan_method(method, &mut result.member_ops),
        }
    }

    Ok(result)
}

fn resolve_selection<'a>(entity: &'a Entity, selection: &[NodeId]) -> AppResult<Vec<&'a Member>> {
    let mut seen = HashSet::new();
    let mut members = Vec::new();
    for &id in selection {
        if !seen.insert(id) {
            continue;
        }
        match entity.member(id) {
            Some(member) => members.push(member),
            None => return Err(AppError::ForeignMember(id)),
        }
    }
    Ok(members)
}

fn ensure_homogeneous(members: &[&Member]) -> AppResult<()> {
    let first = members[0];
    if let Some(other) = members.iter().find(|m| m.is_field() != first.is_field()) {
        return Err(AppError::MixedSelectionKind(describe(first), describe(other)));
    }
    Ok(())
}

fn describe(member: &Member) -> String {
    format!("{} '{}'", member.kind_label(), member.name())
}

fn plan_field(field: &FieldMember, ops: &mut Vec<InsertionOp>) {
    let property = AnnotationKind::ApiModelProperty;
    if field.annotations.contains(property.qualified_name()) {
        return;
    }
    ops.push(InsertionOp::new(
        field.id,
        element_anchor(field.id, &field.children),
        property,
    ));
}

fn plan_method(method: &MethodMember, ops: &mut Vec<InsertionOp>) {
    // Parameters come first so their ops precede the method's own.
    for param in &method.params {
        if param
            .annotations
            .contains(AnnotationKind::ApiParam.qualified_name())
        {
            continue;
        }
        ops.push(InsertionOp::new(
            param.id,
            element_anchor(param.id, &param.children),
            AnnotationKind::ApiParam,
        ));
    }

    let operation = AnnotationKind::ApiOperation;
    if !method.annotations.contains(operation.qualified_name()) {
        ops.push(InsertionOp::new(
            method.id,
            element_anchor(method.id, &method.children),
            operation,
        ));
    }
}
