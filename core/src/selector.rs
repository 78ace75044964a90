//! # Member Selection
//!
//! Decides which members of an entity are offered for annotation and
//! defines the seam a host UI implements to pick among them.

use crate::annotations::MAPPING_ANNOTATIONS;
use crate::snapshot::models::{Entity, EntityKind, Member, NodeId};

/// Which methods a controller offers as candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MethodPolicy {
    /// Only methods carrying a Spring mapping annotation. This is the
    /// default, matching what a request handler looks like in practice.
    #[default]
    RequireMapping,
    /// Every method, mapping-annotated or not.
    AllMethods,
}

/// Candidate members for annotation, under the default method policy.
///
/// Controllers offer their handler methods, every other entity offers its
/// fields. Candidates keep declaration order.
pub fn select_candidates(entity: &Entity) -> Vec<&Member> {
    select_candidates_with(entity, MethodPolicy::default())
}

/// Candidate members for annotation with an explicit method policy.
pub fn select_candidates_with(entity: &Entity, policy: MethodPolicy) -> Vec<&Member> {
    match entity.kind() {
        EntityKind::Controller => entity
            .members
            .iter()
            .filter(|member| !member.is_field())
            .filter(|member| policy == MethodPolicy::AllMethods || has_mapping_annotation(member))
            .collect(),
        EntityKind::Plain => entity.members.iter().filter(|member| member.is_field()).collect(),
    }
}

fn has_mapping_annotation(member: &Member) -> bool {
    member
        .annotations()
        .iter()
        .any(|name| MAPPING_ANNOTATIONS.contains(&name.as_str()))
}

/// Host seam for choosing among candidates.
///
/// Returns the chosen member ids, or `None` when the user cancelled the
/// dialog. An empty `Vec` is a confirmed empty choice, not a cancel.
pub trait SelectionUi {
    /// Presents `candidates` and returns the picked ids.
    fn choose(&self, candidates: &[&Member]) -> Option<Vec<NodeId>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::models::{FieldMember, MethodMember};
    use indexmap::IndexSet;

    fn field(id: u32, name: &str) -> Member {
        Member::Field(FieldMember {
            id: NodeId(id),
            name: name.into(),
            ty: "String".into(),
            annotations: IndexSet::new(),
            children: Vec::new(),
        })
    }

    fn method(id: u32, name: &str, annotations: &[&str]) -> Member {
        Member::Method(MethodMember {
            id: NodeId(id),
            name: name.into(),
            annotations: annotations.iter().map(|a| a.to_string()).collect(),
            params: Vec::new(),
            children: Vec::new(),
        })
    }

    fn entity(name: &str, members: Vec<Member>) -> Entity {
        Entity {
            id: NodeId(1),
            name: name.into(),
            annotations: IndexSet::new(),
            imports: IndexSet::new(),
            children: Vec::new(),
            members,
        }
    }

    #[test]
    fn test_controller_offers_mapped_methods() {
        let entity = entity(
            "UserController",
            vec![
                field(5, "service"),
                method(
                    10,
                    "getUser",
                    &["org.springframework.web.bind.annotation.GetMapping"],
                ),
                method(20, "helper", &[]),
            ],
        );
        let names: Vec<&str> = select_candidates(&entity).iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["getUser"]);
    }

    #[test]
    fn test_all_methods_policy_keeps_unmapped_methods() {
        let entity = entity(
            "UserController",
            vec![
                method(
                    10,
                    "getUser",
                    &["org.springframework.web.bind.annotation.GetMapping"],
                ),
                method(20, "helper", &[]),
            ],
        );
        let names: Vec<&str> = select_candidates_with(&entity, MethodPolicy::AllMethods)
            .iter()
            .map(|m| m.name())
            .collect();
        assert_eq!(names, vec!["getUser", "helper"]);
        // Fields never become candidates on a controller.
        assert!(select_candidates_with(&entity, MethodPolicy::AllMethods)
            .iter()
            .all(|m| !m.is_field()));
    }

    #[test]
    fn test_plain_entity_offers_fields() {
        let entity = entity(
            "UserDto",
            vec![field(10, "name"), method(20, "touch", &[]), field(11, "age")],
        );
        let names: Vec<&str> = select_candidates(&entity).iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["name", "age"]);
    }

    #[test]
    fn test_non_spring_annotation_is_not_a_mapping() {
        let entity = entity(
            "UserController",
            vec![method(10, "getUser", &["io.swagger.annotations.ApiOperation"])],
        );
        assert!(select_candidates(&entity).is_empty());
    }

    struct PickAll;

    impl SelectionUi for PickAll {
        fn choose(&self, candidates: &[&Member]) -> Option<Vec<NodeId>> {
            Some(candidates.iter().map(|m| m.id()).collect())
        }
    }

    #[test]
    fn test_selection_ui_seam() {
        let entity = entity("UserDto", vec![field(10, "name"), field(11, "age")]);
        let candidates = select_candidates(&entity);
        let chosen = PickAll.choose(&candidates);
        assert_eq!(chosen, Some(vec![NodeId(10), NodeId(11)]));
    }
}
