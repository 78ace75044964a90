//! # Anchor Resolution
//!
//! Picks the node an annotation is inserted before.
//!
//! Annotations land above the first non-doc child of a declaration, which
//! keeps them visually attached to the code instead of drifting above any
//! doc comment. A declaration with no usable child anchors on itself.

use crate::snapshot::models::{ChildNode, Entity, NodeId, NodeKind};

/// First child that is not a doc comment, in declaration order.
pub fn first_code_child(children: &[ChildNode]) -> Option<&ChildNode> {
    children.iter().find(|child| child.kind != NodeKind::DocComment)
}

/// Anchor for an annotation attached to the element `id` with the given
/// direct children. Falls back to the element itself when every child is
/// a doc comment (or there are none).
pub fn element_anchor(id: NodeId, children: &[ChildNode]) -> NodeId {
    match first_code_child(children) {
        Some(child) => child.id,
        None => id,
    }
}

/// Anchor for a class-level annotation.
///
/// The rule applies twice: the entity's first non-doc child hosts the
/// declaration header, and the annotation goes before that host's own
/// first non-doc child. Each missing level falls back one step at a time.
pub fn class_anchor(entity: &Entity) -> NodeId {
    match first_code_child(&entity.children) {
        Some(host) => element_anchor(host.id, &host.children),
        None => entity.id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexSet;

    fn node(id: u32, kind: NodeKind, children: Vec<ChildNode>) -> ChildNode {
        ChildNode {
            id: NodeId(id),
            kind,
            children,
        }
    }

    fn entity(children: Vec<ChildNode>) -> Entity {
        Entity {
            id: NodeId(1),
            name: "UserController".into(),
            annotations: IndexSet::new(),
            imports: IndexSet::new(),
            children,
            members: Vec::new(),
        }
    }

    #[test]
    fn test_element_anchor_skips_doc_comments() {
        let children = vec![
            node(2, NodeKind::DocComment, Vec::new()),
            node(3, NodeKind::Code, Vec::new()),
        ];
        assert_eq!(element_anchor(NodeId(1), &children), NodeId(3));
    }

    #[test]
    fn test_element_anchor_falls_back_to_element() {
        assert_eq!(element_anchor(NodeId(1), &[]), NodeId(1));
        let only_docs = vec![node(2, NodeKind::DocComment, Vec::new())];
        assert_eq!(element_anchor(NodeId(1), &only_docs), NodeId(1));
    }

    #[test]
    fn test_class_anchor_descends_two_levels() {
        let entity = entity(vec![
            node(2, NodeKind::DocComment, Vec::new()),
            node(3, NodeKind::Code, vec![node(4, NodeKind::Code, Vec::new())]),
        ]);
        assert_eq!(class_anchor(&entity), NodeId(4));
    }

    #[test]
    fn test_class_anchor_falls_back_one_level_at_a_time() {
        // Host child without children anchors on the host itself.
        let host_only = entity(vec![node(3, NodeKind::Code, Vec::new())]);
        assert_eq!(class_anchor(&host_only), NodeId(3));

        // No usable child at all anchors on the entity.
        let bare = entity(vec![node(2, NodeKind::DocComment, Vec::new())]);
        assert_eq!(class_anchor(&bare), NodeId(1));
    }
}
