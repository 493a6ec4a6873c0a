//! Edge case tests for domkit-dom
//!
//! Dangling handles, detached subtrees and odd names.

use domkit_dom::{DomError, DomTree, NodeId};

// ============================================================================
// DANGLING AND DETACHED NODES
// ============================================================================

#[test]
fn test_operations_on_unknown_ids() {
    let mut tree = DomTree::new();
    let missing = NodeId::NONE;

    assert!(tree.get(missing).is_none());
    assert_eq!(tree.children(missing).count(), 0);
    assert_eq!(tree.descendants(missing).count(), 0);
    assert!(!tree.is_element(missing));
    assert_eq!(tree.text_content(missing), "");
    assert!(matches!(
        tree.append_child(tree.root(), missing),
        Err(DomError::NotFound(_))
    ));
}

#[test]
fn test_detach_is_idempotent() {
    let mut tree = DomTree::new();
    let div = tree.create_element("div");
    tree.detach(div);
    tree.detach(div);
    assert_eq!(tree.parent(div), None);
}

#[test]
fn test_remove_child_requires_parent() {
    let mut tree = DomTree::new();
    let a = tree.create_element("div");
    let b = tree.create_element("span");
    assert!(matches!(
        tree.remove_child(a, b),
        Err(DomError::NotAChild { .. })
    ));

    tree.append_child(a, b).unwrap();
    tree.remove_child(a, b).unwrap();
    assert_eq!(tree.children(a).count(), 0);
}

#[test]
fn test_descendants_of_detached_subtree_stay_inside() {
    let mut tree = DomTree::new();
    let outer = tree.create_element("div");
    let inner = tree.create_element("div");
    let leaf = tree.create_element("i");
    let sibling = tree.create_element("b");
    tree.append_child(outer, inner).unwrap();
    tree.append_child(inner, leaf).unwrap();
    tree.append_child(outer, sibling).unwrap();

    let under_inner: Vec<NodeId> = tree.descendants(inner).collect();
    assert_eq!(under_inner, vec![leaf]);
}

#[test]
fn test_insert_before_self_is_noop() {
    let mut tree = DomTree::new();
    let ul = tree.create_element("ul");
    let a = tree.create_element("li");
    let b = tree.create_element("li");
    tree.append_child(ul, a).unwrap();
    tree.append_child(ul, b).unwrap();

    tree.insert_before(ul, a, Some(a)).unwrap();
    assert_eq!(tree.element_children(ul).collect::<Vec<_>>(), vec![a, b]);
}

// ============================================================================
// NAMES AND TEXT
// ============================================================================

#[test]
fn test_unicode_text_and_attribute_values() {
    let mut tree = DomTree::new();
    let p = tree.create_element("p");
    tree.set_text_content(p, "Привет 🚀").unwrap();
    tree.set_attribute(p, "title", "こんにちは").unwrap();

    assert_eq!(tree.text_content(p), "Привет 🚀");
    assert_eq!(tree.get_attribute(p, "title"), Some("こんにちは"));
}

#[test]
fn test_empty_text_content_clears_children() {
    let mut tree = DomTree::new();
    let p = tree.create_element("p");
    tree.set_text_content(p, "x").unwrap();
    tree.set_text_content(p, "").unwrap();
    assert_eq!(tree.children(p).count(), 0);
}

#[test]
fn test_invalid_attribute_names() {
    let mut tree = DomTree::new();
    let div = tree.create_element("div");
    for name in ["a b", "x=y", "quote\"", "slash/", "tab\t"] {
        assert!(
            matches!(tree.set_attribute(div, name, "v"), Err(DomError::InvalidCharacter(_))),
            "accepted {name:?}"
        );
    }
}

#[test]
fn test_many_children() {
    let mut tree = DomTree::new();
    let ul = tree.create_element("ul");
    for _ in 0..1_000 {
        let li = tree.create_element("li");
        tree.append_child(ul, li).unwrap();
    }
    assert_eq!(tree.children_collection(ul).length(&tree), 1_000);
}
