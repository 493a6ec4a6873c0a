//! Comprehensive tests for domkit-dom
//!
//! Tree structure, move semantics, templates and collections working together.

use domkit_dom::{Document, DomError, DomTree, NodeId, NodeType};

fn card_document() -> (Document, NodeId, NodeId) {
    let mut doc = Document::default();
    let body = doc.body();
    let tree = doc.tree_mut();

    let template = tree.create_element("template");
    tree.set_attribute(template, "id", "card-template").unwrap();
    let content = tree.template_content(template).unwrap();
    let card = tree.create_element("div");
    tree.set_attribute(card, "class", "card").unwrap();
    let title = tree.create_element("h2");
    tree.set_text_content(title, "Title").unwrap();
    tree.append_child(card, title).unwrap();
    tree.append_child(content, card).unwrap();
    tree.append_child(body, template).unwrap();

    (doc, template, card)
}

// ============================================================================
// TRAVERSAL
// ============================================================================

#[test]
fn test_document_order_across_levels() {
    let mut tree = DomTree::new();
    let root = tree.root();
    let section = tree.create_element("section");
    let a = tree.create_element("p");
    let b = tree.create_element("p");
    let nested = tree.create_element("p");
    let c = tree.create_element("p");

    tree.append_child(root, section).unwrap();
    tree.append_child(section, a).unwrap();
    tree.append_child(section, b).unwrap();
    tree.append_child(b, nested).unwrap();
    tree.append_child(section, c).unwrap();

    let ps = tree.get_elements_by_tag_name(root, "p").items(&tree);
    assert_eq!(ps, vec![a, b, nested, c]);
}

// ============================================================================
// TEMPLATES
// ============================================================================

#[test]
fn test_template_content_hidden_from_queries() {
    let (doc, template, card) = card_document();
    let tree = doc.tree();

    assert_eq!(doc.get_element_by_id("card-template"), Some(template));
    let divs = tree.get_elements_by_tag_name(tree.root(), "div").items(tree);
    assert!(!divs.contains(&card));
    assert_eq!(tree.template_first_element(template), Some(card));
}

#[test]
fn test_clone_template_first_element() {
    let (mut doc, template, card) = card_document();
    let tree = doc.tree_mut();

    let first = tree.template_first_element(template).unwrap();
    let clone = tree.clone_node(first, true).unwrap();

    assert_ne!(clone, card);
    assert_eq!(tree.node_type(clone), Some(NodeType::Element));
    assert_eq!(tree.text_content(clone), "Title");
    assert!(!tree.is_connected(clone));

    tree.set_attribute(clone, "class", "card featured").unwrap();
    assert_eq!(tree.get_attribute(card, "class"), Some("card"));
}

// ============================================================================
// MUTATION
// ============================================================================

#[test]
fn test_move_between_parents_keeps_order() {
    let mut tree = DomTree::new();
    let from = tree.create_element("ul");
    let to = tree.create_element("ol");
    let items: Vec<NodeId> = (0..4)
        .map(|_| {
            let li = tree.create_element("li");
            tree.append_child(from, li).unwrap();
            li
        })
        .collect();

    tree.append_child(to, items[2]).unwrap();
    tree.append_child(to, items[0]).unwrap();

    assert_eq!(tree.element_children(from).collect::<Vec<_>>(), vec![items[1], items[3]]);
    assert_eq!(tree.element_children(to).collect::<Vec<_>>(), vec![items[2], items[0]]);
}

#[test]
fn test_document_rejects_second_level_text() {
    let mut tree = DomTree::new();
    let text = tree.create_text("loose");
    let root = tree.root();
    assert!(matches!(
        tree.append_child(root, text),
        Err(DomError::HierarchyRequest { .. })
    ));
}

// ============================================================================
// ATTRIBUTE VIEWS
// ============================================================================

#[test]
fn test_dataset_and_class_list_share_attributes() {
    let mut tree = DomTree::new();
    let button = tree.create_element("button");
    tree.set_data(button, "actionId", "save").unwrap();
    let mut classes = tree.class_list(button);
    classes.add(&["primary"]);
    tree.set_class_list(button, &classes).unwrap();

    assert_eq!(
        tree.attributes(button),
        vec![("data-action-id", "save"), ("class", "primary")]
    );
}
