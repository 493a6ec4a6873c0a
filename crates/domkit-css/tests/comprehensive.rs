//! Comprehensive tests for domkit-css
//!
//! Selector queries over realistic trees.

use domkit_css::{SelectorList, closest, matches, query_selector, query_selector_all};
use domkit_dom::{DomTree, NodeId};

struct Page {
    tree: DomTree,
    main: NodeId,
    cards: Vec<NodeId>,
    form: NodeId,
    inputs: Vec<NodeId>,
}

fn element(tree: &mut DomTree, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
    let id = tree.create_element(tag);
    for (name, value) in attrs {
        tree.set_attribute(id, name, value).unwrap();
    }
    tree.append_child(parent, id).unwrap();
    id
}

fn page() -> Page {
    let mut tree = DomTree::new();
    let root = tree.root();
    let html = element(&mut tree, root, "html", &[]);
    let body = element(&mut tree, html, "body", &[]);
    let main = element(&mut tree, body, "main", &[("id", "content")]);

    let cards = vec![
        element(&mut tree, main, "article", &[("class", "card featured"), ("data-kind", "news")]),
        element(&mut tree, main, "article", &[("class", "card hidden"), ("data-kind", "sports")]),
        element(&mut tree, main, "article", &[("class", "card"), ("data-kind", "news-local")]),
    ];
    for &card in &cards {
        element(&mut tree, card, "h2", &[]);
    }

    let form = element(&mut tree, body, "form", &[]);
    let inputs = vec![
        element(&mut tree, form, "input", &[("type", "text"), ("required", "")]),
        element(&mut tree, form, "input", &[("type", "checkbox"), ("checked", "")]),
        element(&mut tree, form, "input", &[("type", "text"), ("disabled", "")]),
    ];

    Page { tree, main, cards, form, inputs }
}

// ============================================================================
// SIMPLE SELECTORS
// ============================================================================

#[test]
fn test_id_and_class_queries() {
    let p = page();
    let root = p.tree.root();
    assert_eq!(query_selector(&p.tree, root, "#content").unwrap(), Some(p.main));
    assert_eq!(query_selector_all(&p.tree, root, ".card").unwrap(), p.cards);
    assert_eq!(
        query_selector_all(&p.tree, root, "main > .card:not(.hidden)").unwrap(),
        vec![p.cards[0], p.cards[2]]
    );
}

#[test]
fn test_attribute_queries() {
    let p = page();
    let root = p.tree.root();
    assert_eq!(
        query_selector_all(&p.tree, root, "[data-kind|=news]").unwrap(),
        vec![p.cards[0], p.cards[2]]
    );
    assert_eq!(
        query_selector_all(&p.tree, root, "[data-kind^=sp]").unwrap(),
        vec![p.cards[1]]
    );
    assert_eq!(
        query_selector_all(&p.tree, root, r#"input[type="TEXT" i]"#).unwrap(),
        vec![p.inputs[0], p.inputs[2]]
    );
}

// ============================================================================
// PSEUDO-CLASSES
// ============================================================================

#[test]
fn test_form_pseudo_classes() {
    let p = page();
    let root = p.tree.root();
    assert_eq!(query_selector_all(&p.tree, root, ":checked").unwrap(), vec![p.inputs[1]]);
    assert_eq!(query_selector_all(&p.tree, root, ":disabled").unwrap(), vec![p.inputs[2]]);
    assert_eq!(
        query_selector_all(&p.tree, root, "input:enabled").unwrap(),
        vec![p.inputs[0], p.inputs[1]]
    );
    assert_eq!(query_selector_all(&p.tree, root, ":required").unwrap(), vec![p.inputs[0]]);
}

// ============================================================================
// SCOPING
// ============================================================================

#[test]
fn test_scoped_queries_stay_inside_scope() {
    let p = page();
    let in_form = query_selector_all(&p.tree, p.form, "input").unwrap();
    assert_eq!(in_form, p.inputs);
    assert!(query_selector_all(&p.tree, p.form, "article").unwrap().is_empty());

    // Ancestors outside the scope still take part in matching
    assert_eq!(query_selector_all(&p.tree, p.form, "body input").unwrap().len(), 3);
}

#[test]
fn test_scope_pseudo_class() {
    let p = page();
    let headings = query_selector_all(&p.tree, p.main, ":scope > article > h2").unwrap();
    assert_eq!(headings.len(), 3);
    assert!(query_selector_all(&p.tree, p.main, ":scope > h2").unwrap().is_empty());

    let root = p.tree.root();
    let html = query_selector(&p.tree, root, ":scope").unwrap();
    assert_eq!(html, query_selector(&p.tree, root, "html").unwrap());
}

#[test]
fn test_is_and_where() {
    let p = page();
    let root = p.tree.root();
    let found = query_selector_all(&p.tree, root, ":is(main, form) > :where(.featured, [checked])").unwrap();
    assert_eq!(found, vec![p.cards[0], p.inputs[1]]);
}

#[test]
fn test_type_pseudo_classes() {
    let p = page();
    let root = p.tree.root();
    assert_eq!(query_selector(&p.tree, root, "article:last-of-type").unwrap(), Some(p.cards[2]));
    assert_eq!(
        query_selector_all(&p.tree, root, "article:nth-of-type(2n)").unwrap(),
        vec![p.cards[1]]
    );
    assert_eq!(query_selector_all(&p.tree, root, "h2:only-child").unwrap().len(), 3);
}

// ============================================================================
// MATCHES AND CLOSEST
// ============================================================================

#[test]
fn test_matches_and_closest() {
    let p = page();
    let heading = p.tree.first_element_child(p.cards[1]).unwrap();
    assert!(matches(&p.tree, p.cards[1], "article.card.hidden").unwrap());
    assert_eq!(closest(&p.tree, heading, ".card").unwrap(), Some(p.cards[1]));
    assert_eq!(closest(&p.tree, heading, "#content").unwrap(), Some(p.main));
}

#[test]
fn test_parsed_list_is_reusable() {
    let p = page();
    let list: SelectorList = "article, input".parse().unwrap();
    assert_eq!(list.query_all(&p.tree, p.main), p.cards);
    assert_eq!(list.query_all(&p.tree, p.form), p.inputs);
    assert_eq!(list.query_first(&p.tree, p.tree.root()), Some(p.cards[0]));
}
