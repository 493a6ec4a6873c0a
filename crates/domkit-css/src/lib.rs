//! domkit CSS - Selector engine
//!
//! Parses selector lists and evaluates them against a `domkit-dom` tree,
//! giving `querySelectorAll`, `matches` and `closest` semantics.
//!
//! # Example
//! ```rust,ignore
//! use domkit_css::query_selector_all;
//!
//! let cards = query_selector_all(doc.tree(), doc.root(), "main > .card:not(.hidden)")?;
//! ```

mod matching;
mod parser;

pub mod selectors;

use domkit_dom::{DomTree, NodeId};

use matching::MatchContext;

pub use selectors::{
    AttributeMatcher, AttributeSelector, NthExpression, PseudoClass, SelectorComponent,
};

/// Selector combinators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Descendant (space)
    Descendant,
    /// Direct child (>)
    Child,
    /// Adjacent sibling (+)
    NextSibling,
    /// General sibling (~)
    SubsequentSibling,
}

/// Sequence of simple selectors with no combinator (`div.card[open]`)
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundSelector(pub Vec<SelectorComponent>);

/// Compounds joined by combinators; `combinators[i]` sits between
/// `compounds[i]` and `compounds[i + 1]`
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexSelector {
    pub compounds: Vec<CompoundSelector>,
    pub combinators: Vec<Combinator>,
}

/// Comma-separated selector list
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorList(pub Vec<ComplexSelector>);

impl SelectorList {
    /// Parse a selector list
    pub fn parse(selectors: &str) -> Result<Self, SelectorError> {
        parser::parse_selector_list(selectors)
    }

    /// Whether `element` matches, with `:scope` bound to `scope`
    pub fn matches_in_scope(&self, tree: &DomTree, element: NodeId, scope: NodeId) -> bool {
        MatchContext { tree, scope }.matches_list(self, element)
    }

    /// Whether `element` matches (`element.matches()`)
    pub fn matches(&self, tree: &DomTree, element: NodeId) -> bool {
        self.matches_in_scope(tree, element, element)
    }

    /// All matching descendants of `scope`, in document order
    pub fn query_all(&self, tree: &DomTree, scope: NodeId) -> Vec<NodeId> {
        let ctx = MatchContext { tree, scope };
        tree.descendants(scope)
            .filter(|&id| ctx.matches_list(self, id))
            .collect()
    }

    /// First matching descendant of `scope`
    pub fn query_first(&self, tree: &DomTree, scope: NodeId) -> Option<NodeId> {
        let ctx = MatchContext { tree, scope };
        tree.descendants(scope).find(|&id| ctx.matches_list(self, id))
    }
}

impl std::str::FromStr for SelectorList {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Selector parsing error (the DOM's `SyntaxError`)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("invalid selector {selector:?}: {reason}")]
    Invalid { selector: String, reason: String },
}

/// `scope.querySelectorAll(selectors)`
pub fn query_selector_all(
    tree: &DomTree,
    scope: NodeId,
    selectors: &str,
) -> Result<Vec<NodeId>, SelectorError> {
    let list = SelectorList::parse(selectors)?;
    let found = list.query_all(tree, scope);
    tracing::trace!(selectors, matches = found.len(), "query_selector_all");
    Ok(found)
}

/// `scope.querySelector(selectors)`
pub fn query_selector(
    tree: &DomTree,
    scope: NodeId,
    selectors: &str,
) -> Result<Option<NodeId>, SelectorError> {
    Ok(SelectorList::parse(selectors)?.query_first(tree, scope))
}

/// `element.matches(selectors)`
pub fn matches(tree: &DomTree, element: NodeId, selectors: &str) -> Result<bool, SelectorError> {
    Ok(SelectorList::parse(selectors)?.matches(tree, element))
}

/// `element.closest(selectors)`: the element itself or its nearest matching ancestor
pub fn closest(
    tree: &DomTree,
    element: NodeId,
    selectors: &str,
) -> Result<Option<NodeId>, SelectorError> {
    let list = SelectorList::parse(selectors)?;
    Ok(std::iter::once(element)
        .chain(tree.ancestors(element))
        .filter(|&id| tree.is_element(id))
        .find(|&id| list.matches_in_scope(tree, id, element)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_tree() -> (DomTree, NodeId, Vec<NodeId>) {
        let mut tree = DomTree::new();
        let ul = tree.create_element("ul");
        tree.append_child(tree.root(), ul).unwrap();
        let items = (0..4)
            .map(|i| {
                let li = tree.create_element("li");
                tree.set_attribute(li, "class", if i % 2 == 0 { "item even" } else { "item" }).unwrap();
                tree.append_child(ul, li).unwrap();
                li
            })
            .collect();
        (tree, ul, items)
    }

    #[test]
    fn test_query_all_document_order() {
        let (tree, _, items) = list_tree();
        assert_eq!(query_selector_all(&tree, tree.root(), "li").unwrap(), items);
        assert_eq!(
            query_selector_all(&tree, tree.root(), ".even").unwrap(),
            vec![items[0], items[2]]
        );
    }

    #[test]
    fn test_selector_list_does_not_duplicate() {
        let (tree, _, items) = list_tree();
        let found = query_selector_all(&tree, tree.root(), "li, .item, ul > li").unwrap();
        assert_eq!(found, items);
    }

    #[test]
    fn test_structural_pseudo_classes() {
        let (tree, _, items) = list_tree();
        let root = tree.root();
        assert_eq!(query_selector(&tree, root, "li:last-child").unwrap(), Some(items[3]));
        assert_eq!(
            query_selector_all(&tree, root, "li:nth-child(odd)").unwrap(),
            vec![items[0], items[2]]
        );
        assert_eq!(
            query_selector_all(&tree, root, "li:nth-last-child(-n+2)").unwrap(),
            vec![items[2], items[3]]
        );
        assert_eq!(query_selector_all(&tree, root, "ul:root").unwrap().len(), 1);
    }

    #[test]
    fn test_sibling_combinators() {
        let (tree, _, items) = list_tree();
        let root = tree.root();
        assert_eq!(
            query_selector_all(&tree, root, ".even + li").unwrap(),
            vec![items[1], items[3]]
        );
        assert_eq!(
            query_selector_all(&tree, root, "li:first-child ~ li").unwrap(),
            items[1..].to_vec()
        );
    }

    #[test]
    fn test_matches_and_closest() {
        let (tree, ul, items) = list_tree();
        assert!(matches(&tree, items[0], "ul > li.even").unwrap());
        assert!(!matches(&tree, items[1], ".even").unwrap());
        assert_eq!(closest(&tree, items[1], "ul").unwrap(), Some(ul));
        assert_eq!(closest(&tree, items[1], "li").unwrap(), Some(items[1]));
        assert_eq!(closest(&tree, items[1], "section").unwrap(), None);
    }

    #[test]
    fn test_invalid_selector_is_error() {
        let tree = DomTree::new();
        let err = query_selector_all(&tree, tree.root(), "li[").unwrap_err();
        assert!(err.to_string().contains("li["));
    }
}
