//! Selector inputs
//!
//! The shape of an input is fixed when the value is built, through the
//! `From` conversions below.

use domkit_dom::{HtmlCollection, NodeId, NodeList};

/// Input to single resolution: a selector or an element handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorElement {
    Query(String),
    Element(NodeId),
}

/// Input to multi resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorCollection {
    Query(String),
    /// Live collection, snapshotted at resolution time
    Live(HtmlCollection),
    /// Static node list, copied out
    List(NodeList),
    /// Handles returned to the caller as-is
    Elements(Vec<NodeId>),
}

impl From<&str> for SelectorElement {
    fn from(selector: &str) -> Self {
        Self::Query(selector.to_string())
    }
}

impl From<String> for SelectorElement {
    fn from(selector: String) -> Self {
        Self::Query(selector)
    }
}

impl From<&String> for SelectorElement {
    fn from(selector: &String) -> Self {
        Self::Query(selector.clone())
    }
}

impl From<NodeId> for SelectorElement {
    fn from(id: NodeId) -> Self {
        Self::Element(id)
    }
}

impl From<&str> for SelectorCollection {
    fn from(selector: &str) -> Self {
        Self::Query(selector.to_string())
    }
}

impl From<String> for SelectorCollection {
    fn from(selector: String) -> Self {
        Self::Query(selector)
    }
}

impl From<&String> for SelectorCollection {
    fn from(selector: &String) -> Self {
        Self::Query(selector.clone())
    }
}

impl From<HtmlCollection> for SelectorCollection {
    fn from(collection: HtmlCollection) -> Self {
        Self::Live(collection)
    }
}

impl From<NodeList> for SelectorCollection {
    fn from(list: NodeList) -> Self {
        Self::List(list)
    }
}

impl From<Vec<NodeId>> for SelectorCollection {
    fn from(elements: Vec<NodeId>) -> Self {
        Self::Elements(elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(SelectorElement::from("#app"), SelectorElement::Query("#app".into()));
        assert_eq!(SelectorElement::from(NodeId::ROOT), SelectorElement::Element(NodeId::ROOT));
        assert!(matches!(SelectorCollection::from(vec![NodeId::ROOT]), SelectorCollection::Elements(v) if v.len() == 1));
        assert!(matches!(SelectorCollection::from(NodeList::new()), SelectorCollection::List(_)));
    }
}
