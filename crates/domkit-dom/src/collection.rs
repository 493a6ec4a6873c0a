//! Node collections
//!
//! [`NodeList`] is a static list (querySelectorAll results). [`HtmlCollection`]
//! is live: it stores only its root and filter and re-reads the tree every
//! time it is accessed.

use crate::{DomTree, NodeId};

/// Static node list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeList {
    nodes: Vec<NodeId>,
}

impl NodeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vec(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }

    pub fn length(&self) -> usize {
        self.nodes.len()
    }

    pub fn item(&self, index: usize) -> Option<NodeId> {
        self.nodes.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.nodes
    }
}

impl From<Vec<NodeId>> for NodeList {
    fn from(nodes: Vec<NodeId>) -> Self {
        Self::from_vec(nodes)
    }
}

/// What a live collection selects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionFilter {
    /// Descendant elements with this tag name (`*` for all)
    TagName(String),
    /// Descendant elements carrying every one of these classes
    ClassNames(Vec<String>),
    /// Element children of the root
    Children,
}

/// Live collection of elements (getElementsByTagName, getElementsByClassName, children)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlCollection {
    root: NodeId,
    filter: CollectionFilter,
}

impl HtmlCollection {
    pub fn new(root: NodeId, filter: CollectionFilter) -> Self {
        Self { root, filter }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn filter(&self) -> &CollectionFilter {
        &self.filter
    }

    fn accepts(&self, tree: &DomTree, id: NodeId) -> bool {
        let Some(tag) = tree.tag_name(id) else {
            return false;
        };
        match &self.filter {
            CollectionFilter::TagName(name) => name == "*" || tag.eq_ignore_ascii_case(name),
            CollectionFilter::ClassNames(classes) => {
                let list = tree.class_list(id);
                !classes.is_empty() && classes.iter().all(|c| list.contains(c))
            }
            CollectionFilter::Children => true,
        }
    }

    /// Current members, in document order
    pub fn items(&self, tree: &DomTree) -> Vec<NodeId> {
        match self.filter {
            CollectionFilter::Children => tree.element_children(self.root).collect(),
            _ => tree
                .descendants(self.root)
                .filter(|&id| self.accepts(tree, id))
                .collect(),
        }
    }

    /// Current number of members
    pub fn length(&self, tree: &DomTree) -> usize {
        self.items(tree).len()
    }

    /// Member at `index` right now
    pub fn item(&self, tree: &DomTree, index: usize) -> Option<NodeId> {
        self.items(tree).get(index).copied()
    }
}

impl DomTree {
    /// Live collection of descendant elements with a tag name
    pub fn get_elements_by_tag_name(&self, root: NodeId, tag: &str) -> HtmlCollection {
        HtmlCollection::new(root, CollectionFilter::TagName(tag.to_string()))
    }

    /// Live collection of descendant elements carrying all given classes
    pub fn get_elements_by_class_name(&self, root: NodeId, classes: &str) -> HtmlCollection {
        let classes = classes.split_whitespace().map(str::to_string).collect();
        HtmlCollection::new(root, CollectionFilter::ClassNames(classes))
    }

    /// Live collection of element children
    pub fn children_collection(&self, id: NodeId) -> HtmlCollection {
        HtmlCollection::new(id, CollectionFilter::Children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_list() {
        let list = NodeList::from_vec(vec![NodeId(1), NodeId(2), NodeId(3)]);

        assert_eq!(list.length(), 3);
        assert_eq!(list.item(0), Some(NodeId(1)));
        assert_eq!(list.item(3), None);
    }

    #[test]
    fn test_live_collection_tracks_mutations() {
        let mut tree = DomTree::new();
        let ul = tree.create_element("ul");
        tree.append_child(tree.root(), ul).unwrap();
        let items = tree.get_elements_by_tag_name(tree.root(), "li");

        assert_eq!(items.length(&tree), 0);

        let li = tree.create_element("li");
        tree.append_child(ul, li).unwrap();
        assert_eq!(items.items(&tree), vec![li]);

        tree.detach(li);
        assert_eq!(items.length(&tree), 0);
    }

    #[test]
    fn test_class_collection_requires_all_classes() {
        let mut tree = DomTree::new();
        let a = tree.create_element("div");
        let b = tree.create_element("div");
        tree.set_attribute(a, "class", "card open").unwrap();
        tree.set_attribute(b, "class", "card").unwrap();
        tree.append_child(tree.root(), a).unwrap();
        tree.append_child(tree.root(), b).unwrap();

        let open = tree.get_elements_by_class_name(tree.root(), "open card");
        assert_eq!(open.items(&tree), vec![a]);

        let none = tree.get_elements_by_class_name(tree.root(), "   ");
        assert_eq!(none.length(&tree), 0);
    }

    #[test]
    fn test_children_collection_skips_text() {
        let mut tree = DomTree::new();
        let p = tree.create_element("p");
        let text = tree.create_text("x");
        let b = tree.create_element("b");
        tree.append_child(p, text).unwrap();
        tree.append_child(p, b).unwrap();

        assert_eq!(tree.children_collection(p).items(&tree), vec![b]);
    }
}
