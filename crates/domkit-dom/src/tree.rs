//! DOM Tree (arena-based allocation)
//!
//! All nodes of a document live in one `Vec`. Structure is kept in the
//! parent/child/sibling links of each [`Node`]; the arena itself is append-only.

use crate::{
    DomError, DomResult, ElementData, InternedString, Node, NodeData, NodeId, NodeType,
    StringInterner,
};

/// Arena-based DOM tree
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
    interner: StringInterner,
}

impl DomTree {
    /// Create a new tree holding only a document node at [`NodeId::ROOT`]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
            interner: StringInterner::new(),
        }
    }

    /// The document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    pub(crate) fn node(&self, id: NodeId) -> DomResult<&Node> {
        self.get(id).ok_or(DomError::NotFound(id))
    }

    fn node_mut(&mut self, id: NodeId) -> DomResult<&mut Node> {
        self.get_mut(id).ok_or(DomError::NotFound(id))
    }

    /// Number of nodes in the arena (attached or not)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the document node is created with the tree
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Name interner
    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Mutable name interner
    pub fn interner_mut(&mut self) -> &mut StringInterner {
        &mut self.interner
    }

    /// Resolve an interned name
    #[inline]
    pub fn resolve(&self, name: InternedString) -> &str {
        self.interner.get(name)
    }

    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    // ------------------------------------------------------------------
    // Node creation
    // ------------------------------------------------------------------

    /// Create a detached element. Tag names are ASCII-lowercased.
    ///
    /// A `template` element gets its own inert content fragment.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let name = self.interner.intern(&tag.to_ascii_lowercase());
        let id = self.push(Node::element(name));
        if self.resolve(name) == "template" {
            let content = self.push(Node::template_content(id));
            if let Some(elem) = self.nodes[id.index()].as_element_mut() {
                elem.template_content = Some(content);
            }
        }
        id
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content.to_string()))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.push(Node::comment(content.to_string()))
    }

    /// Create an empty document fragment
    pub fn create_fragment(&mut self) -> NodeId {
        self.push(Node::fragment())
    }

    /// Create a detached doctype node
    pub fn create_doctype(&mut self, name: &str) -> NodeId {
        let name = self.interner.intern(name);
        self.push(Node::doctype(name))
    }

    // ------------------------------------------------------------------
    // Node inspection
    // ------------------------------------------------------------------

    /// Node type, if the node exists
    pub fn node_type(&self, id: NodeId) -> Option<NodeType> {
        self.get(id).map(Node::node_type)
    }

    /// Check whether `id` is an element of this tree
    pub fn is_element(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(Node::is_element)
    }

    /// Element data
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id)?.as_element()
    }

    /// Lowercased tag name of an element
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|e| self.resolve(e.name))
    }

    /// Parent node
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    /// Children of a node in order
    pub fn children(&self, id: NodeId) -> Children<'_> {
        let next = self.get(id).map(|n| n.first_child).unwrap_or(NodeId::NONE);
        Children { tree: self, next }
    }

    /// Element children of a node in order
    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .filter(|(_, node)| node.is_element())
            .map(|(child, _)| child)
    }

    /// First element child
    pub fn first_element_child(&self, id: NodeId) -> Option<NodeId> {
        self.element_children(id).next()
    }

    /// All descendants in document (preorder) order, excluding `id` itself.
    ///
    /// Template content is not part of the tree and is never visited.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let next = self.get(id).map(|n| n.first_child).unwrap_or(NodeId::NONE);
        Descendants { tree: self, root: id, next }
    }

    /// Ancestors from parent up to the topmost node
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors { tree: self, next: self.parent(id).unwrap_or(NodeId::NONE) }
    }

    /// Inclusive containment check
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        ancestor == node || self.ancestors(node).any(|a| a == ancestor)
    }

    /// Like [`contains`](Self::contains), but a template content fragment
    /// counts as a descendant of its `<template>`
    pub fn host_including_contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = node;
        while let Some(n) = self.get(current) {
            if current == ancestor {
                return true;
            }
            current = if n.parent.is_valid() { n.parent } else { n.host };
        }
        false
    }

    /// Whether the node is attached to the document
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.get(id).is_some() && self.contains(self.root(), id)
    }

    fn following(&self, current: NodeId, root: NodeId) -> NodeId {
        let Some(node) = self.get(current) else {
            return NodeId::NONE;
        };
        if node.first_child.is_valid() {
            return node.first_child;
        }

        let mut n = current;
        while n != root {
            let Some(node) = self.get(n) else {
                return NodeId::NONE;
            };
            if node.next_sibling.is_valid() {
                return node.next_sibling;
            }
            n = node.parent;
            if !n.is_valid() {
                break;
            }
        }
        NodeId::NONE
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Append `child` as the last child of `parent`.
    ///
    /// A child attached elsewhere is moved. Appending a fragment moves the
    /// fragment's children instead of the fragment itself.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        self.insert_before(parent, child, None)
    }

    /// Insert `child` before `reference` (or at the end when `None`)
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> DomResult<()> {
        let mut reference = reference.unwrap_or(NodeId::NONE);
        if reference.is_valid() && self.node(reference)?.parent != parent {
            return Err(DomError::NotAChild { parent, child: reference });
        }

        self.ensure_pre_insert_validity(parent, child)?;

        if reference == child {
            reference = self.node(child)?.next_sibling;
        }

        if matches!(self.node(child)?.data, NodeData::DocumentFragment) {
            let moved: Vec<NodeId> = self.children(child).map(|(id, _)| id).collect();
            for node in moved {
                self.detach(node);
                self.link(parent, node, reference);
            }
            return Ok(());
        }

        self.detach(child);
        self.link(parent, child, reference);
        Ok(())
    }

    fn ensure_pre_insert_validity(&self, parent: NodeId, child: NodeId) -> DomResult<()> {
        let parent_node = self.node(parent)?;
        let child_node = self.node(child)?;
        let hierarchy = DomError::HierarchyRequest { parent, child };

        if !parent_node.can_have_children() {
            return Err(hierarchy);
        }
        // A childless non-template node can only be an ancestor of itself
        let may_enclose = child_node.first_child.is_valid()
            || child_node.as_element().is_some_and(|e| e.template_content.is_some());
        if child == parent || (may_enclose && self.host_including_contains(child, parent)) {
            return Err(hierarchy);
        }

        let parent_is_document = matches!(parent_node.data, NodeData::Document);
        match child_node.data {
            NodeData::Document => Err(hierarchy),
            NodeData::Doctype { .. } if !parent_is_document => Err(hierarchy),
            NodeData::Text(_) if parent_is_document => Err(hierarchy),
            _ => Ok(()),
        }
    }

    /// Remove `child` from `parent`
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        if self.node(child)?.parent != parent {
            return Err(DomError::NotAChild { parent, child });
        }
        self.detach(child);
        Ok(())
    }

    /// Detach a node from its parent (no-op if already detached)
    pub fn detach(&mut self, id: NodeId) {
        let Some(node) = self.get(id) else {
            return;
        };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);
        if !parent.is_valid() {
            return;
        }

        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }

        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    /// Link a detached node under `parent` before `reference` (NONE = append)
    pub(crate) fn link(&mut self, parent: NodeId, child: NodeId, reference: NodeId) {
        let prev = if reference.is_valid() {
            self.nodes[reference.index()].prev_sibling
        } else {
            self.nodes[parent.index()].last_child
        };

        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = reference;
        }

        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        if reference.is_valid() {
            self.nodes[reference.index()].prev_sibling = child;
        } else {
            self.nodes[parent.index()].last_child = child;
        }
    }

    // ------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------

    fn validate_attribute_name(name: &str) -> DomResult<()> {
        let invalid = name.is_empty()
            || name.chars().any(|c| {
                c.is_whitespace()
                    || c.is_control()
                    || matches!(c, '"' | '\'' | '>' | '/' | '=')
            });
        if invalid {
            Err(DomError::InvalidCharacter(name.to_string()))
        } else {
            Ok(())
        }
    }

    /// Get an attribute value (names are matched ASCII case-insensitively)
    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        let name = self.interner.lookup(&name.to_ascii_lowercase())?;
        self.element(id)?.get_attr(name)
    }

    /// Check attribute presence
    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.get_attribute(id, name).is_some()
    }

    /// Set an attribute
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        Self::validate_attribute_name(name)?;
        if !self.node(id)?.is_element() {
            return Err(DomError::NotAnElement(id));
        }
        let name = self.interner.intern(&name.to_ascii_lowercase());
        if let Some(elem) = self.nodes[id.index()].as_element_mut() {
            elem.set_attr(name, value.to_string());
        }
        Ok(())
    }

    /// Remove an attribute, returning its previous value
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> DomResult<Option<String>> {
        if !self.node(id)?.is_element() {
            return Err(DomError::NotAnElement(id));
        }
        let Some(name) = self.interner.lookup(&name.to_ascii_lowercase()) else {
            return Ok(None);
        };
        Ok(self.nodes[id.index()]
            .as_element_mut()
            .and_then(|elem| elem.remove_attr(name)))
    }

    /// All attributes of an element as `(name, value)` pairs
    pub fn attributes(&self, id: NodeId) -> Vec<(&str, &str)> {
        self.element(id)
            .map(|elem| {
                elem.attrs
                    .iter()
                    .map(|a| (self.resolve(a.name), a.value.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------

    /// Concatenated text of the node, or of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        match self.get(id).map(|n| &n.data) {
            Some(NodeData::Text(t)) | Some(NodeData::Comment(t)) => t.clone(),
            Some(_) => self
                .descendants(id)
                .filter_map(|d| self.get(d).and_then(Node::as_text))
                .collect(),
            None => String::new(),
        }
    }

    /// Replace the node's children with a single text node (none if empty)
    pub fn set_text_content(&mut self, id: NodeId, text: &str) -> DomResult<()> {
        match &mut self.node_mut(id)?.data {
            NodeData::Text(t) | NodeData::Comment(t) => {
                *t = text.to_string();
                return Ok(());
            }
            NodeData::Doctype { .. } | NodeData::Document => return Ok(()),
            NodeData::Element(_) | NodeData::DocumentFragment => {}
        }

        let old: Vec<NodeId> = self.children(id).map(|(c, _)| c).collect();
        for child in old {
            self.detach(child);
        }
        if !text.is_empty() {
            let text_node = self.create_text(text);
            self.link(id, text_node, NodeId::NONE);
        }
        Ok(())
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a node's children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

/// Preorder iterator over a subtree, excluding its root
pub struct Descendants<'a> {
    tree: &'a DomTree,
    root: NodeId,
    next: NodeId,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next;
        if !current.is_valid() {
            return None;
        }
        self.next = self.tree.following(current, self.root);
        Some(current)
    }
}

/// Iterator from a node's parent up to the topmost ancestor
pub struct Ancestors<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next;
        if !current.is_valid() {
            return None;
        }
        self.next = self.tree.parent(current).unwrap_or(NodeId::NONE);
        Some(current)
    }
}
