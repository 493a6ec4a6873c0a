//! Node cloning (cloneNode)

use crate::{DomResult, DomTree, Node, NodeData, NodeId};

impl DomTree {
    /// Clone a node. The copy is always detached.
    ///
    /// A shallow clone copies the node and its attributes. A deep clone also
    /// copies all descendants, and for `<template>` elements the content
    /// fragment as well. Deep copies walk an explicit stack, so nesting depth
    /// is bounded only by memory.
    pub fn clone_node(&mut self, id: NodeId, deep: bool) -> DomResult<NodeId> {
        let (copy, source_content) = self.copy_single(id)?;
        if !deep {
            tracing::trace!(source = %id, copy = %copy, deep, "cloned node");
            return Ok(copy);
        }

        // (source parent, copy parent) pairs whose children still need copying
        let mut pending = vec![(id, copy)];
        if let Some(pair) = source_content {
            pending.push(pair);
        }

        while let Some((from, to)) = pending.pop() {
            let children: Vec<NodeId> = self.children(from).map(|(child, _)| child).collect();
            for child in children {
                let (cloned, content) = self.copy_single(child)?;
                self.link(to, cloned, NodeId::NONE);
                pending.push((child, cloned));
                pending.extend(content);
            }
        }

        tracing::trace!(source = %id, copy = %copy, deep, "cloned node");
        Ok(copy)
    }

    /// Copy one node without children. For a template, also returns the
    /// (source, copy) pair of content fragments.
    fn copy_single(&mut self, id: NodeId) -> DomResult<(NodeId, Option<(NodeId, NodeId)>)> {
        let mut data = self.node(id)?.data.clone();
        let source_content = match &mut data {
            NodeData::Element(elem) => elem.template_content.take(),
            _ => None,
        };

        let copy = self.push(Node {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            host: NodeId::NONE,
            data,
        });

        let Some(source_content) = source_content else {
            return Ok((copy, None));
        };
        let content = self.push(Node::template_content(copy));
        if let Some(elem) = self.get_mut(copy).and_then(Node::as_element_mut) {
            elem.template_content = Some(content);
        }
        Ok((copy, Some((source_content, content))))
    }
}
