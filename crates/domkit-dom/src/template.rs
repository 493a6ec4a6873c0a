//! HTML Template Element
//!
//! A `<template>` holds its markup in an inert DocumentFragment that is not
//! part of the document tree: it is never visited by traversal or selector
//! queries, and is only reachable through [`DomTree::template_content`].

use crate::{DomTree, NodeId};

impl DomTree {
    /// Whether `id` is a `<template>` element
    pub fn is_template(&self, id: NodeId) -> bool {
        self.element(id).is_some_and(|e| e.template_content.is_some())
    }

    /// The inert content fragment of a `<template>` element
    pub fn template_content(&self, id: NodeId) -> Option<NodeId> {
        self.element(id)?.template_content
    }

    /// First element child of a template's content, if any
    pub fn template_first_element(&self, id: NodeId) -> Option<NodeId> {
        self.template_content(id)
            .and_then(|content| self.first_element_child(content))
    }
}
