//! Template cloning

use domkit_dom::{Document, NodeId};

use crate::resolve::Resolver;
use crate::selector::SelectorElement;
use crate::{DomkitError, Result};

impl Resolver {
    /// Deep-clone the first element of a `<template>`'s content.
    ///
    /// The template is resolved like [`Resolver::ensure_element`]. The clone
    /// is detached and shares nothing with the template.
    pub fn clone_template(&self, doc: &mut Document, query: impl Into<SelectorElement>) -> Result<NodeId> {
        let template = self.ensure_element(doc, query, None)?;

        let tree = doc.tree_mut();
        if !tree.is_template(template) {
            return Err(DomkitError::NotATemplate);
        }
        let first = tree
            .template_first_element(template)
            .ok_or(DomkitError::EmptyTemplate)?;
        let clone = tree.clone_node(first, true)?;

        tracing::trace!(%template, %clone, "cloned template content");
        Ok(clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_template(doc: &mut Document, markup_child: Option<&str>) -> NodeId {
        let body = doc.body();
        let tree = doc.tree_mut();
        let template = tree.create_element("template");
        tree.set_attribute(template, "id", "tpl").unwrap();
        tree.append_child(body, template).unwrap();
        if let Some(tag) = markup_child {
            let content = tree.template_content(template).unwrap();
            let text = tree.create_text("  ");
            tree.append_child(content, text).unwrap();
            let child = tree.create_element(tag);
            tree.append_child(content, child).unwrap();
        }
        template
    }

    #[test]
    fn test_clone_skips_leading_text() {
        let mut doc = Document::default();
        with_template(&mut doc, Some("div"));
        let clone = Resolver::default().clone_template(&mut doc, "#tpl").unwrap();
        assert_eq!(doc.tree().tag_name(clone), Some("div"));
        assert_eq!(doc.tree().parent(clone), None);
    }

    #[test]
    fn test_empty_template() {
        let mut doc = Document::default();
        let template = with_template(&mut doc, None);
        assert_eq!(
            Resolver::default().clone_template(&mut doc, template),
            Err(DomkitError::EmptyTemplate)
        );
    }

    #[test]
    fn test_not_a_template() {
        let mut doc = Document::default();
        let body = doc.body();
        assert_eq!(
            Resolver::default().clone_template(&mut doc, body),
            Err(DomkitError::NotATemplate)
        );
    }
}
