//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts it into a `domkit-dom` tree.

use domkit_dom::{Document, DomTree, NodeId};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use crate::HtmlError;

/// HTML5 parser
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Result<Document, HtmlError> {
        self.parse_with_url(html, "about:blank")
    }

    /// Parse HTML with a document URL
    pub fn parse_with_url(&self, html: &str, url: &str) -> Result<Document, HtmlError> {
        tracing::debug!(url, bytes = html.len(), "parsing HTML document");

        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let mut document = Document::empty(url);
        let root = document.root();
        self.convert_children(&dom.document, document.tree_mut(), root)?;
        document.finalize();

        tracing::debug!(nodes = document.tree().len(), "parsed HTML document");
        Ok(document)
    }

    /// Convert the RcDom subtree below `handle` into children of `parent`.
    ///
    /// Walks an explicit stack, so deeply nested markup cannot exhaust the
    /// call stack.
    fn convert_children(&self, handle: &Handle, tree: &mut DomTree, parent: NodeId) -> Result<(), HtmlError> {
        let mut pending: Vec<(Handle, NodeId)> = Vec::new();
        push_children(&mut pending, handle, parent);

        while let Some((handle, parent)) = pending.pop() {
            match &handle.data {
                RcNodeData::Document => push_children(&mut pending, &handle, parent),
                RcNodeData::Doctype { name, .. } => {
                    let id = tree.create_doctype(name);
                    tree.append_child(parent, id)?;
                }
                RcNodeData::Text { contents } => {
                    let text = contents.borrow();
                    if !text.trim().is_empty() {
                        let id = tree.create_text(&text);
                        tree.append_child(parent, id)?;
                    }
                }
                RcNodeData::Comment { contents } => {
                    let id = tree.create_comment(contents);
                    tree.append_child(parent, id)?;
                }
                RcNodeData::Element { name, attrs, template_contents, .. } => {
                    let id = tree.create_element(&name.local);
                    for attr in attrs.borrow().iter() {
                        // The tokenizer keeps names the DOM would reject
                        if let Err(err) = tree.set_attribute(id, &attr.name.local, &attr.value) {
                            tracing::debug!(%err, "dropping attribute");
                        }
                    }
                    tree.append_child(parent, id)?;

                    match (template_contents.borrow().as_ref(), tree.template_content(id)) {
                        (Some(contents), Some(fragment)) => push_children(&mut pending, contents, fragment),
                        _ => push_children(&mut pending, &handle, id),
                    }
                }
                RcNodeData::ProcessingInstruction { .. } => {}
            }
        }
        Ok(())
    }
}

/// Queue `handle`'s children so they pop in document order
fn push_children(pending: &mut Vec<(Handle, NodeId)>, handle: &Handle, parent: NodeId) {
    pending.extend(handle.children.borrow().iter().rev().map(|child| (child.clone(), parent)));
}
