//! domkit DOM - Document Object Model
//!
//! Arena-backed DOM tree. Nodes are addressed by [`NodeId`] and never freed,
//! so detached subtrees stay valid handles until the tree is dropped.

mod clone;
mod document;
mod error;
mod interner;
mod node;
mod tree;

pub mod classlist;
pub mod collection;
pub mod dataset;
pub mod tags;
pub mod template;

pub use classlist::DOMTokenList;
pub use collection::{CollectionFilter, HtmlCollection, NodeList};
pub use dataset::DOMStringMap;
pub use document::Document;
pub use error::{DomError, DomResult};
pub use interner::{InternedString, StringInterner};
pub use node::{Attribute, ElementData, Node, NodeData, NodeType};
pub use tags::{is_known_tag, is_valid_custom_element_name, is_valid_tag_name};
pub use tree::{Ancestors, Children, Descendants, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Marker for a missing link
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check that this is not [`NodeId::NONE`]
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Raw arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "#{}", self.0)
        } else {
            f.write_str("#none")
        }
    }
}
