//! domkit
//!
//! Element helpers over an in-memory DOM: build elements from typed property
//! bags, clone template content, and resolve selector inputs into validated
//! element handles.
//!
//! # Example
//! ```rust,ignore
//! use domkit::{Props, create_element, ensure_element};
//!
//! let mut doc = domkit::html::parse(markup)?;
//! let list = ensure_element(&doc, "#todo-list", None)?;
//! let props = Props::new().with("textContent", "Buy milk").with_dataset([("id", 7)]);
//! let item = create_element(&mut doc, "li", Some(&props), None)?;
//! doc.tree_mut().append_child(list, item)?;
//! ```

mod config;
mod error;
mod factory;
mod resolve;
mod selector;
mod template;

pub mod props;

pub use config::{AmbiguityPolicy, ResolverConfig, DEFAULT_MIN_SELECTOR_LEN};
pub use error::{DomkitError, Result};
pub use factory::create_element;
pub use props::{property, set_property, PropKind, PropValue, Property, Props};
pub use resolve::Resolver;
pub use selector::{SelectorCollection, SelectorElement};

pub use domkit_dom::{Document, NodeId};

// Re-export sub-crates for advanced usage
pub use domkit_css as css;
pub use domkit_dom as dom;
pub use domkit_html as html;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resolve one element with the default [`Resolver`]
pub fn ensure_element(
    doc: &Document,
    input: impl Into<SelectorElement>,
    context: Option<NodeId>,
) -> Result<NodeId> {
    Resolver::default().ensure_element(doc, input, context)
}

/// Resolve a list of elements with the default [`Resolver`]
pub fn ensure_all_elements(
    doc: &Document,
    input: impl Into<SelectorCollection>,
    context: Option<NodeId>,
) -> Result<Vec<NodeId>> {
    Resolver::default().ensure_all_elements(doc, input, context)
}

/// Clone a template's first element with the default [`Resolver`]
pub fn clone_template(doc: &mut Document, query: impl Into<SelectorElement>) -> Result<NodeId> {
    Resolver::default().clone_template(doc, query)
}
