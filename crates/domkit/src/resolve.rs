//! Element resolution
//!
//! Turns selector inputs into validated element handles.

use domkit_css::query_selector_all;
use domkit_dom::{Document, NodeId};

use crate::config::{AmbiguityPolicy, ResolverConfig};
use crate::selector::{SelectorCollection, SelectorElement};
use crate::{DomkitError, Result};

/// Resolves [`SelectorElement`] and [`SelectorCollection`] inputs
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    fn query(&self, doc: &Document, selector: &str, context: Option<NodeId>) -> Result<Vec<NodeId>> {
        if !self.config.accepts_selector(selector) {
            return Err(DomkitError::UnknownInput);
        }
        let scope = context.unwrap_or_else(|| doc.root());
        Ok(query_selector_all(doc.tree(), scope, selector)?)
    }

    /// Resolve one element.
    ///
    /// A selector must match at least once. With several matches the last one
    /// in document order wins, after a warning (or an error under
    /// [`AmbiguityPolicy::Deny`]). An element handle is returned unchanged.
    pub fn ensure_element(
        &self,
        doc: &Document,
        input: impl Into<SelectorElement>,
        context: Option<NodeId>,
    ) -> Result<NodeId> {
        match input.into() {
            SelectorElement::Element(id) if doc.tree().is_element(id) => Ok(id),
            SelectorElement::Element(_) => Err(DomkitError::UnknownInput),
            SelectorElement::Query(selector) => {
                let found = self.query(doc, &selector, context)?;
                let count = found.len();
                let Some(&last) = found.last() else {
                    return Err(DomkitError::NoMatch { selector });
                };

                if count > 1 {
                    match self.config.ambiguity {
                        AmbiguityPolicy::Warn => tracing::warn!(
                            selector = %selector,
                            matches = count,
                            "selector matched more than one element, using the last"
                        ),
                        AmbiguityPolicy::Deny => {
                            return Err(DomkitError::AmbiguousSelector { selector, count });
                        }
                    }
                }
                Ok(last)
            }
        }
    }

    /// Resolve a list of elements, in document order for queries.
    ///
    /// Live collections and node lists are snapshotted. A `Vec` of handles is
    /// moved back to the caller untouched: the returned buffer is the one
    /// passed in, and its handles are not re-validated.
    pub fn ensure_all_elements(
        &self,
        doc: &Document,
        input: impl Into<SelectorCollection>,
        context: Option<NodeId>,
    ) -> Result<Vec<NodeId>> {
        match input.into() {
            SelectorCollection::Query(selector) => self.query(doc, &selector, context),
            SelectorCollection::Live(collection) => Ok(collection.items(doc.tree())),
            SelectorCollection::List(list) => Ok(list.as_slice().to_vec()),
            SelectorCollection::Elements(elements) => Ok(elements),
        }
    }
}
