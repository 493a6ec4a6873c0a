//! DOMStringMap (dataset)
//!
//! Maps camelCase dataset keys onto `data-*` attributes.

use crate::{DomError, DomResult, DomTree, NodeId};

/// Snapshot of an element's `data-*` attributes, keyed by camelCase name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DOMStringMap {
    entries: Vec<(String, String)>,
}

impl DOMStringMap {
    /// Create empty string map
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(attribute name, value)` pairs, ignoring non `data-*` names
    pub fn from_attributes<'a>(attrs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let entries = attrs
            .into_iter()
            .filter_map(|(name, value)| {
                name.strip_prefix("data-")
                    .map(|key| (to_camel_case(key), value.to_string()))
            })
            .collect();
        Self { entries }
    }

    /// Get value by camelCase key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Check if key exists
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in attribute order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Convert a camelCase key to its attribute name.
    ///
    /// Fails for keys containing `-` followed by a lowercase ASCII letter,
    /// which could not round-trip through the attribute name.
    pub fn to_attribute_name(key: &str) -> DomResult<String> {
        let mut chars = key.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '-' && chars.peek().is_some_and(|n| n.is_ascii_lowercase()) {
                return Err(DomError::SyntaxError(format!(
                    "dataset key {key:?} contains '-' followed by a lowercase letter"
                )));
            }
        }
        Ok(format!("data-{}", to_kebab_case(key)))
    }
}

/// Convert kebab-case to camelCase
fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(next) if c == '-' && next.is_ascii_lowercase() => {
                result.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => result.push(c),
        }
    }

    result
}

/// Convert camelCase to kebab-case
fn to_kebab_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);

    for c in s.chars() {
        if c.is_ascii_uppercase() {
            result.push('-');
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}

impl DomTree {
    /// Snapshot of the element's dataset
    pub fn dataset(&self, id: NodeId) -> DOMStringMap {
        DOMStringMap::from_attributes(self.attributes(id))
    }

    /// Write one dataset entry (`el.dataset[key] = value`)
    pub fn set_data(&mut self, id: NodeId, key: &str, value: &str) -> DomResult<()> {
        let name = DOMStringMap::to_attribute_name(key)?;
        self.set_attribute(id, &name, value)
    }

    /// Delete one dataset entry
    pub fn remove_data(&mut self, id: NodeId, key: &str) -> DomResult<bool> {
        let name = DOMStringMap::to_attribute_name(key)?;
        Ok(self.remove_attribute(id, &name)?.is_some())
    }
}
