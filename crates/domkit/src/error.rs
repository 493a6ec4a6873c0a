//! Error types

use domkit_css::SelectorError;
use domkit_dom::DomError;

pub type Result<T> = std::result::Result<T, DomkitError>;

/// Failures of the element helpers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomkitError {
    #[error("selector {selector} return nothing")]
    NoMatch { selector: String },

    #[error("selector {selector} matched {count} elements, expected one")]
    AmbiguousSelector { selector: String, count: usize },

    #[error("unknown selector element")]
    UnknownInput,

    #[error("element is not a template")]
    NotATemplate,

    #[error("template content has no element to clone")]
    EmptyTemplate,

    #[error("unknown tag name {0:?}")]
    UnknownTag(String),

    #[error("property {name:?} is not settable on <{tag}>")]
    UnknownProperty { name: String, tag: String },

    #[error("invalid value for property {name:?}")]
    InvalidPropertyValue { name: String },

    #[error(transparent)]
    Dom(#[from] DomError),

    #[error(transparent)]
    Selector(#[from] SelectorError),
}
