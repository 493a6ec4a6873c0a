//! DOM operation errors

use crate::NodeId;

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node ID does not exist in this tree
    #[error("node {0} not found")]
    NotFound(NodeId),

    /// Insertion would create an invalid tree (cycle, document child, leaf parent)
    #[error("hierarchy request error: cannot insert {child} into {parent}")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    /// Operation requires an element
    #[error("node {0} is not an element")]
    NotAnElement(NodeId),

    /// Node is not a child of the given parent
    #[error("node {child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },

    /// Name contains characters not allowed in the DOM
    #[error("invalid character in name {0:?}")]
    InvalidCharacter(String),

    /// Malformed input (e.g. a dataset key with "-" followed by a lowercase letter)
    #[error("syntax error: {0}")]
    SyntaxError(String),
}
