//! Element factory

use domkit_dom::{Document, NodeId, is_valid_tag_name};

use crate::props::Props;
use crate::{DomkitError, Result};

/// Create one detached element, apply `props` and append `children`.
///
/// Children already attached elsewhere are moved, as with `appendChild`.
pub fn create_element<I>(
    doc: &mut Document,
    tag: &str,
    props: Option<&Props>,
    children: I,
) -> Result<NodeId>
where
    I: IntoIterator<Item = NodeId>,
{
    let tag = tag.to_ascii_lowercase();
    if !is_valid_tag_name(&tag) {
        return Err(DomkitError::UnknownTag(tag));
    }

    let tree = doc.tree_mut();
    let element = tree.create_element(&tag);
    if let Some(props) = props {
        props.apply(tree, element)?;
    }
    for child in children {
        tree.append_child(element, child)?;
    }

    tracing::trace!(tag = %tag, %element, "created element");
    Ok(element)
}
