//! Selector matching against a [`DomTree`]
//!
//! Complex selectors are matched right to left: the last compound must match
//! the subject element, then each combinator walks to the parent, ancestors
//! or preceding siblings looking for the next compound.

use domkit_dom::{DomTree, NodeId, NodeType};

use crate::selectors::{PseudoClass, SelectorComponent};
use crate::{Combinator, ComplexSelector, CompoundSelector, SelectorList};

/// Elements that take part in form-control pseudo-classes
const FORM_CONTROLS: &[&str] = &[
    "button", "input", "select", "textarea", "option", "optgroup", "fieldset",
];

/// Matching context shared by one query
#[derive(Debug, Clone, Copy)]
pub(crate) struct MatchContext<'a> {
    pub tree: &'a DomTree,
    /// The node the query is scoped to (`:scope`)
    pub scope: NodeId,
}

impl MatchContext<'_> {
    fn parent_element(&self, id: NodeId) -> Option<NodeId> {
        self.tree.parent(id).filter(|&p| self.tree.is_element(p))
    }

    fn previous_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let mut prev = self.tree.get(id)?.prev_sibling;
        while prev.is_valid() {
            if self.tree.is_element(prev) {
                return Some(prev);
            }
            prev = self.tree.get(prev)?.prev_sibling;
        }
        None
    }

    /// Element siblings including `id` itself, in order
    fn element_siblings(&self, id: NodeId) -> Vec<NodeId> {
        match self.tree.parent(id) {
            Some(parent) => self.tree.element_children(parent).collect(),
            None => vec![id],
        }
    }

    /// (1-based index, count) among the given siblings
    fn position(siblings: &[NodeId], id: NodeId) -> (i32, i32) {
        let index = siblings.iter().position(|&s| s == id).map_or(0, |i| i + 1);
        (index as i32, siblings.len() as i32)
    }

    fn sibling_position(&self, id: NodeId) -> (i32, i32) {
        Self::position(&self.element_siblings(id), id)
    }

    fn type_position(&self, id: NodeId) -> (i32, i32) {
        let tag = self.tree.tag_name(id);
        let same_type: Vec<NodeId> = self
            .element_siblings(id)
            .into_iter()
            .filter(|&s| self.tree.tag_name(s) == tag)
            .collect();
        Self::position(&same_type, id)
    }

    fn is_root_element(&self, id: NodeId) -> bool {
        self.tree
            .parent(id)
            .is_some_and(|p| self.tree.node_type(p) == Some(NodeType::Document))
    }

    fn is_form_control(&self, id: NodeId) -> bool {
        self.tree
            .tag_name(id)
            .is_some_and(|tag| FORM_CONTROLS.contains(&tag))
    }

    pub fn matches_list(&self, list: &SelectorList, id: NodeId) -> bool {
        list.0.iter().any(|complex| self.matches_complex(complex, id))
    }

    fn matches_complex(&self, complex: &ComplexSelector, id: NodeId) -> bool {
        match complex.compounds.len() {
            0 => false,
            n => self.matches_from(complex, n - 1, id),
        }
    }

    fn matches_from(&self, complex: &ComplexSelector, index: usize, id: NodeId) -> bool {
        if !self.matches_compound(&complex.compounds[index], id) {
            return false;
        }
        if index == 0 {
            return true;
        }

        let next = index - 1;
        match complex.combinators[next] {
            Combinator::Child => self
                .parent_element(id)
                .is_some_and(|p| self.matches_from(complex, next, p)),
            Combinator::Descendant => self
                .tree
                .ancestors(id)
                .filter(|&a| self.tree.is_element(a))
                .any(|a| self.matches_from(complex, next, a)),
            Combinator::NextSibling => self
                .previous_element_sibling(id)
                .is_some_and(|s| self.matches_from(complex, next, s)),
            Combinator::SubsequentSibling => {
                let mut sibling = self.previous_element_sibling(id);
                while let Some(s) = sibling {
                    if self.matches_from(complex, next, s) {
                        return true;
                    }
                    sibling = self.previous_element_sibling(s);
                }
                false
            }
        }
    }

    fn matches_compound(&self, compound: &CompoundSelector, id: NodeId) -> bool {
        self.tree.is_element(id) && compound.0.iter().all(|c| self.matches_component(c, id))
    }

    fn matches_component(&self, component: &SelectorComponent, id: NodeId) -> bool {
        let tree = self.tree;
        match component {
            SelectorComponent::Universal => true,
            SelectorComponent::Type(tag) => tree
                .tag_name(id)
                .is_some_and(|t| t.eq_ignore_ascii_case(tag)),
            SelectorComponent::Id(expected) => tree.get_attribute(id, "id") == Some(expected.as_str()),
            SelectorComponent::Class(class) => tree.class_list(id).contains(class),
            SelectorComponent::Attribute(attr) => attr.matches(tree.get_attribute(id, &attr.name)),
            SelectorComponent::PseudoClass(pseudo) => self.matches_pseudo_class(pseudo, id),
        }
    }

    fn matches_pseudo_class(&self, pseudo: &PseudoClass, id: NodeId) -> bool {
        let tree = self.tree;
        let tag = tree.tag_name(id).unwrap_or("");
        match pseudo {
            PseudoClass::Enabled => self.is_form_control(id) && !tree.has_attribute(id, "disabled"),
            PseudoClass::Disabled => self.is_form_control(id) && tree.has_attribute(id, "disabled"),
            PseudoClass::Checked => match tag {
                "input" => tree.has_attribute(id, "checked"),
                "option" => tree.has_attribute(id, "selected"),
                _ => false,
            },
            PseudoClass::Required | PseudoClass::Optional => {
                let applicable = matches!(tag, "input" | "select" | "textarea");
                let required = tree.has_attribute(id, "required");
                applicable && (required == matches!(pseudo, PseudoClass::Required))
            }
            PseudoClass::Link => {
                matches!(tag, "a" | "area" | "link") && tree.has_attribute(id, "href")
            }

            PseudoClass::Root => self.is_root_element(id),
            PseudoClass::Empty => tree.children(id).all(|(_, child)| match child.as_text() {
                Some(text) => text.is_empty(),
                None => !child.is_element(),
            }),
            PseudoClass::FirstChild => self.sibling_position(id).0 == 1,
            PseudoClass::LastChild => {
                let (index, count) = self.sibling_position(id);
                index == count
            }
            PseudoClass::OnlyChild => self.sibling_position(id).1 == 1,
            PseudoClass::FirstOfType => self.type_position(id).0 == 1,
            PseudoClass::LastOfType => {
                let (index, count) = self.type_position(id);
                index == count
            }
            PseudoClass::OnlyOfType => self.type_position(id).1 == 1,
            PseudoClass::NthChild(expr) => expr.matches(self.sibling_position(id).0),
            PseudoClass::NthLastChild(expr) => {
                let (index, count) = self.sibling_position(id);
                expr.matches(count - index + 1)
            }
            PseudoClass::NthOfType(expr) => expr.matches(self.type_position(id).0),
            PseudoClass::NthLastOfType(expr) => {
                let (index, count) = self.type_position(id);
                expr.matches(count - index + 1)
            }

            PseudoClass::Not(list) => !self.matches_list(list, id),
            PseudoClass::Is(list) | PseudoClass::Where(list) => self.matches_list(list, id),

            PseudoClass::Scope => {
                if tree.node_type(self.scope) == Some(NodeType::Document) {
                    self.is_root_element(id)
                } else {
                    id == self.scope
                }
            }
        }
    }
}
