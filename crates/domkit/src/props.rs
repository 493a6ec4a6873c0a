//! Property bags
//!
//! Properties are set through the [`Property`] allow-list rather than by
//! arbitrary name. Each property has a value kind and the set of elements it
//! applies to; custom elements accept the global ones.

use std::fmt;

use domkit_dom::{DomTree, NodeId, is_valid_custom_element_name};

use crate::{DomkitError, Result};

/// A property value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropValue {
    Text(String),
    Bool(bool),
    /// Plain object with stringified values, in insertion order
    Map(Vec<(String, String)>),
}

impl PropValue {
    /// Build a map value; each value takes its string form
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<PropValue>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into().to_string()))
                .collect(),
        )
    }

    /// Truthiness: non-empty strings and `true`. Maps are always truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::Map(_) => true,
        }
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Map(_) => f.write_str("[object Object]"),
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

macro_rules! int_prop_value {
    ($($t:ty),*) => {
        $(impl From<$t> for PropValue {
            fn from(n: $t) -> Self {
                Self::Text(n.to_string())
            }
        })*
    };
}

int_prop_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! float_prop_value {
    ($($t:ty),*) => {
        $(impl From<$t> for PropValue {
            fn from(n: $t) -> Self {
                let text = match n {
                    n if n == <$t>::INFINITY => "Infinity".to_string(),
                    n if n == <$t>::NEG_INFINITY => "-Infinity".to_string(),
                    n => n.to_string(),
                };
                Self::Text(text)
            }
        })*
    };
}

float_prop_value!(f32, f64);

/// Ordered property bag; `None` entries are skipped when applied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Props {
    entries: Vec<(String, Option<PropValue>)>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.entries.push((name.into(), Some(value.into())));
        self
    }

    /// Add an entry that may be absent
    pub fn with_opt<V: Into<PropValue>>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        self.entries.push((name.into(), value.map(Into::into)));
        self
    }

    /// Add a `dataset` entry
    pub fn with_dataset<K, V>(self, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<PropValue>,
    {
        self.with("dataset", PropValue::map(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&PropValue>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Apply every present entry to `element`, in insertion order
    pub(crate) fn apply(&self, tree: &mut DomTree, element: NodeId) -> Result<()> {
        for (name, value) in self.iter() {
            if let Some(value) = value {
                set_property(tree, element, name, value)?;
            }
        }
        Ok(())
    }
}

impl<K: Into<String>> FromIterator<(K, Option<PropValue>)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, Option<PropValue>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// How a property stores its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropKind {
    Text,
    Bool,
    Dataset,
}

const LINKS: &[&str] = &["a", "area", "link"];
const MEDIA_SRC: &[&str] = &[
    "img", "script", "iframe", "audio", "video", "source", "track", "embed", "input",
];
const SIZED: &[&str] = &["img", "canvas", "video", "iframe", "embed", "input"];
const NAMED: &[&str] = &[
    "button", "fieldset", "form", "input", "object", "output", "select", "textarea",
    "iframe", "map", "meta", "param", "slot",
];
const VALUED: &[&str] = &[
    "input", "button", "option", "textarea", "select", "data", "li", "meter", "progress", "param",
];
const TYPED: &[&str] = &[
    "input", "button", "script", "link", "source", "style", "ol", "embed", "object",
];
const DISABLEABLE: &[&str] = &[
    "button", "input", "select", "textarea", "option", "optgroup", "fieldset",
];

/// Settable element properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    TextContent,
    Id,
    ClassName,
    Title,
    Lang,
    Dir,
    Hidden,
    TabIndex,
    Role,
    Dataset,
    Href,
    Target,
    Rel,
    Download,
    Src,
    Alt,
    Width,
    Height,
    Name,
    Value,
    Type,
    Placeholder,
    HtmlFor,
    Disabled,
    Checked,
    Required,
    ReadOnly,
    Autofocus,
    Multiple,
    Selected,
    Open,
}

impl Property {
    pub const ALL: &'static [Property] = &[
        Self::TextContent, Self::Id, Self::ClassName, Self::Title, Self::Lang, Self::Dir,
        Self::Hidden, Self::TabIndex, Self::Role, Self::Dataset, Self::Href, Self::Target,
        Self::Rel, Self::Download, Self::Src, Self::Alt, Self::Width, Self::Height, Self::Name,
        Self::Value, Self::Type, Self::Placeholder, Self::HtmlFor, Self::Disabled, Self::Checked,
        Self::Required, Self::ReadOnly, Self::Autofocus, Self::Multiple, Self::Selected, Self::Open,
    ];

    /// Property name as written in a bag (`textContent`, `htmlFor`)
    pub fn name(self) -> &'static str {
        match self {
            Self::TextContent => "textContent",
            Self::Id => "id",
            Self::ClassName => "className",
            Self::Title => "title",
            Self::Lang => "lang",
            Self::Dir => "dir",
            Self::Hidden => "hidden",
            Self::TabIndex => "tabIndex",
            Self::Role => "role",
            Self::Dataset => "dataset",
            Self::Href => "href",
            Self::Target => "target",
            Self::Rel => "rel",
            Self::Download => "download",
            Self::Src => "src",
            Self::Alt => "alt",
            Self::Width => "width",
            Self::Height => "height",
            Self::Name => "name",
            Self::Value => "value",
            Self::Type => "type",
            Self::Placeholder => "placeholder",
            Self::HtmlFor => "htmlFor",
            Self::Disabled => "disabled",
            Self::Checked => "checked",
            Self::Required => "required",
            Self::ReadOnly => "readOnly",
            Self::Autofocus => "autofocus",
            Self::Multiple => "multiple",
            Self::Selected => "selected",
            Self::Open => "open",
        }
    }

    /// Look up a property by its bag name (case-sensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.name() == name)
    }

    pub fn kind(self) -> PropKind {
        match self {
            Self::Dataset => PropKind::Dataset,
            Self::Hidden
            | Self::Disabled
            | Self::Checked
            | Self::Required
            | Self::ReadOnly
            | Self::Autofocus
            | Self::Multiple
            | Self::Selected
            | Self::Open => PropKind::Bool,
            _ => PropKind::Text,
        }
    }

    /// Reflected attribute; `None` for text content and dataset
    pub fn attribute(self) -> Option<&'static str> {
        match self {
            Self::TextContent | Self::Dataset => None,
            Self::ClassName => Some("class"),
            Self::TabIndex => Some("tabindex"),
            Self::HtmlFor => Some("for"),
            Self::ReadOnly => Some("readonly"),
            other => Some(other.name()),
        }
    }

    /// Elements the property exists on; `None` means every element
    fn elements(self) -> Option<&'static [&'static str]> {
        match self {
            Self::TextContent
            | Self::Id
            | Self::ClassName
            | Self::Title
            | Self::Lang
            | Self::Dir
            | Self::Hidden
            | Self::TabIndex
            | Self::Role
            | Self::Dataset => None,
            Self::Href | Self::Target | Self::Rel => Some(LINKS),
            Self::Download => Some(&["a", "area"]),
            Self::Src => Some(MEDIA_SRC),
            Self::Alt => Some(&["img", "area", "input"]),
            Self::Width | Self::Height => Some(SIZED),
            Self::Name => Some(NAMED),
            Self::Value => Some(VALUED),
            Self::Type => Some(TYPED),
            Self::Placeholder => Some(&["input", "textarea"]),
            Self::HtmlFor => Some(&["label", "output"]),
            Self::Disabled => Some(DISABLEABLE),
            Self::Checked => Some(&["input"]),
            Self::Required => Some(&["input", "select", "textarea"]),
            Self::ReadOnly => Some(&["input", "textarea"]),
            Self::Autofocus => Some(&["input", "select", "textarea", "button"]),
            Self::Multiple => Some(&["input", "select"]),
            Self::Selected => Some(&["option"]),
            Self::Open => Some(&["details", "dialog"]),
        }
    }

    pub fn is_global(self) -> bool {
        self.elements().is_none()
    }

    /// Whether the property can be set on an element with this tag
    pub fn applies_to(self, tag: &str) -> bool {
        match self.elements() {
            None => true,
            Some(_) if is_valid_custom_element_name(tag) => false,
            Some(tags) => tags.iter().any(|t| t.eq_ignore_ascii_case(tag)),
        }
    }

    /// `<textarea>`'s value lives in its text
    fn writes_text(self, tag: &str) -> bool {
        self == Self::TextContent || (self == Self::Value && tag == "textarea")
    }

    fn write(self, tree: &mut DomTree, element: NodeId, tag: &str, value: &PropValue) -> Result<()> {
        let invalid = || DomkitError::InvalidPropertyValue { name: self.name().to_string() };

        match (self.kind(), value) {
            (PropKind::Dataset, PropValue::Map(entries)) => {
                for (key, value) in entries {
                    tree.set_data(element, key, value)?;
                }
            }
            (PropKind::Dataset, _) | (_, PropValue::Map(_)) => return Err(invalid()),
            (PropKind::Bool, value) => {
                let attr = self.attribute().ok_or_else(invalid)?;
                if value.is_truthy() {
                    tree.set_attribute(element, attr, "")?;
                } else {
                    tree.remove_attribute(element, attr)?;
                }
            }
            (PropKind::Text, value) if self.writes_text(tag) => {
                tree.set_text_content(element, &value.to_string())?;
            }
            (PropKind::Text, value) => {
                let attr = self.attribute().ok_or_else(invalid)?;
                tree.set_attribute(element, attr, &value.to_string())?;
            }
        }
        Ok(())
    }

    fn read(self, tree: &DomTree, element: NodeId, tag: &str) -> Option<PropValue> {
        match self.kind() {
            PropKind::Dataset => Some(PropValue::Map(
                tree.dataset(element)
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            )),
            PropKind::Bool => Some(PropValue::Bool(tree.has_attribute(element, self.attribute()?))),
            PropKind::Text if self.writes_text(tag) => Some(PropValue::Text(tree.text_content(element))),
            PropKind::Text => tree
                .get_attribute(element, self.attribute()?)
                .map(|v| PropValue::Text(v.to_string())),
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set one property by bag name
pub fn set_property(tree: &mut DomTree, element: NodeId, name: &str, value: &PropValue) -> Result<()> {
    let tag = tree
        .tag_name(element)
        .ok_or(DomkitError::Dom(domkit_dom::DomError::NotAnElement(element)))?
        .to_string();

    let property = Property::from_name(name)
        .filter(|p| p.applies_to(&tag))
        .ok_or_else(|| DomkitError::UnknownProperty {
            name: name.to_string(),
            tag: tag.clone(),
        })?;

    tracing::trace!(%property, %element, "set property");
    property.write(tree, element, &tag, value)
}

/// Read a property back. `None` for non-elements and unset attributes.
pub fn property(tree: &DomTree, element: NodeId, property: Property) -> Option<PropValue> {
    let tag = tree.tag_name(element)?;
    property.read(tree, element, tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(tag: &str) -> (DomTree, NodeId) {
        let mut tree = DomTree::new();
        let id = tree.create_element(tag);
        (tree, id)
    }

    #[test]
    fn test_names_round_trip() {
        for &p in Property::ALL {
            assert_eq!(Property::from_name(p.name()), Some(p));
        }
        assert_eq!(Property::from_name("textcontent"), None);
        assert_eq!(Property::from_name("onclick"), None);
    }

    #[test]
    fn test_number_values_stringify() {
        assert_eq!(PropValue::from(42), PropValue::Text("42".into()));
        assert_eq!(PropValue::from(1.5), PropValue::Text("1.5".into()));
        assert_eq!(PropValue::from(2.0), PropValue::Text("2".into()));
        assert_eq!(PropValue::from(f64::INFINITY), PropValue::Text("Infinity".into()));
    }

    #[test]
    fn test_map_stringifies_values() {
        let map = PropValue::map([("userId", PropValue::from(42)), ("active", true.into())]);
        assert_eq!(
            map,
            PropValue::Map(vec![
                ("userId".into(), "42".into()),
                ("active".into(), "true".into()),
            ])
        );
    }

    #[test]
    fn test_text_property_reflects_attribute() {
        let (mut tree, a) = element("a");
        set_property(&mut tree, a, "href", &"/docs".into()).unwrap();
        set_property(&mut tree, a, "className", &"nav link".into()).unwrap();
        assert_eq!(tree.get_attribute(a, "href"), Some("/docs"));
        assert_eq!(tree.get_attribute(a, "class"), Some("nav link"));
    }

    #[test]
    fn test_bool_on_text_property_stringifies() {
        let (mut tree, div) = element("div");
        set_property(&mut tree, div, "title", &true.into()).unwrap();
        assert_eq!(tree.get_attribute(div, "title"), Some("true"));
    }

    #[test]
    fn test_bool_property_is_idempotent() {
        let (mut tree, input) = element("input");
        set_property(&mut tree, input, "checked", &true.into()).unwrap();
        set_property(&mut tree, input, "checked", &true.into()).unwrap();
        assert_eq!(tree.attributes(input), vec![("checked", "")]);

        set_property(&mut tree, input, "checked", &false.into()).unwrap();
        set_property(&mut tree, input, "checked", &false.into()).unwrap();
        assert!(!tree.has_attribute(input, "checked"));
    }

    #[test]
    fn test_text_on_bool_property_uses_truthiness() {
        let (mut tree, div) = element("div");
        set_property(&mut tree, div, "hidden", &"false".into()).unwrap();
        assert_eq!(property(&tree, div, Property::Hidden), Some(PropValue::Bool(true)));
        set_property(&mut tree, div, "hidden", &"".into()).unwrap();
        assert_eq!(property(&tree, div, Property::Hidden), Some(PropValue::Bool(false)));
    }

    #[test]
    fn test_textarea_value_is_text() {
        let (mut tree, textarea) = element("textarea");
        set_property(&mut tree, textarea, "value", &"hello".into()).unwrap();
        assert_eq!(tree.text_content(textarea), "hello");
        assert!(!tree.has_attribute(textarea, "value"));
        assert_eq!(property(&tree, textarea, Property::Value), Some(PropValue::Text("hello".into())));
    }

    #[test]
    fn test_property_not_on_tag() {
        let (mut tree, div) = element("div");
        let err = set_property(&mut tree, div, "href", &"/x".into()).unwrap_err();
        assert_eq!(err, DomkitError::UnknownProperty { name: "href".into(), tag: "div".into() });
    }

    #[test]
    fn test_custom_element_takes_globals_only() {
        let (mut tree, card) = element("user-card");
        set_property(&mut tree, card, "id", &"c1".into()).unwrap();
        set_property(&mut tree, card, "dataset", &PropValue::map([("role", "admin")])).unwrap();
        assert_eq!(tree.get_attribute(card, "data-role"), Some("admin"));
        assert!(matches!(
            set_property(&mut tree, card, "value", &"x".into()),
            Err(DomkitError::UnknownProperty { .. })
        ));
    }

    #[test]
    fn test_map_value_rules() {
        let (mut tree, div) = element("div");
        let map = PropValue::map([("a", "1")]);
        assert_eq!(
            set_property(&mut tree, div, "title", &map),
            Err(DomkitError::InvalidPropertyValue { name: "title".into() })
        );
        assert_eq!(
            set_property(&mut tree, div, "dataset", &"x".into()),
            Err(DomkitError::InvalidPropertyValue { name: "dataset".into() })
        );
    }

    #[test]
    fn test_unset_property_reads_none() {
        let (tree, img) = element("img");
        assert_eq!(property(&tree, img, Property::Alt), None);
        assert_eq!(property(&tree, NodeId::ROOT, Property::Id), None);
        assert_eq!(property(&tree, img, Property::Dataset), Some(PropValue::Map(vec![])));
    }

    #[test]
    fn test_props_skip_none() {
        let (mut tree, div) = element("div");
        let props = Props::new()
            .with("id", "main")
            .with_opt("title", None::<&str>)
            .with_opt("lang", Some("en"));
        props.apply(&mut tree, div).unwrap();
        assert_eq!(tree.attributes(div), vec![("id", "main"), ("lang", "en")]);
    }

    #[test]
    fn test_props_from_iter() {
        let props: Props = [("id", Some(PropValue::from("x"))), ("title", None)].into_iter().collect();
        assert_eq!(props.len(), 2);
        assert_eq!(props.iter().filter(|(_, v)| v.is_some()).count(), 1);
    }
}
