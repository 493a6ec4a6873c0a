//! HTML tag names accepted by element creation

/// Tag names of the HTML standard (lowercase)
const HTML_TAGS: &[&str] = &[
    "a", "abbr", "address", "area", "article", "aside", "audio",
    "b", "base", "bdi", "bdo", "blockquote", "body", "br", "button",
    "canvas", "caption", "cite", "code", "col", "colgroup",
    "data", "datalist", "dd", "del", "details", "dfn", "dialog", "div", "dl", "dt",
    "em", "embed", "fieldset", "figcaption", "figure", "footer", "form",
    "h1", "h2", "h3", "h4", "h5", "h6", "head", "header", "hgroup", "hr", "html",
    "i", "iframe", "img", "input", "ins", "kbd", "label", "legend", "li", "link",
    "main", "map", "mark", "menu", "meta", "meter", "nav", "noscript",
    "object", "ol", "optgroup", "option", "output", "p", "param", "picture", "pre", "progress",
    "q", "rp", "rt", "ruby", "s", "samp", "script", "search", "section", "select", "slot",
    "small", "source", "span", "strong", "style", "sub", "summary", "sup",
    "table", "tbody", "td", "template", "textarea", "tfoot", "th", "thead", "time",
    "title", "tr", "track", "u", "ul", "var", "video", "wbr",
];

/// Names reserved by SVG/MathML that are not valid custom element names
const RESERVED_CUSTOM_NAMES: &[&str] = &[
    "annotation-xml", "color-profile", "font-face", "font-face-src",
    "font-face-uri", "font-face-format", "font-face-name", "missing-glyph",
];

/// Whether `tag` is a standard HTML tag name (ASCII case-insensitive)
pub fn is_known_tag(tag: &str) -> bool {
    HTML_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

/// Whether `name` is a valid custom element name (`my-card`, `x-list`)
pub fn is_valid_custom_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_lower = chars.next().is_some_and(|c| c.is_ascii_lowercase());
    starts_lower
        && name.contains('-')
        && !RESERVED_CUSTOM_NAMES.contains(&name)
        && name.chars().all(|c| {
            c.is_ascii_lowercase()
                || c.is_ascii_digit()
                || matches!(c, '-' | '.' | '_')
                || (!c.is_ascii() && !c.is_whitespace())
        })
}

/// Whether `tag` can be passed to element creation
pub fn is_valid_tag_name(tag: &str) -> bool {
    is_known_tag(tag) || is_valid_custom_element_name(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags() {
        assert!(is_known_tag("div"));
        assert!(is_known_tag("BUTTON"));
        assert!(is_known_tag("template"));
        assert!(!is_known_tag("blink"));
        assert!(!is_known_tag(""));
    }

    #[test]
    fn test_custom_element_names() {
        assert!(is_valid_custom_element_name("my-card"));
        assert!(is_valid_custom_element_name("x-list.v2"));
        assert!(!is_valid_custom_element_name("mycard"));
        assert!(!is_valid_custom_element_name("My-Card"));
        assert!(!is_valid_custom_element_name("-card"));
        assert!(!is_valid_custom_element_name("font-face"));
        assert!(!is_valid_custom_element_name("my card-x"));
    }

    #[test]
    fn test_valid_tag_name() {
        assert!(is_valid_tag_name("section"));
        assert!(is_valid_tag_name("todo-item"));
        assert!(!is_valid_tag_name("section!"));
    }
}
