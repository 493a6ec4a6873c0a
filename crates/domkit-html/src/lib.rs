//! domkit HTML
//!
//! HTML5 parsing built on html5ever, and serialization back to markup.

mod parser;
mod serializer;

pub use domkit_dom::{Document, DomError};
pub use parser::HtmlParser;
pub use serializer::{get_inner_html, get_outer_html, HtmlSerializer};

/// Parse an HTML string into a [`Document`]
pub fn parse(html: &str) -> Result<Document, HtmlError> {
    HtmlParser::new().parse(html)
}

/// HTML parsing error
#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    #[error("failed to read HTML input: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to build document: {0}")]
    Dom(#[from] DomError),
}
