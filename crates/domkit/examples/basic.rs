//! Example: build a card list from a template
//!
//! Usage: `cargo run --example basic [file.html]`

use anyhow::Context;
use domkit::html::{HtmlSerializer, parse};
use domkit::{Props, clone_template, create_element, ensure_all_elements, ensure_element};
use tracing_subscriber::EnvFilter;

const DEFAULT_MARKUP: &str = r#"<!DOCTYPE html>
<html><head><title>Cards</title></head>
<body>
  <section id="cards"></section>
  <template id="card-template">
    <article class="card"><h2></h2><p class="body"></p></article>
  </template>
</body></html>"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let markup = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?,
        None => DEFAULT_MARKUP.to_string(),
    };
    let mut doc = parse(&markup)?;
    println!("domkit v{} parsed {:?}", domkit::VERSION, doc.title());

    let section = ensure_element(&doc, "#cards", None)?;
    for (i, title) in ["Alpha", "Beta", "Gamma"].into_iter().enumerate() {
        let card = clone_template(&mut doc, "#card-template")?;
        let tree = doc.tree_mut();
        if let Some(heading) = tree.first_element_child(card) {
            tree.set_text_content(heading, title)?;
        }
        tree.set_data(card, "index", &i.to_string())?;
        tree.append_child(section, card)?;
    }

    let props = Props::new()
        .with("type", "button")
        .with("textContent", "Load more")
        .with("disabled", true);
    let button = create_element(&mut doc, "button", Some(&props), None)?;
    doc.tree_mut().append_child(section, button)?;

    let cards = ensure_all_elements(&doc, "#cards > .card", None)?;
    println!("{} cards", cards.len());
    println!("{}", HtmlSerializer::pretty().serialize_outer(doc.tree(), section));
    Ok(())
}
