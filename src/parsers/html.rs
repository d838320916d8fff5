use crate::parsers::ParsedPage;
use crate::results::{HeadingLevel, HeadingNode};
use scraper::{ElementRef, Html, Node, Selector};
use std::sync::LazyLock;

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("title selector should be valid"));

static META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta").expect("meta selector should be valid"));

static HEADING_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("h1, h2, h3, h4, h5, h6").expect("heading selector should be valid")
});

/// Elements whose text never reaches the reader
const HIDDEN_TEXT_TAGS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Parses an HTML document and extracts title, description, headings and text.
///
/// html5ever recovers from any markup, so this never fails.
pub fn parse(html: &str) -> ParsedPage {
    let doc = Html::parse_document(html);

    let title = doc
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| element_text(&el));

    let meta_description = extract_meta_description(&doc);
    let headings = extract_headings(&doc);
    let visible_text = extract_visible_text(&doc);

    ::log::debug!(
        "HTML parser found {} headings, {} chars of text",
        headings.len(),
        visible_text.len()
    );

    ParsedPage::new(title, meta_description, headings, visible_text)
}

/// Only the first `<meta name="description">` counts; if it has no `content`
/// later ones are not consulted.
fn extract_meta_description(doc: &Html) -> Option<String> {
    let meta = doc
        .select(&META_SELECTOR)
        .find(|el| el.value().attr("name") == Some("description"))?;

    meta.value()
        .attr("content")
        .map(|content| content.trim().to_string())
}

/// Extracts headings from HTML in document order
pub fn extract_headings(doc: &Html) -> Vec<HeadingNode> {
    doc.select(&HEADING_SELECTOR)
        .filter_map(|el| {
            let level = HeadingLevel::from_tag_name(el.value().name())?;
            Some(HeadingNode::new(level, element_text(&el)))
        })
        .collect()
}

/// Elements that start a new line when rendered
const BLOCK_TAGS: [&str; 37] = [
    "address", "article", "aside", "blockquote", "body", "br", "dd", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5",
    "h6", "head", "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section",
    "table", "td", "th", "title", "tr", "ul",
];

/// All text outside script-like elements, whitespace collapsed.
///
/// Text nodes are joined as-is, so inline markup inside a word
/// (`Web<em>site</em>`) keeps it one word; block elements are separated.
pub fn extract_visible_text(doc: &Html) -> String {
    let mut text = String::new();
    collect_visible_text(doc.root_element(), &mut text);

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_visible_text(el: ElementRef, out: &mut String) {
    let name = el.value().name();
    if HIDDEN_TEXT_TAGS.contains(&name) {
        return;
    }

    let block = BLOCK_TAGS.contains(&name);
    if block {
        out.push(' ');
    }

    for child in el.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_visible_text(child_el, out);
                }
            }
            _ => {}
        }
    }

    if block {
        out.push(' ');
    }
}

fn element_text(el: &ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}
