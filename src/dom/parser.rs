//! HTML → [`DomTree`] conversion on top of `scraper`'s html5ever tree.
//!
//! The whole document is kept, including `<script>` and `<style>` bodies, so
//! a carousel page can be written back out with its stylesheet intact.

use crate::dom::{DomNode, DomTree, RAW_TEXT_ELEMENTS};
use scraper::{ElementRef, Html, Node};

/// Parse raw HTML string into a DomTree rooted at `<html>`.
pub fn parse_html(html: &str, url: &str) -> DomTree {
    let document = Html::parse_document(html);
    let root = convert(document.root_element());

    let title = root
        .find_path(&|n: &DomNode| n.tag == "title")
        .and_then(|p| root.node_at(&p))
        .map(|t| t.collect_text())
        .unwrap_or_default();

    DomTree {
        root,
        url: url.to_string(),
        title,
    }
}

fn convert(el: ElementRef<'_>) -> DomNode {
    let tag = el.value().name.local.as_ref();
    let raw_text = RAW_TEXT_ELEMENTS.contains(&tag);

    let children = el
        .children()
        .filter_map(|child| match child.value() {
            Node::Element(_) => ElementRef::wrap(child).map(convert),
            // inter-element whitespace is noise everywhere except raw text
            Node::Text(t) if raw_text || !t.trim().is_empty() => Some(DomNode::text(&*t.text)),
            _ => None,
        })
        .collect();

    let attributes = el
        .value()
        .attrs()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    DomNode::element(tag, attributes, children)
}
