pub mod parser;

use std::collections::HashMap;

/// Elements that never carry children or a closing tag when serialized.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Elements whose text content is kept and written back verbatim.
pub const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Document,
    Element,
    Text,
}

/// Child-index path from the tree root down to a node.
///
/// Paths stay valid as long as the tree's shape does not change. The carousel
/// only rewrites attributes, so paths resolved at bind time remain usable.
pub type NodePath = Vec<usize>;

/// Internal DOM node representation.
#[derive(Debug, Clone)]
pub struct DomNode {
    pub tag: String,
    pub attributes: HashMap<String, String>,
    pub text: String,
    pub children: Vec<DomNode>,
    pub node_type: NodeType,
}

impl DomNode {
    pub fn document(children: Vec<DomNode>) -> Self {
        Self {
            tag: "#document".into(),
            attributes: HashMap::new(),
            text: String::new(),
            children,
            node_type: NodeType::Document,
        }
    }

    pub fn element(
        tag: impl Into<String>,
        attrs: HashMap<String, String>,
        children: Vec<DomNode>,
    ) -> Self {
        Self {
            tag: tag.into(),
            attributes: attrs,
            text: String::new(),
            children,
            node_type: NodeType::Element,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            tag: String::new(),
            attributes: HashMap::new(),
            text: content.into(),
            children: Vec::new(),
            node_type: NodeType::Text,
        }
    }

    /// Collect all text content recursively
    pub fn collect_text(&self) -> String {
        let mut buf = String::new();
        self.collect_text_inner(&mut buf);
        buf
    }

    fn collect_text_inner(&self, buf: &mut String) {
        if !self.text.is_empty() {
            if !buf.is_empty() {
                buf.push(' ');
            }
            buf.push_str(self.text.trim());
        }
        if self.is_raw_text() {
            return;
        }
        for child in &self.children {
            child.collect_text_inner(buf);
        }
    }

    /// `<script>` and `<style>`: content is source code, not page text.
    pub fn is_raw_text(&self) -> bool {
        self.node_type == NodeType::Element && RAW_TEXT_ELEMENTS.contains(&self.tag.as_str())
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    // ─── class list ──────────────────────────────────────────────────────────

    /// Whitespace-separated entries of the `class` attribute, in order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// Append `class` unless it is already present.
    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let joined = match self.attr("class") {
            Some(existing) if !existing.trim().is_empty() => {
                format!("{} {}", existing.trim(), class)
            }
            _ => class.to_string(),
        };
        self.set_attr("class", joined);
    }

    /// Remove every class listed in `classes`. Other classes keep their order.
    pub fn remove_classes(&mut self, classes: &[&str]) {
        let Some(existing) = self.attr("class") else {
            return;
        };
        let kept: Vec<&str> = existing
            .split_whitespace()
            .filter(|c| !classes.contains(c))
            .collect();
        let kept = kept.join(" ");
        self.set_attr("class", kept);
    }

    // ─── lookup ──────────────────────────────────────────────────────────────

    /// Depth-first, document-order search for the first node matching `pred`.
    pub fn find_path(&self, pred: &dyn Fn(&DomNode) -> bool) -> Option<NodePath> {
        let mut path = Vec::new();
        if find_path_inner(self, pred, &mut path) {
            Some(path)
        } else {
            None
        }
    }

    /// Paths of every descendant (excluding `self`) matching `pred`, in document order.
    pub fn find_all_paths(&self, pred: &dyn Fn(&DomNode) -> bool) -> Vec<NodePath> {
        let mut out = Vec::new();
        let mut path = Vec::new();
        for (i, child) in self.children.iter().enumerate() {
            path.push(i);
            collect_paths(child, pred, &mut path, &mut out);
            path.pop();
        }
        out
    }

    pub fn node_at(&self, path: &[usize]) -> Option<&DomNode> {
        path.iter()
            .try_fold(self, |node, &i| node.children.get(i))
    }

    pub fn node_at_mut(&mut self, path: &[usize]) -> Option<&mut DomNode> {
        path.iter()
            .try_fold(self, |node, &i| node.children.get_mut(i))
    }

    // ─── serialization ───────────────────────────────────────────────────────

    /// Serialize the subtree back to HTML. Attributes are written in sorted
    /// order so output is stable.
    pub fn to_html(&self) -> String {
        let mut buf = String::new();
        write_html(self, &mut buf);
        buf
    }
}

fn find_path_inner(
    node: &DomNode,
    pred: &dyn Fn(&DomNode) -> bool,
    path: &mut NodePath,
) -> bool {
    if pred(node) {
        return true;
    }
    for (i, child) in node.children.iter().enumerate() {
        path.push(i);
        if find_path_inner(child, pred, path) {
            return true;
        }
        path.pop();
    }
    false
}

fn collect_paths(
    node: &DomNode,
    pred: &dyn Fn(&DomNode) -> bool,
    path: &mut NodePath,
    out: &mut Vec<NodePath>,
) {
    if pred(node) {
        out.push(path.clone());
    }
    for (i, child) in node.children.iter().enumerate() {
        path.push(i);
        collect_paths(child, pred, path, out);
        path.pop();
    }
}

fn write_html(node: &DomNode, buf: &mut String) {
    match node.node_type {
        NodeType::Text => buf.push_str(&escape(&node.text, false)),
        NodeType::Document => {
            for child in &node.children {
                write_html(child, buf);
            }
        }
        NodeType::Element => {
            buf.push('<');
            buf.push_str(&node.tag);
            let mut attrs: Vec<_> = node.attributes.iter().collect();
            attrs.sort();
            for (k, v) in attrs {
                buf.push(' ');
                buf.push_str(k);
                buf.push_str("=\"");
                buf.push_str(&escape(v, true));
                buf.push('"');
            }
            buf.push('>');
            if VOID_ELEMENTS.contains(&node.tag.as_str()) {
                return;
            }
            for child in &node.children {
                if node.is_raw_text() && child.node_type == NodeType::Text {
                    buf.push_str(&child.text);
                } else {
                    write_html(child, buf);
                }
            }
            buf.push_str("</");
            buf.push_str(&node.tag);
            buf.push('>');
        }
    }
}

fn escape(s: &str, in_attr: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Parsed DOM tree with metadata
#[derive(Debug, Clone)]
pub struct DomTree {
    pub root: DomNode,
    pub url: String,
    pub title: String,
}

impl DomTree {
    /// Path of the element whose `id` attribute equals `id`.
    pub fn find_by_id(&self, id: &str) -> Option<NodePath> {
        self.root.find_path(&|n: &DomNode| n.id() == Some(id))
    }
}
