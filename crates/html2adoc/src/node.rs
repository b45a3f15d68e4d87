//! Document tree for HTML to AsciiDoc conversion.
//!
//! The parser produces this tree once per conversion and the renderers only
//! ever read it. Building a tree by hand is also supported, which keeps the
//! renderers testable without going through the HTML parser.

use crate::utilities::is_void;

/// What a node is, together with its payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Root of a parsed fragment
    Document,
    /// Element with a lowercase tag name and attributes in source order
    Element {
        name: String,
        attrs: Vec<(String, String)>,
    },
    /// Literal text, entities already decoded
    Text(String),
    /// Comment body without the `<!--` `-->` markers
    Comment(String),
}

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Node>,
}

impl Node {
    /// Create a document root
    pub fn document() -> Self {
        Self {
            kind: NodeKind::Document,
            children: Vec::new(),
        }
    }

    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self::element_with_attrs(tag_name, Vec::new())
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        Self {
            kind: NodeKind::Element {
                name: tag_name.to_lowercase(),
                attrs: attrs
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            },
            children: Vec::new(),
        }
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self {
            kind: NodeKind::Text(content.to_string()),
            children: Vec::new(),
        }
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        Self {
            kind: NodeKind::Comment(content.to_string()),
            children: Vec::new(),
        }
    }

    /// Builder-style variant of [`Node::add_child`]
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn is_element(&self) -> bool {
        matches!(self.kind, NodeKind::Element { .. })
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, NodeKind::Text(_))
    }

    /// Lowercase tag name, `None` for anything that is not an element
    pub fn tag_name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Get an attribute value by name (case-insensitive)
    pub fn attr(&self, name: &str) -> Option<&str> {
        let NodeKind::Element { attrs, .. } = &self.kind else {
            return None;
        };
        attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    pub fn first_child(&self) -> Option<&Node> {
        self.children.first()
    }

    /// Own text payload; empty unless this is a text node
    pub fn own_text(&self) -> &str {
        match &self.kind {
            NodeKind::Text(text) => text,
            _ => "",
        }
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match &node.kind {
                NodeKind::Text(text) => out.push_str(text),
                NodeKind::Comment(_) => {}
                _ => stack.extend(node.children.iter().rev()),
            }
        }
        out
    }

    /// Reconstruct the markup of this node and its subtree
    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Reconstruct the markup of the children only
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_html(&mut out);
        }
        out
    }

    fn write_html(&self, out: &mut String) {
        enum Step<'a> {
            Open(&'a Node),
            Close(&'a str),
        }

        let mut stack = vec![Step::Open(self)];
        while let Some(step) = stack.pop() {
            let node = match step {
                Step::Open(node) => node,
                Step::Close(name) => {
                    out.push_str("</");
                    out.push_str(name);
                    out.push('>');
                    continue;
                }
            };

            match &node.kind {
                NodeKind::Text(text) => out.push_str(&escape_html_text(text)),
                NodeKind::Comment(body) => {
                    out.push_str("<!--");
                    out.push_str(body);
                    out.push_str("-->");
                }
                NodeKind::Document => {
                    stack.extend(node.children.iter().rev().map(Step::Open));
                }
                NodeKind::Element { name, attrs } => {
                    out.push('<');
                    out.push_str(name);
                    for (key, value) in attrs {
                        out.push(' ');
                        out.push_str(key);
                        out.push_str("=\"");
                        out.push_str(&escape_html_attr(value));
                        out.push('"');
                    }
                    out.push('>');

                    if !is_void(name) {
                        stack.push(Step::Close(name));
                        stack.extend(node.children.iter().rev().map(Step::Open));
                    }
                }
            }
        }
    }
}

impl Drop for Node {
    /// Unwinds the subtree with a work list so deep trees cannot overflow
    /// the stack while being freed.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Escape text content for HTML output
fn escape_html_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape HTML attribute value
fn escape_html_attr(s: &str) -> String {
    escape_html_text(s).replace('"', "&quot;")
}
