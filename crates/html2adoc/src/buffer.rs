//! Output accumulator shared by every renderer during one conversion.

use crate::node::Node;

/// Append-only AsciiDoc output for a single conversion call.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    text: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_str(&mut self, s: &str) -> &mut Self {
        self.text.push_str(s);
        self
    }

    pub fn push(&mut self, c: char) -> &mut Self {
        self.text.push(c);
        self
    }

    pub fn newline(&mut self) -> &mut Self {
        self.push('\n')
    }

    /// Start a new line unless the output is empty or already at one
    pub fn ensure_line_start(&mut self) -> &mut Self {
        if !self.text.is_empty() && !self.text.ends_with('\n') {
            self.text.push('\n');
        }
        self
    }

    pub fn ends_with(&self, s: &str) -> bool {
        self.text.ends_with(s)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// Text payload of `node` if it is a text node, otherwise empty.
pub fn node_text(node: &Node) -> &str {
    node.own_text()
}

/// Text payload of the first child of `node`, if that child is a text node.
pub fn first_child_text(node: &Node) -> &str {
    node.first_child().map(node_text).unwrap_or("")
}

/// Whether `node` is an element named one of `names`.
pub fn name_matches(node: &Node, names: &[&str]) -> bool {
    node.tag_name().is_some_and(|tag| names.contains(&tag))
}
