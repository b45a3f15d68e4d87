//! Standard AsciiDoc renderers.
//!
//! Each renderer matches its own set of tags and no two renderers here
//! match the same node.

use super::{NodeRenderer, Visit};
use crate::buffer::{first_child_text, name_matches, node_text, OutputBuffer};
use crate::node::Node;
use crate::service::FormatOptions;
use crate::utilities::code_language;

/// Create the standard renderers in dispatch order
pub fn standard_renderers(options: &FormatOptions) -> Vec<(&'static str, Box<dyn NodeRenderer>)> {
    vec![
        ("list", boxed(ListRenderer::new())),
        ("break", boxed(BreakRenderer::new(&options.line_break))),
        (
            "code",
            boxed(CodeRenderer::new(
                &options.monospace_delimiter,
                &options.code_block_delimiter,
            )),
        ),
        ("paragraph", boxed(ParagraphRenderer)),
        (
            "bold",
            boxed(DelimitedRenderer::new(&["b", "strong"], &options.strong_delimiter)),
        ),
        (
            "italic",
            boxed(DelimitedRenderer::new(&["i", "em"], &options.emphasis_delimiter)),
        ),
        ("text", boxed(TextRenderer)),
    ]
}

fn boxed<R: NodeRenderer + 'static>(renderer: R) -> Box<dyn NodeRenderer> {
    Box::new(renderer)
}

const LIST_CONTAINERS: &[&str] = &["ul", "ol"];

/// Unordered and ordered lists.
///
/// Nesting is tracked with one counter and one marker character. The marker
/// follows the most recently entered list, so a `ul` nested in an `ol`
/// renders its items with `*` at every level and the `ol` items after it
/// keep using `*` until another list is entered.
///
/// An `<li>` outside any list gets no marker at all rather than a lone space.
#[derive(Debug)]
pub struct ListRenderer {
    depth: usize,
    marker: char,
}

impl ListRenderer {
    pub fn new() -> Self {
        Self {
            depth: 0,
            marker: '*',
        }
    }

    /// Current list nesting depth
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Default for ListRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeRenderer for ListRenderer {
    fn can_render(&self, node: &Node) -> bool {
        name_matches(node, &["ul", "ol", "li"])
    }

    fn enter(&mut self, node: &Node, _depth: usize, out: &mut OutputBuffer) -> Visit {
        if name_matches(node, LIST_CONTAINERS) {
            self.depth += 1;
            self.marker = if node.tag_name() == Some("ol") { '.' } else { '*' };
            if self.depth == 1 {
                out.newline();
            } else {
                out.ensure_line_start();
            }
        } else if self.depth > 0 && !first_child_text(node).trim().is_empty() {
            for _ in 0..self.depth {
                out.push(self.marker);
            }
            out.push(' ');
        }
        Visit::Children
    }

    fn leave(&mut self, node: &Node, _depth: usize, out: &mut OutputBuffer) {
        if name_matches(node, LIST_CONTAINERS) {
            self.depth = self.depth.saturating_sub(1);
        } else {
            out.newline();
        }
    }
}

/// `<br>` as an AsciiDoc hard line break
#[derive(Debug)]
pub struct BreakRenderer {
    line_break: String,
}

impl BreakRenderer {
    pub fn new(line_break: &str) -> Self {
        Self {
            line_break: line_break.to_string(),
        }
    }
}

impl NodeRenderer for BreakRenderer {
    fn can_render(&self, node: &Node) -> bool {
        name_matches(node, &["br"])
    }

    fn enter(&mut self, _node: &Node, _depth: usize, out: &mut OutputBuffer) -> Visit {
        out.push_str(&self.line_break);
        Visit::Children
    }
}

/// `<pre>` as a delimited listing block, `<code>`/`<tt>` as inline monospace.
///
/// A listing block takes the raw text of its whole subtree, so markup
/// inside `<pre>` is never reflowed by the other renderers.
#[derive(Debug)]
pub struct CodeRenderer {
    monospace: String,
    block_delimiter: String,
}

impl CodeRenderer {
    pub fn new(monospace: &str, block_delimiter: &str) -> Self {
        Self {
            monospace: monospace.to_string(),
            block_delimiter: block_delimiter.to_string(),
        }
    }

    fn language(pre: &Node) -> Option<&str> {
        let own = pre.attr("class").and_then(code_language);
        own.or_else(|| {
            pre.children()
                .find(|child| child.tag_name() == Some("code"))
                .and_then(|code| code.attr("class"))
                .and_then(code_language)
        })
    }
}

impl NodeRenderer for CodeRenderer {
    fn can_render(&self, node: &Node) -> bool {
        name_matches(node, &["pre", "code", "tt"])
    }

    fn enter(&mut self, node: &Node, _depth: usize, out: &mut OutputBuffer) -> Visit {
        if !name_matches(node, &["pre"]) {
            out.push_str(&self.monospace);
            return Visit::Children;
        }

        out.ensure_line_start();
        if let Some(language) = Self::language(node) {
            out.push_str("[source,").push_str(language).push(']').newline();
        }
        out.push_str(&self.block_delimiter).newline();

        let body = node.text_content();
        out.push_str(&body);
        if !body.is_empty() && !body.ends_with('\n') {
            out.newline();
        }
        out.push_str(&self.block_delimiter).newline();
        Visit::SkipChildren
    }

    fn leave(&mut self, node: &Node, _depth: usize, out: &mut OutputBuffer) {
        if !name_matches(node, &["pre"]) {
            out.push_str(&self.monospace);
        }
    }
}

/// `<p>` and `<div>`, separated from their surroundings by line breaks
#[derive(Debug)]
pub struct ParagraphRenderer;

impl NodeRenderer for ParagraphRenderer {
    fn can_render(&self, node: &Node) -> bool {
        name_matches(node, &["p", "div"])
    }

    fn enter(&mut self, _node: &Node, _depth: usize, out: &mut OutputBuffer) -> Visit {
        out.newline();
        Visit::Children
    }

    fn leave(&mut self, _node: &Node, _depth: usize, out: &mut OutputBuffer) {
        out.newline();
    }
}

/// Inline span wrapped in the same delimiter on both sides.
///
/// Used for strong (`*`) and emphasis (`_`) text.
#[derive(Debug)]
pub struct DelimitedRenderer {
    tags: &'static [&'static str],
    delimiter: String,
}

impl DelimitedRenderer {
    pub fn new(tags: &'static [&'static str], delimiter: &str) -> Self {
        Self {
            tags,
            delimiter: delimiter.to_string(),
        }
    }
}

impl NodeRenderer for DelimitedRenderer {
    fn can_render(&self, node: &Node) -> bool {
        name_matches(node, self.tags)
    }

    fn enter(&mut self, _node: &Node, _depth: usize, out: &mut OutputBuffer) -> Visit {
        out.push_str(&self.delimiter);
        Visit::Children
    }

    fn leave(&mut self, _node: &Node, _depth: usize, out: &mut OutputBuffer) {
        out.push_str(&self.delimiter);
    }
}

/// Text nodes, copied as-is.
///
/// AsciiDoc markup characters inside the text are not escaped.
#[derive(Debug)]
pub struct TextRenderer;

impl NodeRenderer for TextRenderer {
    fn can_render(&self, node: &Node) -> bool {
        node.is_text()
    }

    fn enter(&mut self, node: &Node, _depth: usize, out: &mut OutputBuffer) -> Visit {
        out.push_str(node_text(node));
        Visit::Children
    }
}
