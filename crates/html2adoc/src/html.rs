//! HTML parsing support.
//!
//! Parses an HTML body fragment with scraper (html5ever underneath) and
//! converts it to the [`Node`] tree the renderers walk. Parsing is lenient:
//! malformed markup is normalized, never rejected.

use scraper::node::Element;
use scraper::{Html, Node as ScraperNode};

use crate::node::Node;

/// Parse an HTML fragment into a Node tree.
///
/// The returned root is a document node holding the `html` container that
/// fragment parsing wraps around the input.
///
/// # Example
///
/// ```rust
/// use html2adoc::parse_fragment;
///
/// let root = parse_fragment("<p>Hello <em>World</em></p>");
/// let html = root.first_child().unwrap();
/// assert_eq!(html.tag_name(), Some("html"));
/// assert_eq!(root.text_content(), "Hello World");
/// ```
pub fn parse_fragment(html: &str) -> Node {
    let document = Html::parse_fragment(html);
    let root = document.root_element();

    // Each frame is an element under construction and its remaining
    // scraper children; a finished frame is attached to the one below it.
    let mut fragment = Node::document();
    let mut stack = vec![(element_node(root.value()), root.children())];

    while let Some((node, children)) = stack.last_mut() {
        let Some(child) = children.next() else {
            if let Some((finished, _)) = stack.pop() {
                match stack.last_mut() {
                    Some((parent, _)) => parent.add_child(finished),
                    None => fragment.add_child(finished),
                }
            }
            continue;
        };

        match child.value() {
            ScraperNode::Text(text) => node.add_child(Node::text(&text.text)),
            ScraperNode::Comment(comment) => node.add_child(Node::comment(&comment.comment)),
            ScraperNode::Element(element) => stack.push((element_node(element), child.children())),
            _ => {}
        }
    }

    fragment
}

/// Convert a scraper element to a childless Node
fn element_node(element: &Element) -> Node {
    let attrs: Vec<(&str, &str)> = element.attrs().collect();
    Node::element_with_attrs(element.name(), attrs)
}
