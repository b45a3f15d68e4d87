//! # html2adoc
//!
//! Convert HTML documentation fragments to AsciiDoc.
//!
//! Descriptions written as HTML (Javadoc comments, plugin descriptors) are
//! turned into AsciiDoc text that keeps paragraphs, lists, breaks, code and
//! emphasis. Markup without an AsciiDoc mapping is kept as raw HTML.
//!
//! ## Design
//!
//! The fragment is parsed leniently into a [`Node`] tree, then walked depth
//! first. Every node is offered to an ordered set of [`NodeRenderer`]s; the
//! one that accepts it writes to a shared [`OutputBuffer`] when the walk
//! enters and leaves the node. Renderers and buffer are created per call, so
//! conversions never see each other's state.
//!
//! | HTML                   | AsciiDoc (default options)      |
//! |------------------------|---------------------------------|
//! | `<p>`, `<div>`         | surrounded by line breaks       |
//! | `<ul>`, `<ol>`, `<li>` | `*`, `**`, ... / `.`, `..`, ... |
//! | `<br>`                 | ` +` hard line break            |
//! | `<pre>`                | `----` listing block            |
//! | `<code>`, `<tt>`       | `` `mono` ``                    |
//! | `<b>`, `<strong>`      | `*strong*`                      |
//! | `<i>`, `<em>`          | `_emphasis_`                    |
//!
//! ## Example
//!
//! ```rust
//! let adoc = html2adoc::convert("<ul><li>one</li><li><b>two</b> items</li></ul>");
//! assert!(adoc.contains("* one\n"));
//! ```
//!
//! ## Example (custom options)
//!
//! ```rust
//! use html2adoc::{AdocFormatter, FormatOptions};
//!
//! let options = FormatOptions {
//!     strong_delimiter: "**".to_string(),
//!     ..Default::default()
//! };
//! let formatter = AdocFormatter::with_options(options).unwrap();
//! assert_eq!(formatter.format("a<b>b</b>c"), "a**b**c");
//! ```

pub mod buffer;
pub mod html;
pub mod node;
mod render;
mod service;
mod traverse;
mod utilities;

pub use buffer::OutputBuffer;
pub use html::parse_fragment;
pub use node::{Node, NodeKind};
pub use render::{
    BreakRenderer, CodeRenderer, DelimitedRenderer, ListRenderer, NodeRenderer, ParagraphRenderer,
    RendererFactory, Renderers, TextRenderer, Visit,
};
pub use service::{convert, AdocFormatter, FormatOptions};
pub use traverse::traverse;
pub use utilities::*;

/// Error type for html2adoc operations
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

pub type Result<T> = std::result::Result<T, FormatError>;
