//! Utility functions and constants for HTML processing.

use once_cell::sync::Lazy;
use regex::Regex;

/// Void (self-closing) HTML elements
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Containers introduced by fragment parsing rather than by the input
pub const STRUCTURAL_ELEMENTS: &[&str] = &["html", "head", "body"];

static LANGUAGE_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s)(?:language|lang)-([A-Za-z0-9_+#.-]+)").expect("valid regex"));

/// Check if a tag is a void element
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag.to_lowercase().as_str())
}

/// Check if a tag is a fragment-parsing container
pub fn is_structural(tag: &str) -> bool {
    STRUCTURAL_ELEMENTS.contains(&tag.to_lowercase().as_str())
}

/// Extract the source language from a `class` attribute such as
/// `language-java` or `lang-xml`.
pub fn code_language(class: &str) -> Option<&str> {
    LANGUAGE_CLASS
        .captures(class)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Collapse runs of three or more newlines down to a single blank line
pub fn collapse_blank_lines(output: &str) -> String {
    let mut newline_count = 0;
    let mut processed = String::with_capacity(output.len());

    for c in output.chars() {
        if c == '\n' {
            newline_count += 1;
            if newline_count <= 2 {
                processed.push(c);
            }
        } else {
            newline_count = 0;
            processed.push(c);
        }
    }

    processed
}
