//! Renderer set for HTML to AsciiDoc conversion.

mod elements;
mod renderer;

pub use elements::{
    standard_renderers, BreakRenderer, CodeRenderer, DelimitedRenderer, ListRenderer,
    ParagraphRenderer, TextRenderer,
};
pub use renderer::{NodeRenderer, RendererFactory, Visit};

use indexmap::IndexMap;

use crate::service::FormatOptions;

/// Ordered collection of renderers for a single conversion call.
///
/// Iteration follows insertion order. Inserting under an existing name
/// replaces that renderer in place.
pub struct Renderers {
    renderers: IndexMap<String, Box<dyn NodeRenderer>>,
}

impl Renderers {
    /// Create an empty set
    pub fn new() -> Self {
        Self {
            renderers: IndexMap::new(),
        }
    }

    /// Create the standard set: list, break, code, paragraph, bold, italic, text
    pub fn standard(options: &FormatOptions) -> Self {
        let mut renderers = Self::new();
        for (name, renderer) in standard_renderers(options) {
            renderers.insert(name, renderer);
        }
        renderers
    }

    /// Add a renderer, replacing any renderer registered under `name`
    pub fn insert(&mut self, name: &str, renderer: Box<dyn NodeRenderer>) {
        self.renderers.insert(name.to_string(), renderer);
    }

    /// Renderer names in dispatch order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.renderers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    /// Borrow every renderer in dispatch order
    pub fn as_dyn_mut(&mut self) -> Vec<&mut dyn NodeRenderer> {
        self.renderers
            .values_mut()
            .map(|renderer| renderer.as_mut() as &mut dyn NodeRenderer)
            .collect()
    }
}

impl Default for Renderers {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_order() {
        let renderers = Renderers::standard(&FormatOptions::default());
        let names: Vec<&str> = renderers.names().collect();
        assert_eq!(
            names,
            ["list", "break", "code", "paragraph", "bold", "italic", "text"]
        );
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let options = FormatOptions::default();
        let mut renderers = Renderers::standard(&options);
        renderers.insert("bold", Box::new(DelimitedRenderer::new(&["b", "strong"], "**")));
        renderers.insert("underline", Box::new(DelimitedRenderer::new(&["u"], "__")));

        let names: Vec<&str> = renderers.names().collect();
        assert_eq!(names[4], "bold");
        assert_eq!(names.last(), Some(&"underline"));
        assert_eq!(renderers.len(), 8);
    }
}
