//! AdocFormatter - the main entry point for HTML to AsciiDoc conversion.

use indexmap::IndexMap;
use tracing::debug;

use crate::buffer::OutputBuffer;
use crate::html::parse_fragment;
use crate::render::{NodeRenderer, RendererFactory, Renderers};
use crate::traverse::traverse;
use crate::utilities::collapse_blank_lines;
use crate::{FormatError, Result};

/// Options for AdocFormatter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Delimiter around `<b>` / `<strong>` content
    pub strong_delimiter: String,

    /// Delimiter around `<i>` / `<em>` content
    pub emphasis_delimiter: String,

    /// Delimiter around inline `<code>` / `<tt>` content
    pub monospace_delimiter: String,

    /// Opening and closing line of a `<pre>` listing block
    pub code_block_delimiter: String,

    /// Replacement for `<br>`, must end with a newline
    pub line_break: String,

    /// Collapse runs of blank lines in the result into one
    pub collapse_blank_lines: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            strong_delimiter: "*".to_string(),
            emphasis_delimiter: "_".to_string(),
            monospace_delimiter: "`".to_string(),
            code_block_delimiter: "----".to_string(),
            line_break: " +\n".to_string(),
            collapse_blank_lines: false,
        }
    }
}

impl FormatOptions {
    /// Check that every delimiter can actually delimit something
    pub fn validate(&self) -> Result<()> {
        let delimiters = [
            ("strong_delimiter", &self.strong_delimiter),
            ("emphasis_delimiter", &self.emphasis_delimiter),
            ("monospace_delimiter", &self.monospace_delimiter),
            ("code_block_delimiter", &self.code_block_delimiter),
        ];
        for (name, value) in delimiters {
            if value.trim().is_empty() {
                return Err(FormatError::InvalidOption(format!("{name} must not be blank")));
            }
        }

        if !self.line_break.ends_with('\n') {
            return Err(FormatError::InvalidOption(format!(
                "line_break must end with a newline, got {:?}",
                self.line_break
            )));
        }

        Ok(())
    }
}

/// The main service for converting HTML to AsciiDoc.
///
/// The formatter itself holds only configuration. Renderers, their state
/// and the output buffer are created inside every [`AdocFormatter::format`]
/// call, so one formatter can be shared between threads.
pub struct AdocFormatter {
    options: FormatOptions,
    custom_renderers: IndexMap<String, RendererFactory>,
}

impl AdocFormatter {
    /// Create a new AdocFormatter with default options
    pub fn new() -> Self {
        Self {
            options: FormatOptions::default(),
            custom_renderers: IndexMap::new(),
        }
    }

    /// Create an AdocFormatter with custom options
    pub fn with_options(options: FormatOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            custom_renderers: IndexMap::new(),
        })
    }

    /// Register a renderer factory.
    ///
    /// Using a standard name (`list`, `break`, `code`, `paragraph`, `bold`,
    /// `italic`, `text`) replaces that renderer; any other name is dispatched
    /// after the standard ones. The new renderer must not match nodes that
    /// another registered renderer already matches.
    pub fn add_renderer<F, R>(&mut self, name: &str, factory: F) -> &mut Self
    where
        F: Fn(&FormatOptions) -> R + Send + Sync + 'static,
        R: NodeRenderer + 'static,
    {
        let factory: RendererFactory =
            Box::new(move |options: &FormatOptions| -> Box<dyn NodeRenderer> { Box::new(factory(options)) });
        self.custom_renderers.insert(name.to_string(), factory);
        self
    }

    /// Get the current options
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Convert an HTML fragment to AsciiDoc.
    ///
    /// Input without any markup is returned unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use html2adoc::AdocFormatter;
    ///
    /// let formatter = AdocFormatter::new();
    /// assert_eq!(formatter.format("Hello <b>World</b>"), "Hello *World*");
    /// assert_eq!(formatter.format("no markup"), "no markup");
    /// ```
    pub fn format(&self, text: &str) -> String {
        let root = parse_fragment(text);
        if root.text_content() == text {
            debug!(len = text.len(), "no markup found, returning input unchanged");
            return text.to_string();
        }

        let mut renderers = self.renderers();
        let mut out = OutputBuffer::new();
        traverse(&root.children, &mut renderers.as_dyn_mut(), &mut out);

        let result = out.into_string();
        debug!(
            input_len = text.len(),
            output_len = result.len(),
            renderers = renderers.len(),
            "converted HTML fragment"
        );

        if self.options.collapse_blank_lines {
            collapse_blank_lines(&result)
        } else {
            result
        }
    }

    /// Convert an optional field, rejecting a missing value.
    ///
    /// Report generators pass descriptor fields straight through; an absent
    /// field is a caller bug rather than empty text.
    pub fn format_field(&self, text: Option<&str>) -> Result<String> {
        let text = text.ok_or_else(|| FormatError::InvalidInput("text to convert is missing".to_string()))?;
        Ok(self.format(text))
    }

    /// Fresh renderer set for one conversion
    fn renderers(&self) -> Renderers {
        let mut renderers = Renderers::standard(&self.options);
        for (name, factory) in &self.custom_renderers {
            renderers.insert(name, factory(&self.options));
        }
        renderers
    }
}

impl Default for AdocFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert an HTML fragment to AsciiDoc with default options.
///
/// # Example
///
/// ```rust
/// let adoc = html2adoc::convert("<p>First</p><p>Second</p>");
/// assert_eq!(adoc, "\nFirst\n\nSecond\n");
/// ```
pub fn convert(text: &str) -> String {
    AdocFormatter::new().format(text)
}
