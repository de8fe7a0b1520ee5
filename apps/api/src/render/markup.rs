//! Rich-text capability: converts a markup string into an HTML fragment.
//!
//! The template never parses markup itself; it hands every free-text field to a
//! `MarkupRenderer` and embeds whatever comes back.

use comrak::{markdown_to_html, Options};

/// Converts one free-text field into rendered content.
pub trait MarkupRenderer: Send + Sync {
    fn render(&self, source: &str) -> String;
}

/// Markdown renderer backed by comrak.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer {
    /// Pass raw HTML in the source through untouched instead of escaping it.
    pub allow_raw_html: bool,
    /// Enable the GFM extensions (strikethrough, tables, autolinks).
    pub extensions: bool,
}

impl MarkdownRenderer {
    pub fn new(allow_raw_html: bool, extensions: bool) -> Self {
        Self {
            allow_raw_html,
            extensions,
        }
    }

    fn options(&self) -> Options {
        let mut options = Options::default();
        options.render.unsafe_ = self.allow_raw_html;
        options.render.escape = !self.allow_raw_html;
        if self.extensions {
            options.extension.strikethrough = true;
            options.extension.table = true;
            options.extension.autolink = true;
        }
        options
    }
}

impl MarkupRenderer for MarkdownRenderer {
    fn render(&self, source: &str) -> String {
        if source.trim().is_empty() {
            return String::new();
        }
        markdown_to_html(source, &self.options())
    }
}
