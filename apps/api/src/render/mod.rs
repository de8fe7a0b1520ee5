// Glalie résumé template: a pure transform from (data, theme) to a document tree.
// Everything except `handlers` is free of I/O and shared state, so renders run
// inline on the request task.

pub mod handlers;
pub mod layout;
pub mod markup;
pub mod model;
pub mod node;
pub mod sections;
pub mod theme;

use thiserror::Error;

// Re-export the public API consumed by the route handlers.
pub use layout::{render_document, render_html_page};
pub use markup::{MarkdownRenderer, MarkupRenderer};
pub use model::RenderState;
pub use node::Node;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Malformed render input: {0}")]
    MalformedInput(#[from] serde_json::Error),
}
