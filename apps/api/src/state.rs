use std::sync::Arc;

use crate::config::Config;
use crate::render::MarkupRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Rich-text capability handed to every render. Default: comrak Markdown.
    pub markup: Arc<dyn MarkupRenderer>,
}
