//! Axum route handlers for the Render API.

use axum::{extract::State, response::Html, Json};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::render::{render_document, render_html_page, Node, RenderState};
use crate::state::AppState;

fn parse_state(body: Value) -> Result<RenderState, AppError> {
    RenderState::from_json(body).map_err(|e| AppError::UnprocessableEntity(e.to_string()))
}

/// POST /api/v1/render
///
/// Renders `{ data, theme }` with the Glalie template and returns a printable HTML page.
pub async fn handle_render_html(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Html<String>, AppError> {
    let input = parse_state(body)?;
    let page = render_html_page(&input, state.markup.as_ref());
    info!(bytes = page.len(), "Rendered resume page");
    Ok(Html(page))
}

/// POST /api/v1/render/tree
///
/// Same input as `/api/v1/render`, but returns the document tree as JSON so the
/// host can mount it on its own surface.
pub async fn handle_render_tree(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Node>, AppError> {
    let input = parse_state(body)?;
    let tree = render_document(&input.data, &input.theme, state.markup.as_ref());
    Ok(Json(tree))
}
