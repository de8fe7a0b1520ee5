use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and markup settings.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "glalie-render",
        "markup": {
            "allow_raw_html": state.config.markup_allow_raw_html,
            "extensions": state.config.markup_extensions
        }
    }))
}
