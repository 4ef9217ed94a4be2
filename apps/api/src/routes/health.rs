use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status plus the size of the loaded catalog.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "readiness-api",
        "catalog_roles": state.catalog.len(),
        "resources": state.resources.len(),
        "matcher": state.matcher.backend()
    }))
}
