use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Welcome to GenFi Credit Agent API" }))
}

/// GET /health
/// Returns a simple status object with service version and environment.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "genfi-api",
        "environment": state.config.environment
    }))
}
