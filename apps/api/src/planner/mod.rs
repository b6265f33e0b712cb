//! Goal planner. Accepts any goal map and returns an empty plan; planning
//! logic is not part of this service yet.

use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

#[derive(Debug, Serialize)]
pub struct CreatePlanResponse {
    pub message: &'static str,
    pub plan: Map<String, Value>,
}

/// POST /api/planner/create
pub async fn handle_create_plan(Json(goal): Json<Map<String, Value>>) -> Json<CreatePlanResponse> {
    debug!(keys = goal.len(), "planner goal received");
    Json(CreatePlanResponse {
        message: "Plan created successfully",
        plan: Map::new(),
    })
}
