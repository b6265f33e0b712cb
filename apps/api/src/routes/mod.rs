pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::credit::handlers as credit;
use crate::insurance::handlers as insurance;
use crate::planner;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Credit Agent
        .route("/api/credit/analyze", post(credit::handle_analyze))
        .route("/api/credit/predict", post(credit::handle_predict))
        .route(
            "/api/credit/chat-analysis",
            post(credit::handle_chat_analysis),
        )
        // Explain Agent
        .route("/api/explain/score", post(credit::handle_explain_score))
        // Insurance Agent
        .route("/api/insurance/chat", post(insurance::handle_chat))
        .route(
            "/api/insurance/user/:user_id",
            get(insurance::handle_get_user),
        )
        .route("/api/insurance/advice", get(insurance::handle_advice))
        .route(
            "/api/insurance/add-policy",
            post(insurance::handle_add_policy),
        )
        .route(
            "/api/insurance/policies/types",
            get(insurance::handle_policy_types),
        )
        // Planner Agent
        .route("/api/planner/create", post(planner::handle_create_plan))
        .with_state(state)
}
