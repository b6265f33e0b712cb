//! Axum route handlers for the Insurance Agent API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{AppError, JsonBody};
use crate::insurance::chat::{run_chat, ChatRequest, ChatResponse};
use crate::insurance::models::{
    InsurancePolicy, InsuranceProfile, PolicyTypeInfo, Recommendation, UserInsuranceRecord,
    POLICY_TYPES,
};
use crate::insurance::recommendations::build_recommendations;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    pub user_id: String,
    pub existing_policies: Vec<InsurancePolicy>,
    pub recommendations: Vec<Recommendation>,
    pub profile: InsuranceProfile,
}

#[derive(Debug, Serialize)]
pub struct AddPolicyResponse {
    pub message: &'static str,
    pub policy: InsurancePolicy,
}

#[derive(Debug, Serialize)]
pub struct PolicyTypesResponse {
    pub policy_types: &'static [PolicyTypeInfo],
}

/// POST /api/insurance/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let response = run_chat(state.llm.as_ref(), state.directory.as_ref(), req).await?;
    Ok(Json(response))
}

/// GET /api/insurance/user/:user_id
pub async fn handle_get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserInsuranceRecord>, AppError> {
    let record = state
        .directory
        .fetch(&user_id)?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(Json(record))
}

/// GET /api/insurance/advice?user_id=
pub async fn handle_advice(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<AdviceResponse>, AppError> {
    let record = state
        .directory
        .fetch(&params.user_id)?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let recommendations = build_recommendations(&record);

    Ok(Json(AdviceResponse {
        user_id: record.user_id,
        existing_policies: record.insurances,
        recommendations,
        profile: record.profile,
    }))
}

/// POST /api/insurance/add-policy?user_id=
///
/// Append-only; unknown users are rejected with 404 before the body is validated.
pub async fn handle_add_policy(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    JsonBody(policy): JsonBody<InsurancePolicy>,
) -> Result<Json<AddPolicyResponse>, AppError> {
    if state.directory.fetch(&params.user_id)?.is_none() {
        return Err(AppError::NotFound("User not found".to_string()));
    }
    if policy.policy_type.trim().is_empty() {
        return Err(AppError::Validation("type cannot be empty".to_string()));
    }

    state
        .directory
        .append_policy(&params.user_id, policy.clone())?;

    info!(user_id = %params.user_id, policy_type = %policy.policy_type, "policy added");

    Ok(Json(AddPolicyResponse {
        message: "Policy added successfully",
        policy,
    }))
}

/// GET /api/insurance/policies/types
pub async fn handle_policy_types() -> Json<PolicyTypesResponse> {
    Json(PolicyTypesResponse {
        policy_types: &POLICY_TYPES,
    })
}
