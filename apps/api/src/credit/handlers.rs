//! Axum route handlers for the Credit and Explain APIs.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::credit::conversation::assemble_conversation_response;
use crate::credit::explanation::{explain, Explanation, RiskLevel, ScoreCategory};
use crate::credit::plan::{generate_plan, RepaymentPlan};
use crate::credit::profile::CreditProfile;
use crate::credit::prompts::{build_chat_analysis_prompt, build_explain_prompt, EXPLAIN_FALLBACK};
use crate::errors::{AppError, JsonBody};
use crate::llm_client::prompts::{BREVITY_INSTRUCTION, MENTOR_SYSTEM};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub score: u16,
    pub breakdown: BTreeMap<String, String>,
    pub plan: RepaymentPlan,
}

#[derive(Debug, Serialize)]
pub struct Prediction {
    pub score: u16,
    pub confidence: f64,
    pub explanation: Explanation,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: Prediction,
    pub repayment_plan: RepaymentPlan,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ChatAnalysisRequest {
    #[serde(flatten)]
    pub profile: CreditProfile,
    #[serde(default)]
    pub question: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatAnalysisResponse {
    pub score: u16,
    pub category: ScoreCategory,
    pub confidence: f64,
    pub risk_level: RiskLevel,
    pub key_insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub conversation_response: String,
}

#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    pub explanation: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/credit/analyze
///
/// Accepts a free-form profile map; unknown keys are ignored.
pub async fn handle_analyze(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Map<String, Value>>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let profile = CreditProfile::from_map(&body)?.normalize()?;
    let result = state.score_source.score(&profile);
    let plan = generate_plan(&profile, result.score);

    info!(score = result.score, "credit analysis complete");

    Ok(Json(AnalyzeResponse {
        score: result.score,
        breakdown: result.breakdown(),
        plan,
    }))
}

/// POST /api/credit/predict
///
/// Score, explanation and repayment plan for a typed profile.
pub async fn handle_predict(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreditProfile>,
) -> Result<Json<PredictResponse>, AppError> {
    let profile = request.normalize()?;
    let result = state.score_source.score(&profile);
    let explanation = explain(&profile, result.score, result.confidence);
    let repayment_plan = generate_plan(&profile, result.score);

    info!(
        score = result.score,
        source = ?result.source,
        "credit prediction complete"
    );

    Ok(Json(PredictResponse {
        prediction: Prediction {
            score: result.score,
            confidence: result.confidence,
            explanation,
        },
        repayment_plan,
        generated_at: Utc::now(),
    }))
}

/// POST /api/credit/chat-analysis
///
/// Score plus a conversational answer. The answer comes from the LLM when it
/// is reachable and from the local template otherwise.
pub async fn handle_chat_analysis(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ChatAnalysisRequest>,
) -> Result<Json<ChatAnalysisResponse>, AppError> {
    let profile = request.profile.normalize()?;
    let question = request.question.as_deref();
    let result = state.score_source.score(&profile);
    let explanation = explain(&profile, result.score, result.confidence);

    let system = format!("{MENTOR_SYSTEM}\n{BREVITY_INSTRUCTION}");
    let prompt = build_chat_analysis_prompt(result.score, &explanation, question);
    let conversation_response = match state.llm.complete(&system, &prompt).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!("LLM unavailable for chat analysis, using template: {e}");
            assemble_conversation_response(result.score, &explanation, question)
        }
    };

    Ok(Json(ChatAnalysisResponse {
        score: result.score,
        category: explanation.score_category,
        confidence: explanation.confidence,
        risk_level: explanation.risk_level,
        key_insights: explanation.key_factors,
        recommendations: explanation.improvement_tips,
        conversation_response,
    }))
}

/// POST /api/explain/score
///
/// Plain-English explanation of arbitrary score data.
pub async fn handle_explain_score(
    State(state): State<AppState>,
    JsonBody(score_data): JsonBody<Value>,
) -> Result<Json<ExplainResponse>, AppError> {
    let prompt = build_explain_prompt(&score_data);
    let explanation = match state.llm.complete(MENTOR_SYSTEM, &prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!("LLM unavailable for score explanation, using fallback: {e}");
            EXPLAIN_FALLBACK.to_string()
        }
    };

    Ok(Json(ExplainResponse { explanation }))
}
