//! Insurance advisor chat: one LLM turn over the user's AA data, with a
//! templated analysis when the model is unreachable.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::insurance::models::{ChatMessage, UserInsuranceRecord};
use crate::insurance::prompts::{build_advisor_prompt, ADVISOR_SYSTEM};
use crate::insurance::recommendations::{build_recommendations, render_recommendations};
use crate::insurance::repository::InsuranceDirectory;
use crate::llm_client::TextCompletion;

pub const UNKNOWN_USER_REPLY: &str = "Cannot find AA data for this user.";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub user_id: String,
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub history: Vec<ChatMessage>,
}

/// Runs a single chat turn. An unknown user gets a fixed reply and the
/// history back unchanged.
pub async fn run_chat(
    llm: &dyn TextCompletion,
    directory: &dyn InsuranceDirectory,
    request: ChatRequest,
) -> Result<ChatResponse, AppError> {
    let ChatRequest {
        user_id,
        message,
        mut history,
    } = request;

    let Some(record) = directory.fetch(&user_id)? else {
        info!(%user_id, "chat requested for unknown user");
        return Ok(ChatResponse {
            reply: UNKNOWN_USER_REPLY.to_string(),
            history,
        });
    };

    let recs = build_recommendations(&record);
    let rec_text = render_recommendations(&recs);
    let prompt = build_advisor_prompt(&record, &rec_text, &history, &message);

    let reply = match llm.complete(ADVISOR_SYSTEM, &prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!(%user_id, "LLM unavailable for insurance chat, using basic analysis: {e}");
            fallback_reply(&record, &rec_text)
        }
    };

    history.push(ChatMessage::user(&message));
    history.push(ChatMessage::assistant(&reply));

    Ok(ChatResponse { reply, history })
}

fn fallback_reply(record: &UserInsuranceRecord, rec_text: &str) -> String {
    let recommendations = if rec_text.is_empty() {
        "Your current insurance coverage looks good!"
    } else {
        rec_text
    };
    format!(
        "I'm currently unable to provide AI-powered responses. Here's a basic analysis:\n\n\
        Age: {}, Income: ₹{}\n\
        Existing policies: {}\n\n\
        {recommendations}",
        record.profile.age,
        group_thousands(record.profile.income),
        record.existing_policy_summary(),
    )
}

/// 600000 → "600,000".
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
