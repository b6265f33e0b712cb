// Prompts for the insurance advisor chat.

use crate::insurance::models::{ChatMessage, UserInsuranceRecord};

pub const ADVISOR_SYSTEM: &str = "You are GenFi's Insurance Advisor AI. \
    Use simple language. Be smart, friendly, and helpful. \
    Give short, helpful answers.";

/// Profile block, recommendations, transcript, then the new user turn.
pub fn build_advisor_prompt(
    record: &UserInsuranceRecord,
    rec_text: &str,
    history: &[ChatMessage],
    message: &str,
) -> String {
    let profile = &record.profile;
    let mut prompt = format!(
        "AA Profile:\n\
        - Age: {}\n\
        - Income: {}\n\
        - Dependents: {}\n\
        - Existing Insurance: {}\n\n\
        Recommendations:\n{}\n\n\
        Conversation:\n",
        profile.age,
        profile.income,
        profile.dependents,
        record.existing_policy_summary(),
        if rec_text.is_empty() { "None" } else { rec_text },
    );

    for turn in history {
        prompt.push_str(&format!("{}: {}\n", capitalize(&turn.role), turn.content));
    }
    prompt.push_str(&format!("User: {message}\nAI:"));
    prompt
}

fn capitalize(role: &str) -> String {
    let mut chars = role.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
