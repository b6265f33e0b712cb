// Prompts for the credit-side LLM calls.

use serde_json::Value;

use crate::credit::explanation::Explanation;

/// Canned explanation returned when the model cannot be reached.
pub const EXPLAIN_FALLBACK: &str = "Your score shows strong payment behaviour but high EMI ratio. \
    Try saving ₹5k more monthly to reduce risk.";

pub fn build_explain_prompt(score_data: &Value) -> String {
    format!(
        "Given this credit score data:\n{score_data}\n\n\
        Explain in plain English:\n\
        1. What this score means,\n\
        2. How to improve it,\n\
        3. Suggest one repayment strategy."
    )
}

pub fn build_chat_analysis_prompt(
    score: u16,
    explanation: &Explanation,
    question: Option<&str>,
) -> String {
    let factors = if explanation.key_factors.is_empty() {
        "none stand out".to_string()
    } else {
        explanation.key_factors.join(", ")
    };
    let question = question
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .unwrap_or("What does my score mean?");

    format!(
        "Credit score: {score} ({category}, risk level {risk:?}).\n\
        Key factors: {factors}.\n\
        Top improvement tip: {tip}.\n\n\
        User question: {question}",
        category = explanation.score_category.label(),
        risk = explanation.risk_level,
        tip = explanation
            .improvement_tips
            .first()
            .map(String::as_str)
            .unwrap_or("keep paying on time"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credit::explanation::explain;
    use crate::credit::profile::ProfileRecord;
    use serde_json::json;

    #[test]
    fn test_explain_prompt_embeds_score_data() {
        let prompt = build_explain_prompt(&json!({ "score": 712 }));
        assert!(prompt.contains("712"));
        assert!(prompt.contains("repayment strategy"));
    }

    #[test]
    fn test_chat_prompt_defaults_blank_question() {
        let e = explain(&ProfileRecord::default(), 690, 0.75);
        let prompt = build_chat_analysis_prompt(690, &e, Some("   "));
        assert!(prompt.contains("User question: What does my score mean?"));
        assert!(prompt.contains("690 (Good, risk level Medium)"));
    }
}
