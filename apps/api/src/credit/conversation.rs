//! Templated conversational reply, used whenever the generative-AI service
//! cannot answer.

use crate::credit::explanation::Explanation;

const IMPROVE_FOLLOW_UP: &str = "To improve faster, keep your credit utilization under 30% \
    and set up automatic payments so no due date is missed.";

const LOAN_FOLLOW_UP: &str = "Before applying for a loan, aim to keep your total monthly EMIs \
    under 40% of your income, since lenders weigh that ratio heavily.";

pub fn assemble_conversation_response(
    score: u16,
    explanation: &Explanation,
    question: Option<&str>,
) -> String {
    let mut sentences = vec![
        format!(
            "Your credit score is {score}, which falls in the {} range.",
            explanation.score_category.label()
        ),
        tier_sentence(score).to_string(),
    ];

    if !explanation.key_factors.is_empty() {
        sentences.push(format!(
            "The main factors behind it: {}.",
            lowercase_join(&explanation.key_factors)
        ));
    }

    if let Some(tip) = explanation.improvement_tips.first() {
        sentences.push(format!("A good next step: {}.", lowercase_first(tip)));
    }

    let question = question.unwrap_or_default().to_lowercase();
    if question.contains("improve") {
        sentences.push(IMPROVE_FOLLOW_UP.to_string());
    }
    if question.contains("loan") {
        sentences.push(LOAN_FOLLOW_UP.to_string());
    }

    sentences.join(" ")
}

fn tier_sentence(score: u16) -> &'static str {
    if score >= 750 {
        "That is a strong position, and most lenders will offer you their better terms."
    } else if score >= 650 {
        "You are on solid ground, with clear room to move into the top tier."
    } else {
        "There is work to do, but steady habits can lift your score within a few months."
    }
}

fn lowercase_join(items: &[String]) -> String {
    items
        .iter()
        .map(|s| lowercase_first(s))
        .collect::<Vec<_>>()
        .join("; ")
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credit::explanation::explain;
    use crate::credit::profile::ProfileRecord;

    fn explanation_for(score: u16, profile: &ProfileRecord) -> Explanation {
        explain(profile, score, 0.75)
    }

    #[test]
    fn test_states_score_and_category() {
        let e = explanation_for(790, &ProfileRecord::default());
        let reply = assemble_conversation_response(790, &e, None);
        assert!(reply.starts_with("Your credit score is 790, which falls in the Very Good range."));
        assert!(reply.contains("strong position"));
    }

    #[test]
    fn test_empty_key_factors_still_valid_prose() {
        let profile = ProfileRecord {
            monthly_income: 50_000.0,
            total_debt: 20_000.0,
            credit_utilization: 30.0,
            ..Default::default()
        };
        let e = explanation_for(690, &profile);
        assert!(e.key_factors.is_empty());

        let reply = assemble_conversation_response(690, &e, Some(""));
        assert!(!reply.contains("main factors"));
        assert!(reply.contains("A good next step: continue maintaining good payment habits."));
        assert!(reply.ends_with('.'));
    }

    #[test]
    fn test_lists_key_factors_when_present() {
        let profile = ProfileRecord {
            monthly_income: 120_000.0,
            credit_utilization: 5.0,
            ..Default::default()
        };
        let e = explanation_for(790, &profile);
        let reply = assemble_conversation_response(790, &e, None);
        assert!(reply.contains("The main factors behind it: strong income level;"));
    }

    #[test]
    fn test_loan_question_gets_follow_up_in_every_band() {
        for score in [400, 700, 800] {
            let e = explanation_for(score, &ProfileRecord::default());
            let reply = assemble_conversation_response(score, &e, Some("Can I get a LOAN?"));
            assert!(reply.contains(LOAN_FOLLOW_UP), "score {score}");
        }
    }

    #[test]
    fn test_improve_and_loan_both_apply() {
        let e = explanation_for(600, &ProfileRecord::default());
        let reply =
            assemble_conversation_response(600, &e, Some("How do I improve before my loan?"));
        assert!(reply.contains(IMPROVE_FOLLOW_UP));
        assert!(reply.contains(LOAN_FOLLOW_UP));
        assert!(reply.contains("work to do"));
    }

    #[test]
    fn test_unrelated_question_adds_no_follow_up() {
        let e = explanation_for(700, &ProfileRecord::default());
        let reply = assemble_conversation_response(700, &e, Some("What is my score?"));
        assert!(!reply.contains(IMPROVE_FOLLOW_UP));
        assert!(!reply.contains(LOAN_FOLLOW_UP));
    }
}
