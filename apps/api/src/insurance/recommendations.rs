//! Coverage-gap recommendations over a user's existing policies.
//!
//! Rules are evaluated in order and are not mutually exclusive. Only health
//! and dependents-driven life gaps are checked.

use crate::insurance::models::{Priority, Recommendation, UserInsuranceRecord};

const HEALTH_REASON: &str = "A basic health plan protects against unexpected medical expenses.";

pub fn build_recommendations(record: &UserInsuranceRecord) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if record.find_policy("health").is_none() {
        recs.push(Recommendation {
            policy_type: "health".to_string(),
            priority: Priority::High,
            reason: HEALTH_REASON.to_string(),
        });
    }

    let dependents = record.profile.dependents;
    if dependents > 0 {
        recs.push(Recommendation {
            policy_type: "life".to_string(),
            priority: Priority::High,
            reason: format!("You have {dependents} dependents. Term insurance is recommended."),
        });
    }

    recs
}

/// One `- type (priority): reason` line per recommendation.
pub fn render_recommendations(recs: &[Recommendation]) -> String {
    recs.iter()
        .map(|r| format!("- {} ({}): {}", r.policy_type, r.priority.as_str(), r.reason))
        .collect::<Vec<_>>()
        .join("\n")
}
