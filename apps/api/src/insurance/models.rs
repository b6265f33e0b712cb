use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsurancePolicy {
    /// Free text, matched case-insensitively.
    #[serde(rename = "type")]
    pub policy_type: String,
    pub coverage: u64,
    pub premium: u64,
    pub provider: String,
}

impl InsurancePolicy {
    pub fn is_type(&self, policy_type: &str) -> bool {
        self.policy_type.eq_ignore_ascii_case(policy_type)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceProfile {
    pub age: u32,
    pub dependents: u32,
    pub income: u64,
    pub city: String,
}

/// Account-aggregator bundle for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInsuranceRecord {
    pub user_id: String,
    pub profile: InsuranceProfile,
    pub insurances: Vec<InsurancePolicy>,
    #[serde(default)]
    pub accounts: Vec<Map<String, Value>>,
}

impl UserInsuranceRecord {
    pub fn find_policy(&self, policy_type: &str) -> Option<&InsurancePolicy> {
        self.insurances.iter().find(|p| p.is_type(policy_type))
    }

    /// Comma-separated policy types, or "None".
    pub fn existing_policy_summary(&self) -> String {
        if self.insurances.is_empty() {
            return "None".to_string();
        }
        self.insurances
            .iter()
            .map(|p| p.policy_type.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub policy_type: String,
    pub priority: Priority,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }

    pub fn assistant(content: &str) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PolicyTypeInfo {
    #[serde(rename = "type")]
    pub policy_type: &'static str,
    pub description: &'static str,
}

pub static POLICY_TYPES: [PolicyTypeInfo; 5] = [
    PolicyTypeInfo {
        policy_type: "health",
        description: "Medical and health insurance",
    },
    PolicyTypeInfo {
        policy_type: "life",
        description: "Term and life insurance",
    },
    PolicyTypeInfo {
        policy_type: "vehicle",
        description: "Car and bike insurance",
    },
    PolicyTypeInfo {
        policy_type: "home",
        description: "Home and property insurance",
    },
    PolicyTypeInfo {
        policy_type: "travel",
        description: "Travel insurance",
    },
];
