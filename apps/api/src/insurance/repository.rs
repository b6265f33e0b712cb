use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::{json, Map, Value};

use crate::insurance::models::{InsurancePolicy, InsuranceProfile, UserInsuranceRecord};

/// Storage abstraction over the account-aggregator directory so handlers and
/// tests can work against isolated instances.
pub trait InsuranceDirectory: Send + Sync {
    fn fetch(&self, user_id: &str) -> Result<Option<UserInsuranceRecord>, DirectoryError>;

    /// Appends a policy to an existing user. Never creates users.
    fn append_policy(&self, user_id: &str, policy: InsurancePolicy) -> Result<(), DirectoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("user {0} not found")]
    NotFound(String),
    #[error("directory unavailable: {0}")]
    Unavailable(String),
}

#[derive(Default, Clone)]
pub struct InMemoryInsuranceDirectory {
    records: Arc<RwLock<HashMap<String, UserInsuranceRecord>>>,
}

impl InMemoryInsuranceDirectory {
    pub fn with_records(records: impl IntoIterator<Item = UserInsuranceRecord>) -> Self {
        let map = records
            .into_iter()
            .map(|r| (r.user_id.clone(), r))
            .collect();
        Self {
            records: Arc::new(RwLock::new(map)),
        }
    }

    /// Directory holding the demo user `user1`.
    pub fn seeded() -> Self {
        Self::with_records([demo_user()])
    }
}

impl InsuranceDirectory for InMemoryInsuranceDirectory {
    fn fetch(&self, user_id: &str) -> Result<Option<UserInsuranceRecord>, DirectoryError> {
        let guard = self
            .records
            .read()
            .map_err(|_| DirectoryError::Unavailable("directory lock poisoned".to_string()))?;
        Ok(guard.get(user_id).cloned())
    }

    fn append_policy(&self, user_id: &str, policy: InsurancePolicy) -> Result<(), DirectoryError> {
        let mut guard = self
            .records
            .write()
            .map_err(|_| DirectoryError::Unavailable("directory lock poisoned".to_string()))?;
        let record = guard
            .get_mut(user_id)
            .ok_or_else(|| DirectoryError::NotFound(user_id.to_string()))?;
        record.insurances.push(policy);
        Ok(())
    }
}

fn demo_user() -> UserInsuranceRecord {
    let savings: Map<String, Value> = Map::from_iter([
        ("type".to_string(), json!("savings")),
        ("balance".to_string(), json!(80_000)),
    ]);

    UserInsuranceRecord {
        user_id: "user1".to_string(),
        profile: InsuranceProfile {
            age: 23,
            dependents: 0,
            income: 600_000,
            city: "mumbai".to_string(),
        },
        insurances: vec![
            InsurancePolicy {
                policy_type: "health".to_string(),
                coverage: 300_000,
                premium: 12_000,
                provider: "care health".to_string(),
            },
            InsurancePolicy {
                policy_type: "life".to_string(),
                coverage: 5_000_000,
                premium: 9_000,
                provider: "lic".to_string(),
            },
        ],
        accounts: vec![savings],
    }
}
