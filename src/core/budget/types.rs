//! Budget types and data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ClaimGuardian subscription tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    /// Free tier
    #[default]
    Free,
    /// Essential plan
    Essential,
    /// Plus plan
    Plus,
    /// Pro plan
    Pro,
}

/// Derived budget state for one user; never stored
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    /// Summed estimated cost for the current period (USD)
    pub period_cost_total: f64,
    /// Tier ceiling for the period (USD)
    pub period_limit: f64,
    /// Share of the ceiling already consumed, in percent
    pub percent_used: f64,
    /// Whether the user is still under the ceiling
    pub allowed: bool,
}

/// One billed operation, as recorded by the calling feature
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRecord {
    /// Record ID
    pub id: Uuid,
    /// User who performed the operation
    pub user_id: Uuid,
    /// Tool that was invoked (e.g. "ai_chat")
    pub tool_name: String,
    /// Estimated cost in USD
    pub cost_estimate: f64,
    /// When the operation completed
    pub created_at: DateTime<Utc>,
}

impl UsageRecord {
    /// Create a record stamped with the current time
    pub fn new(user_id: Uuid, tool_name: impl Into<String>, cost_estimate: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            tool_name: tool_name.into(),
            cost_estimate,
            created_at: Utc::now(),
        }
    }
}

/// What a budget check does when the usage store read fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Treat the operation as allowed (informational checks)
    FailOpen,
    /// Treat the operation as denied (billed/metered operations)
    FailClosed,
}

/// Outcome of a budget check
#[derive(Debug, Clone)]
pub struct BudgetCheck {
    /// Whether the operation may proceed
    pub allowed: bool,
    /// True when the store read failed and the failure policy decided
    pub degraded: bool,
    /// Budget state at decision time; absent when degraded
    pub status: Option<BudgetStatus>,
}
