//! Admission request/decision types
//!
//! The decision JSON is the only wire shape this crate defines; fields are
//! camelCase and `retryAfter` is in seconds.

use crate::core::budget::{BudgetStatus, SubscriptionTier};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Why an admission request was denied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// Too many requests within the active window
    RateLimited,
    /// Period budget ceiling reached for the caller's tier
    BudgetExceeded,
    /// Usage store read failed and the billed path fails closed
    UpstreamError,
}

/// One admission request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionRequest {
    /// Caller identity (e.g. "ip:1.2.3.4" or "user:<uuid>")
    pub key: String,
    /// Action category, resolving a configured limit policy
    pub action: String,
    /// User to charge; together with `estimated_cost` enables the budget check
    #[serde(default)]
    pub user_id: Option<Uuid>,
    /// Subscription tier; defaults to free when omitted
    #[serde(default)]
    pub tier: Option<SubscriptionTier>,
    /// Tool being invoked (logging only)
    #[serde(default)]
    pub tool: Option<String>,
    /// Estimated cost of the operation in USD
    #[serde(default)]
    pub estimated_cost: Option<f64>,
}

impl AdmissionRequest {
    /// Rate-limit-only request (no budget parameters)
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
            user_id: None,
            tier: None,
            tool: None,
            estimated_cost: None,
        }
    }

    /// Attach budget parameters for a billed operation
    pub fn billed(
        mut self,
        user_id: Uuid,
        tier: SubscriptionTier,
        tool: impl Into<String>,
        estimated_cost: f64,
    ) -> Self {
        self.user_id = Some(user_id);
        self.tier = Some(tier);
        self.tool = Some(tool.into());
        self.estimated_cost = Some(estimated_cost);
        self
    }
}

/// Combined admission decision
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionDecision {
    /// Whether the request may proceed
    pub allowed: bool,
    /// Structured denial reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<DenialReason>,
    /// Seconds until the rate-limit window rolls (denials only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
    /// Requests remaining in the active window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<u32>,
    /// Budget state, when a budget check ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetStatus>,
}

impl AdmissionDecision {
    /// An allowed decision
    pub fn allow(remaining: Option<u32>, budget: Option<BudgetStatus>) -> Self {
        Self {
            allowed: true,
            reason: None,
            retry_after: None,
            remaining,
            budget,
        }
    }

    /// A denied decision
    pub fn deny(reason: DenialReason) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
            retry_after: None,
            remaining: None,
            budget: None,
        }
    }
}
