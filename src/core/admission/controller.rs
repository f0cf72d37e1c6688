//! Admission controller implementation

use super::types::{AdmissionDecision, AdmissionRequest, DenialReason};
use crate::config::models::rate_limit::RateLimitConfig;
use crate::core::budget::{BudgetEnforcer, BudgetStatus, SubscriptionTier};
use crate::core::rate_limiter::{LimitDecision, RateLimiter};
use crate::utils::error::Result;
use uuid::Uuid;

/// Composes the rate limiter and budget enforcer into one decision
pub struct AdmissionController {
    limiter: RateLimiter,
    limits: RateLimitConfig,
    budget: BudgetEnforcer,
}

impl AdmissionController {
    /// Create a controller
    pub fn new(limiter: RateLimiter, limits: RateLimitConfig, budget: BudgetEnforcer) -> Self {
        Self {
            limiter,
            limits,
            budget,
        }
    }

    /// Rate-limit-only check for an action; used by the HTTP middleware.
    ///
    /// The store key is `action:key`, so the same caller accumulates
    /// independent counters per action category.
    pub fn check_rate(&self, key: &str, action: &str) -> LimitDecision {
        let policy = self.limits.policy_for(action);
        if !self.limits.enabled {
            return LimitDecision::unlimited(policy.max_requests);
        }
        self.limiter.check(&format!("{}:{}", action, key), &policy)
    }

    /// Full admission decision: rate limit first, then budget when the
    /// request carries billing parameters.
    pub async fn admit(&self, request: &AdmissionRequest) -> AdmissionDecision {
        let rate = self.check_rate(&request.key, &request.action);
        if !rate.allowed {
            let mut decision = AdmissionDecision::deny(DenialReason::RateLimited);
            decision.retry_after = rate.retry_after.map(|d| d.as_secs().max(1));
            decision.remaining = Some(0);
            return decision;
        }

        let (user_id, estimated_cost) = match (request.user_id, request.estimated_cost) {
            (Some(user_id), Some(cost)) => (user_id, cost),
            _ => return AdmissionDecision::allow(Some(rate.remaining), None),
        };

        let tier = request.tier.unwrap_or_default();
        let tool = request.tool.as_deref().unwrap_or(&request.action);
        let check = self.budget.check(user_id, tier, tool, estimated_cost).await;

        if check.allowed {
            AdmissionDecision::allow(Some(rate.remaining), check.status)
        } else {
            let reason = if check.degraded {
                DenialReason::UpstreamError
            } else {
                DenialReason::BudgetExceeded
            };
            let mut decision = AdmissionDecision::deny(reason);
            decision.remaining = Some(rate.remaining);
            decision.budget = check.status;
            decision
        }
    }

    /// Budget state for a user; informational, propagates store errors
    pub async fn budget_status(
        &self,
        user_id: Uuid,
        tier: SubscriptionTier,
    ) -> Result<BudgetStatus> {
        self.budget.budget_status(user_id, tier).await
    }
}
