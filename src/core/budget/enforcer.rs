//! Budget enforcement against tier ceilings

use super::store::UsageStore;
use super::types::{BudgetCheck, BudgetStatus, FailurePolicy, SubscriptionTier};
use crate::config::models::budget::BudgetConfig;
use crate::utils::error::Result;
use chrono::{DateTime, Datelike, Utc};
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// Start of the billing period containing `now` (calendar month, UTC)
pub fn period_start(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive()
        .with_day(1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
        .unwrap_or(now)
}

/// Enforces a monetary ceiling per user per billing period
pub struct BudgetEnforcer {
    store: Arc<dyn UsageStore>,
    tiers: BudgetConfig,
    failure_policy: FailurePolicy,
}

impl BudgetEnforcer {
    /// Create an enforcer over the given usage store.
    ///
    /// The failure policy is fixed at construction: one policy per operation
    /// class, not per call site.
    pub fn new(store: Arc<dyn UsageStore>, tiers: BudgetConfig, failure_policy: FailurePolicy) -> Self {
        Self {
            store,
            tiers,
            failure_policy,
        }
    }

    /// Current budget state for a user.
    ///
    /// Propagates store errors; callers on informational paths decide how to
    /// degrade.
    pub async fn budget_status(
        &self,
        user_id: Uuid,
        tier: SubscriptionTier,
    ) -> Result<BudgetStatus> {
        let since = period_start(Utc::now());
        let total = self.store.period_cost(user_id, since).await?;
        Ok(self.status_from_total(total, tier))
    }

    /// Check whether a billed operation with the given estimated cost fits
    /// under the user's ceiling.
    ///
    /// Applies the configured failure policy when the store read fails; a
    /// degraded denial surfaces as `upstream_error`, not `budget_exceeded`.
    pub async fn check(
        &self,
        user_id: Uuid,
        tier: SubscriptionTier,
        tool: &str,
        estimated_cost: f64,
    ) -> BudgetCheck {
        match self.budget_status(user_id, tier).await {
            Ok(status) => {
                let allowed =
                    status.period_cost_total + estimated_cost <= status.period_limit;
                if !allowed {
                    debug!(
                        "Budget exceeded for {} on {}: {:.4} + {:.4} > {:.2}",
                        user_id,
                        tool,
                        status.period_cost_total,
                        estimated_cost,
                        status.period_limit
                    );
                }
                BudgetCheck {
                    allowed,
                    degraded: false,
                    status: Some(status),
                }
            }
            Err(e) => {
                warn!("Usage store read failed for {}: {}", user_id, e);
                BudgetCheck {
                    allowed: self.failure_policy == FailurePolicy::FailOpen,
                    degraded: true,
                    status: None,
                }
            }
        }
    }

    fn status_from_total(&self, total: f64, tier: SubscriptionTier) -> BudgetStatus {
        let limit = self.tiers.limit_for(tier);
        let percent_used = if limit > 0.0 {
            (total / limit) * 100.0
        } else {
            100.0
        };
        BudgetStatus {
            period_cost_total: total,
            period_limit: limit,
            percent_used,
            allowed: total < limit,
        }
    }
}
