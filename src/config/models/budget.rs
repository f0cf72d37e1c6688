//! Usage budget configuration

use crate::core::budget::SubscriptionTier;
use crate::utils::error::{AdmissionError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn default_tiers() -> HashMap<SubscriptionTier, f64> {
    HashMap::from([
        (SubscriptionTier::Free, 0.50),
        (SubscriptionTier::Essential, 5.00),
        (SubscriptionTier::Plus, 20.00),
        (SubscriptionTier::Pro, 100.00),
    ])
}

/// Per-tier monthly budget ceilings (USD)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetConfig {
    /// Ceiling per subscription tier for the current billing period
    #[serde(default = "default_tiers")]
    pub tiers: HashMap<SubscriptionTier, f64>,
    /// Ceiling applied when a tier is missing from the table
    #[serde(default)]
    pub default_limit: f64,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            tiers: default_tiers(),
            default_limit: 0.0,
        }
    }
}

impl BudgetConfig {
    /// Look up the period ceiling for a tier
    pub fn limit_for(&self, tier: SubscriptionTier) -> f64 {
        self.tiers.get(&tier).copied().unwrap_or(self.default_limit)
    }

    /// Validate that no ceiling is negative or non-finite
    pub fn validate(&self) -> Result<()> {
        for (tier, limit) in &self.tiers {
            if !limit.is_finite() || *limit < 0.0 {
                return Err(AdmissionError::Config(format!(
                    "budget tier {:?}: limit must be a non-negative number",
                    tier
                )));
            }
        }
        Ok(())
    }
}
