//! Rate limiting configuration

use crate::utils::error::{AdmissionError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

fn default_max_requests() -> u32 {
    60
}

fn default_window_ms() -> u64 {
    60_000
}

fn default_enabled() -> bool {
    true
}

fn default_sweep_interval_secs() -> u64 {
    300
}

/// A single rate-limit policy: at most `max_requests` per fixed window.
///
/// Immutable once loaded; one policy per action category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitPolicy {
    /// Action category this policy applies to (filled from the config key)
    #[serde(default)]
    pub action: String,
    /// Maximum requests allowed within one window
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,
    /// Window duration in milliseconds
    #[serde(default = "default_window_ms")]
    pub window_ms: u64,
}

impl LimitPolicy {
    /// Create a policy for the given action
    pub fn new(action: impl Into<String>, max_requests: u32, window_ms: u64) -> Self {
        Self {
            action: action.into(),
            max_requests,
            window_ms,
        }
    }

    /// Window duration
    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }
}

impl Default for LimitPolicy {
    fn default() -> Self {
        Self {
            action: String::new(),
            max_requests: default_max_requests(),
            window_ms: default_window_ms(),
        }
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Interval between idle-entry sweeps of the counter store (seconds)
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
    /// Per-action policies, keyed by action name
    #[serde(default)]
    pub actions: HashMap<String, LimitPolicy>,
    /// Fallback policy for actions without an explicit entry
    #[serde(default, rename = "default")]
    pub default_policy: LimitPolicy,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            sweep_interval_secs: default_sweep_interval_secs(),
            actions: HashMap::new(),
            default_policy: LimitPolicy::default(),
        }
    }
}

impl RateLimitConfig {
    /// Resolve the policy for an action, falling back to the default
    pub fn policy_for(&self, action: &str) -> LimitPolicy {
        let mut policy = self
            .actions
            .get(action)
            .cloned()
            .unwrap_or_else(|| self.default_policy.clone());
        if policy.action.is_empty() {
            policy.action = action.to_string();
        }
        policy
    }

    /// Longest configured window; drives counter-store retention
    pub fn max_window(&self) -> Duration {
        let longest = self
            .actions
            .values()
            .map(|p| p.window_ms)
            .chain(std::iter::once(self.default_policy.window_ms))
            .max()
            .unwrap_or(default_window_ms());
        Duration::from_millis(longest)
    }

    /// Validate all policies
    pub fn validate(&self) -> Result<()> {
        for (action, policy) in self
            .actions
            .iter()
            .chain(std::iter::once((&String::new(), &self.default_policy)))
        {
            if policy.max_requests == 0 {
                return Err(AdmissionError::Config(format!(
                    "rate_limit policy '{}': max_requests must be > 0",
                    action
                )));
            }
            if policy.window_ms == 0 {
                return Err(AdmissionError::Config(format!(
                    "rate_limit policy '{}': window_ms must be > 0",
                    action
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_policy_defaults() {
        let policy: LimitPolicy = serde_yaml::from_str("{}").unwrap();
        assert_eq!(policy.max_requests, 60);
        assert_eq!(policy.window_ms, 60_000);
        assert_eq!(policy.window(), Duration::from_secs(60));
    }

    #[test]
    fn test_policy_for_named_action() {
        let mut config = RateLimitConfig::default();
        config
            .actions
            .insert("ai_chat".to_string(), LimitPolicy::new("", 20, 60_000));

        let policy = config.policy_for("ai_chat");
        assert_eq!(policy.max_requests, 20);
        assert_eq!(policy.action, "ai_chat");
    }

    #[test]
    fn test_policy_for_falls_back_to_default() {
        let config = RateLimitConfig::default();
        let policy = config.policy_for("never_configured");
        assert_eq!(policy.max_requests, 60);
        assert_eq!(policy.action, "never_configured");
    }

    #[test]
    fn test_max_window_picks_longest() {
        let mut config = RateLimitConfig::default();
        config
            .actions
            .insert("auth".to_string(), LimitPolicy::new("auth", 10, 300_000));
        assert_eq!(config.max_window(), Duration::from_millis(300_000));
    }

    #[test]
    fn test_validate_rejects_zero_max_requests() {
        let mut config = RateLimitConfig::default();
        config
            .actions
            .insert("bad".to_string(), LimitPolicy::new("bad", 0, 1000));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_deserialization() {
        let yaml = r#"
enabled: true
actions:
  parcel_lookup:
    max_requests: 30
    window_ms: 60000
default:
  max_requests: 100
  window_ms: 60000
"#;
        let config: RateLimitConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.enabled);
        assert_eq!(config.policy_for("parcel_lookup").max_requests, 30);
        assert_eq!(config.default_policy.max_requests, 100);
    }
}
