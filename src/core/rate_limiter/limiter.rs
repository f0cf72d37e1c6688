//! Limit policy evaluator

use super::store::{CounterStore, MemoryCounterStore};
use super::types::LimitDecision;
use crate::config::models::rate_limit::LimitPolicy;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Turns per-key counters into allow/deny decisions
pub struct RateLimiter {
    store: Arc<dyn CounterStore>,
}

impl RateLimiter {
    /// Create a rate limiter over the given counter store
    pub fn new(store: Arc<dyn CounterStore>) -> Self {
        Self { store }
    }

    /// Create a rate limiter backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryCounterStore::new()))
    }

    /// Handle to the backing store (for sweeping and inspection)
    pub fn store(&self) -> Arc<dyn CounterStore> {
        Arc::clone(&self.store)
    }

    /// Evaluate a request against the policy.
    ///
    /// The increment always happens, even for a request that ends up denied,
    /// so the count keeps climbing past the limit until the window rolls.
    pub fn check(&self, key: &str, policy: &LimitPolicy) -> LimitDecision {
        let window = policy.window();
        let state = self.store.increment(key, window);

        let allowed = state.count <= policy.max_requests;
        let remaining = policy.max_requests.saturating_sub(state.count);

        let retry_after = if allowed {
            None
        } else {
            // Post-increment, elapsed is always < window, so this is
            // positive; the floor guards the race between the store's clock
            // read and ours.
            let elapsed = state.window_start.elapsed();
            Some(
                window
                    .saturating_sub(elapsed)
                    .max(Duration::from_millis(1)),
            )
        };

        if !allowed {
            debug!(
                "Rate limit exceeded for {}: {}/{} requests",
                key, state.count, policy.max_requests
            );
        }

        LimitDecision {
            allowed,
            count: state.count,
            limit: policy.max_requests,
            remaining,
            retry_after,
        }
    }
}

impl Clone for RateLimiter {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}
