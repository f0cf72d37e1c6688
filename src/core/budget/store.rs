//! Usage store abstraction
//!
//! Production uses the sea-orm backed store in `crate::storage`; the
//! in-memory store here serves tests and database-less deployments.

use super::types::UsageRecord;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use uuid::Uuid;

/// Read/write access to the usage-record log
#[async_trait]
pub trait UsageStore: Send + Sync {
    /// Sum of `cost_estimate` for a user's records at or after `since`
    async fn period_cost(&self, user_id: Uuid, since: DateTime<Utc>) -> Result<f64>;

    /// Append one record after a billed operation completes
    async fn record_usage(&self, record: UsageRecord) -> Result<()>;
}

/// In-memory usage store; contents are lost on restart
#[derive(Debug, Default)]
pub struct MemoryUsageStore {
    records: RwLock<Vec<UsageRecord>>,
}

impl MemoryUsageStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl UsageStore for MemoryUsageStore {
    async fn period_cost(&self, user_id: Uuid, since: DateTime<Utc>) -> Result<f64> {
        let records = self.records.read();
        Ok(records
            .iter()
            .filter(|r| r.user_id == user_id && r.created_at >= since)
            .map(|r| r.cost_estimate)
            .sum())
    }

    async fn record_usage(&self, record: UsageRecord) -> Result<()> {
        self.records.write().push(record);
        Ok(())
    }
}
