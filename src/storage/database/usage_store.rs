//! sea-orm implementation of the usage store

use super::entities::usage_record;
use crate::core::budget::{UsageRecord, UsageStore};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait, QueryFilter,
    QuerySelect, Set,
};
use tracing::info;
use uuid::Uuid;

/// Usage store backed by the managed database
#[derive(Clone)]
pub struct DatabaseUsageStore {
    db: DatabaseConnection,
}

impl DatabaseUsageStore {
    /// Wrap an existing connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Connect to the database at `url`
    pub async fn connect(url: &str) -> Result<Self> {
        info!("Connecting usage store");
        let db = Database::connect(url).await?;
        Ok(Self::new(db))
    }
}

#[async_trait]
impl UsageStore for DatabaseUsageStore {
    async fn period_cost(&self, user_id: Uuid, since: DateTime<Utc>) -> Result<f64> {
        let costs: Vec<f64> = usage_record::Entity::find()
            .filter(usage_record::Column::UserId.eq(user_id))
            .filter(usage_record::Column::CreatedAt.gte(since))
            .select_only()
            .column(usage_record::Column::CostEstimate)
            .into_tuple()
            .all(&self.db)
            .await?;
        Ok(costs.into_iter().sum())
    }

    async fn record_usage(&self, record: UsageRecord) -> Result<()> {
        let model = usage_record::ActiveModel {
            id: Set(record.id),
            user_id: Set(record.user_id),
            tool_name: Set(record.tool_name),
            cost_estimate: Set(record.cost_estimate),
            created_at: Set(record.created_at.into()),
        };
        model.insert(&self.db).await?;
        Ok(())
    }
}
