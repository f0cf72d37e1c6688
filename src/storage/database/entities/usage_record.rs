use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Usage record database model
///
/// The table is owned by the billing feature that writes it; this gateway
/// reads it and appends on behalf of callers.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "usage_records")]
pub struct Model {
    /// Record ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// User who performed the operation
    #[sea_orm(indexed)]
    pub user_id: Uuid,

    /// Tool that was invoked
    pub tool_name: String,

    /// Estimated cost in USD
    pub cost_estimate: f64,

    /// When the operation completed
    pub created_at: DateTimeWithTimeZone,
}

/// Usage record entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
