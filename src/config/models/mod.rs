//! Configuration model definitions

pub mod budget;
pub mod rate_limit;
pub mod server;

pub use budget::BudgetConfig;
pub use rate_limit::{LimitPolicy, RateLimitConfig};
pub use server::{DatabaseConfig, ServerConfig};

use serde::{Deserialize, Serialize};

/// Top-level gateway configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Usage store database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    /// Usage budget configuration
    #[serde(default)]
    pub budget: BudgetConfig,
}
