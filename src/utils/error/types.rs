//! Error types for the admission gateway

use thiserror::Error;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, AdmissionError>;

/// Main error type for the admission gateway
#[derive(Error, Debug)]
pub enum AdmissionError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Rate limit exceeded; recoverable by waiting
    #[error("Rate limit exceeded, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until the active window rolls
        retry_after_secs: u64,
    },

    /// Period budget ceiling reached for the caller's tier
    #[error("Usage budget exceeded (period limit ${period_limit:.2})")]
    BudgetExceeded {
        /// Tier ceiling in USD for the current period
        period_limit: f64,
    },

    /// The usage store read needed for a budget decision failed
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
