//! # ClaimGuard
//!
//! Request admission gateway for ClaimGuardian. Every metered or
//! rate-sensitive operation (AI chat, image analysis, parcel lookup) asks
//! this crate for a decision before doing work:
//!
//! - **Rate limiting**: fixed-window, per-key counters evaluated lazily on
//!   access. Counters live in process memory; multi-instance deployments
//!   under-enforce the configured limits.
//! - **Usage budgets**: cumulative estimated cost per user per calendar
//!   month, compared against the subscription tier's ceiling. Usage records
//!   are read from an externally-owned table; recording after an operation
//!   completes is the caller's responsibility.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use claimguard::{AdmissionController, AdmissionRequest};
//! use claimguard::config::{BudgetConfig, RateLimitConfig};
//! use claimguard::core::budget::{BudgetEnforcer, FailurePolicy, MemoryUsageStore};
//! use claimguard::core::rate_limiter::RateLimiter;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let enforcer = BudgetEnforcer::new(
//!         Arc::new(MemoryUsageStore::new()),
//!         BudgetConfig::default(),
//!         FailurePolicy::FailClosed,
//!     );
//!     let controller = AdmissionController::new(
//!         RateLimiter::in_memory(),
//!         RateLimitConfig::default(),
//!         enforcer,
//!     );
//!
//!     let decision = controller
//!         .admit(&AdmissionRequest::new("ip:1.2.3.4", "ai_chat"))
//!         .await;
//!     assert!(decision.allowed);
//! }
//! ```
//!
//! ## Gateway Mode
//!
//! ```rust,no_run
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     claimguard::server::run_server().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::admission::{
    AdmissionController, AdmissionDecision, AdmissionRequest, DenialReason,
};
pub use core::budget::{BudgetStatus, SubscriptionTier, UsageRecord};
pub use utils::error::{AdmissionError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
