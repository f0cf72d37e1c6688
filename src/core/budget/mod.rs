//! Usage-cost budget enforcement
//!
//! Tracks cumulative estimated cost per user over the current calendar month
//! and compares it against the subscription tier's ceiling. The enforcer
//! only reads usage; recording after an operation completes is the calling
//! feature's job, so the accounting is at-least-once (a crash between the
//! operation and the write under-counts).

pub mod enforcer;
pub mod store;
pub mod types;


pub use enforcer::BudgetEnforcer;
pub use store::{MemoryUsageStore, UsageStore};
pub use types::{BudgetCheck, BudgetStatus, FailurePolicy, SubscriptionTier, UsageRecord};
