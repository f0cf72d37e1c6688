//! Database-backed usage store

pub mod entities;
pub mod usage_store;

pub use usage_store::DatabaseUsageStore;
