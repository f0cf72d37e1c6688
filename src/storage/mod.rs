//! Persistence layer for usage records

pub mod database;

pub use database::DatabaseUsageStore;
