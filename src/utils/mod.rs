//! Utility modules shared across the gateway

pub mod error;
