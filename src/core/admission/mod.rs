//! Admission facade
//!
//! Single call site for request handlers: rate limit first (cheap,
//! in-memory), then the budget check when billing parameters are supplied.
//! No retries are performed here; the caller decides whether to surface a
//! 429, queue, or back off.

pub mod controller;
pub mod types;


pub use controller::AdmissionController;
pub use types::{AdmissionDecision, AdmissionRequest, DenialReason};
