//! Core admission-control logic
//!
//! Leaf-first: the counter store tracks per-key windows, the rate limiter
//! turns counters into decisions, the budget enforcer tracks period cost
//! against tier ceilings, and the admission facade composes both.

pub mod admission;
pub mod budget;
pub mod rate_limiter;
