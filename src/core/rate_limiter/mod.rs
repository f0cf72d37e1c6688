//! Fixed-window rate limiting
//!
//! Counters are process-local and reset lazily on access; there is no
//! background timer. A request straddling a window boundary can therefore
//! see up to 2x `max_requests` in a short span. Multi-instance deployments
//! each hold an independent view of the counters.

pub mod limiter;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;

pub use limiter::RateLimiter;
pub use store::{CounterStore, MemoryCounterStore};
pub use types::{LimitDecision, WindowState};
