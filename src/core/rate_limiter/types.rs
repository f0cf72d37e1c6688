//! Rate limiter types and data structures

use std::time::{Duration, Instant};

/// Post-increment state of one key's window
#[derive(Debug, Clone, Copy)]
pub struct WindowState {
    /// Requests observed in the active window, including this one
    pub count: u32,
    /// When the active window opened
    pub window_start: Instant,
}

/// Rate limit decision
#[derive(Debug, Clone)]
pub struct LimitDecision {
    /// Whether the request is allowed
    pub allowed: bool,
    /// Current request count in the window
    pub count: u32,
    /// Maximum requests allowed
    pub limit: u32,
    /// Remaining requests in the window
    pub remaining: u32,
    /// Time until the window rolls (only set when not allowed)
    pub retry_after: Option<Duration>,
}

impl LimitDecision {
    /// Decision used when rate limiting is disabled
    pub fn unlimited(limit: u32) -> Self {
        Self {
            allowed: true,
            count: 0,
            limit,
            remaining: limit,
            retry_after: None,
        }
    }
}
