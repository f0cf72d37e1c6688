//! Per-key window counter store
//!
//! The store is behind a trait so the evaluator stays oblivious to the
//! backing implementation; a distributed atomic-increment store can be
//! slotted in without touching the limiter or the admission facade.

use super::types::WindowState;
use dashmap::DashMap;
use std::time::{Duration, Instant};

/// Storage for per-key fixed-window counters
pub trait CounterStore: Send + Sync {
    /// Record one request against `key` and return the post-increment state.
    ///
    /// Creates the entry on first sight; resets it when the window has
    /// elapsed; otherwise increments. The window start never moves
    /// backwards. The count keeps climbing past any limit until the window
    /// rolls - denied requests are counted too.
    fn increment(&self, key: &str, window: Duration) -> WindowState;

    /// Drop entries not touched within `max_idle`; returns how many were removed
    fn sweep(&self, max_idle: Duration) -> usize;

    /// Number of tracked keys
    fn len(&self) -> usize;

    /// Whether the store is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Entry for one key's active window
#[derive(Debug, Clone, Copy)]
struct WindowEntry {
    count: u32,
    window_start: Instant,
    last_seen: Instant,
}

/// In-memory counter store
///
/// Process-local; each instance of the gateway enforces limits over its own
/// traffic only.
#[derive(Debug, Default)]
pub struct MemoryCounterStore {
    entries: DashMap<String, WindowEntry>,
}

impl MemoryCounterStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl CounterStore for MemoryCounterStore {
    fn increment(&self, key: &str, window: Duration) -> WindowState {
        let now = Instant::now();

        let mut entry = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| WindowEntry {
                count: 0,
                window_start: now,
                last_seen: now,
            });

        let state = entry.value_mut();
        if now.duration_since(state.window_start) >= window {
            // Lazy reset: triggered by the request that observes expiry
            state.count = 1;
            state.window_start = now;
        } else {
            state.count += 1;
        }
        state.last_seen = now;

        WindowState {
            count: state.count,
            window_start: state.window_start,
        }
    }

    fn sweep(&self, max_idle: Duration) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| now.duration_since(entry.last_seen) < max_idle);
        before - self.entries.len()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
