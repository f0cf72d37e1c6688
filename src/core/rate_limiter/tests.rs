//! Tests for the counter store and limit evaluator

use super::limiter::RateLimiter;
use super::store::{CounterStore, MemoryCounterStore};
use crate::config::models::rate_limit::LimitPolicy;
use std::time::Duration;

fn policy(max_requests: u32, window_ms: u64) -> LimitPolicy {
    LimitPolicy::new("test", max_requests, window_ms)
}

#[test]
fn test_increment_counts_sequentially() {
    let store = MemoryCounterStore::new();
    let window = Duration::from_secs(60);

    for expected in 1..=25u32 {
        let state = store.increment("key", window);
        assert_eq!(state.count, expected);
    }
}

#[test]
fn test_increment_resets_after_window_elapses() {
    let store = MemoryCounterStore::new();
    let window = Duration::from_millis(40);

    for _ in 0..5 {
        store.increment("key", window);
    }
    std::thread::sleep(Duration::from_millis(60));

    // Reset to 1, not 6 - the reset is lazy, triggered by this access
    let state = store.increment("key", window);
    assert_eq!(state.count, 1);
}

#[test]
fn test_window_start_advances_on_reset() {
    let store = MemoryCounterStore::new();
    let window = Duration::from_millis(30);

    let first = store.increment("key", window);
    std::thread::sleep(Duration::from_millis(50));
    let second = store.increment("key", window);

    assert!(second.window_start > first.window_start);
}

#[test]
fn test_keys_are_independent() {
    let limiter = RateLimiter::in_memory();
    let policy = policy(2, 60_000);

    limiter.check("ip:1.1.1.1", &policy);
    limiter.check("ip:1.1.1.1", &policy);
    let saturated = limiter.check("ip:1.1.1.1", &policy);
    assert!(!saturated.allowed);

    // Saturating one key never affects the other
    let other = limiter.check("ip:2.2.2.2", &policy);
    assert!(other.allowed);
    assert_eq!(other.count, 1);
}

#[test]
fn test_allows_up_to_limit_then_denies() {
    let limiter = RateLimiter::in_memory();
    let policy = policy(10, 60_000);

    for i in 0..10 {
        let decision = limiter.check("ip:1.2.3.4", &policy);
        assert!(decision.allowed, "request {} should be allowed", i);
    }

    let decision = limiter.check("ip:1.2.3.4", &policy);
    assert!(!decision.allowed);
    let retry = decision.retry_after.unwrap();
    assert!(retry > Duration::ZERO);
    assert!(retry <= policy.window());
}

#[test]
fn test_denied_requests_still_consume_the_counter() {
    let limiter = RateLimiter::in_memory();
    let policy = policy(3, 60_000);

    for _ in 0..3 {
        limiter.check("key", &policy);
    }
    let d4 = limiter.check("key", &policy);
    let d5 = limiter.check("key", &policy);

    // Count climbs past the limit until the window rolls
    assert_eq!(d4.count, 4);
    assert_eq!(d5.count, 5);
    assert!(!d5.allowed);
}

#[test]
fn test_remaining_decrements_toward_zero() {
    let limiter = RateLimiter::in_memory();
    let policy = policy(5, 60_000);

    let first = limiter.check("key", &policy);
    assert_eq!(first.remaining, 4);

    limiter.check("key", &policy);
    limiter.check("key", &policy);
    let fourth = limiter.check("key", &policy);
    assert_eq!(fourth.remaining, 1);

    let fifth = limiter.check("key", &policy);
    assert_eq!(fifth.remaining, 0);
    assert!(fifth.allowed);
}

#[test]
fn test_window_rolls_over_and_allows_again() {
    let limiter = RateLimiter::in_memory();
    let policy = policy(2, 40);

    limiter.check("key", &policy);
    limiter.check("key", &policy);
    assert!(!limiter.check("key", &policy).allowed);

    std::thread::sleep(Duration::from_millis(60));

    let decision = limiter.check("key", &policy);
    assert!(decision.allowed);
    assert_eq!(decision.count, 1);
}

#[test]
fn test_sweep_drops_idle_entries_only() {
    let store = MemoryCounterStore::new();
    let window = Duration::from_millis(20);

    store.increment("stale", window);
    std::thread::sleep(Duration::from_millis(50));
    store.increment("fresh", window);

    let removed = store.sweep(Duration::from_millis(40));
    assert_eq!(removed, 1);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_shared_store_across_limiter_clones() {
    let limiter = RateLimiter::in_memory();
    let clone = limiter.clone();
    let policy = policy(2, 60_000);

    limiter.check("key", &policy);
    clone.check("key", &policy);

    // Both clones see the same counters
    assert!(!limiter.check("key", &policy).allowed);
}
