//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single memoized value with its expiry bookkeeping.
///
/// Timestamps come from the monotonic clock, so entries are immune to
/// wall-clock adjustments.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The memoized value
    pub value: V,
    /// When the entry was stored
    pub stored_at: Instant,
    /// Absolute instant after which the entry is invalid
    pub expires_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl` from now.
    pub fn new(value: V, ttl: Duration) -> Self {
        let now = Instant::now();
        Self {
            value,
            stored_at: now,
            expires_at: now + ttl,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is present through its expiry instant
    /// and expired only once the current time is strictly past it.
    pub fn is_expired(&self) -> bool {
        Instant::now() > self.expires_at
    }

    // == Time To Live ==
    /// Returns the remaining TTL, zero once expired.
    pub fn ttl_remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}
