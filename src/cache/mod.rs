//! Cache Module
//!
//! Provides a generic expiring memoization cache with TTL expiration.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::ExpiringCache;

// == Public Constants ==
/// Default entry TTL in milliseconds when none is configured
pub const DEFAULT_TTL_MS: u64 = 60_000;
