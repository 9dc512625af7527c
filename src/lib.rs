//! Lifecore - core utilities for Life-like cellular automata
//!
//! Provides rule-string parsing into canonical rule sets and a generic
//! expiring memoization cache for per-cell neighborhood results.

pub mod cache;
pub mod config;
pub mod error;
pub mod rules;
pub mod tasks;

pub use cache::{CacheStats, ExpiringCache};
pub use config::Config;
pub use error::RuleError;
pub use rules::{parse_compact, parse_delimited, RuleSet};
pub use tasks::spawn_eviction_task;
