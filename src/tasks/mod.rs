//! Tasks Module
//!
//! Background tasks supporting the cache.

mod eviction;

pub use eviction::spawn_eviction_task;
