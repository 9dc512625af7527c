//! TTL Eviction Task
//!
//! Background task that removes cache entries as their deadlines come due.

use std::hash::Hash;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::ExpiringCache;

/// Spawns the eviction task for a cache.
///
/// A single task services all of the cache's deadlines: it sleeps until the
/// earliest pending deadline (parking when there is none), then removes every
/// due entry whose own expiry has actually passed. `set` and `clear` wake the
/// task so it re-evaluates which deadline is earliest.
///
/// Entries expire correctly even without this task running, via lazy expiry
/// on read; the task exists so entries disappear autonomously after their TTL
/// instead of lingering until the next read.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during shutdown.
///
/// # Example
/// ```ignore
/// let cache: ExpiringCache<String, u32> = ExpiringCache::new(Duration::from_secs(60));
/// let handle = spawn_eviction_task(cache.clone());
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_eviction_task<K, V>(cache: ExpiringCache<K, V>) -> JoinHandle<()>
where
    K: Eq + Hash + Send + 'static,
    V: Send + 'static,
{
    tokio::spawn(async move {
        debug!("Eviction task started");

        loop {
            match cache.next_deadline() {
                // Nothing scheduled: park until a set or clear happens
                None => cache.changed().await,
                Some(at) => {
                    let sleep = tokio::time::sleep_until(tokio::time::Instant::from_std(at));
                    tokio::select! {
                        _ = sleep => {
                            let removed = cache.evict_due();
                            if removed > 0 {
                                info!("Eviction: removed {} expired entries", removed);
                            } else {
                                debug!("Eviction: deadline due but no entries removed");
                            }
                        }
                        // An earlier deadline may have been scheduled
                        _ = cache.changed() => {}
                    }
                }
            }
        }
    })
}
