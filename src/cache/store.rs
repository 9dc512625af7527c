//! Expiring Cache Store
//!
//! Generic key-value store with per-entry TTL, lazy expiry on read, and a
//! deadline queue consumed by the background eviction task.

use std::borrow::Borrow;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use tokio::sync::Notify;

use crate::cache::{CacheEntry, CacheStats};

// == Eviction Deadline ==
/// A scheduled removal: when `at` passes, `key` becomes an eviction
/// candidate. Ordered by instant alone so the heap never needs `K: Ord`.
#[derive(Debug)]
struct Deadline<K> {
    at: Instant,
    key: K,
}

impl<K> PartialEq for Deadline<K> {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at
    }
}

impl<K> Eq for Deadline<K> {}

impl<K> PartialOrd for Deadline<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> Ord for Deadline<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.at.cmp(&other.at)
    }
}

// == Cache State ==
#[derive(Debug)]
struct CacheState<K, V> {
    /// Key-value storage
    entries: HashMap<K, CacheEntry<V>>,
    /// Pending eviction deadlines, earliest first
    deadlines: BinaryHeap<Reverse<Deadline<K>>>,
    /// Performance statistics
    stats: CacheStats,
}

#[derive(Debug)]
struct Inner<K, V> {
    state: Mutex<CacheState<K, V>>,
    /// Wakes the eviction task when the earliest deadline may have changed
    wakeup: Notify,
    /// TTL applied when `set` is called without one
    default_ttl: Duration,
}

// == Expiring Cache ==
/// A generic expiring memoization cache.
///
/// Wraps pure, deterministic, CPU-bound computations (e.g. per-cell
/// neighborhood results) keyed by some identity of the input. Entries expire
/// after their TTL; a miss is always recoverable by recomputing and calling
/// [`set`](Self::set) again, so no operation here returns an error.
///
/// Keys are held by value. The cache never borrows the subject a key
/// identifies, so it can never be the reason that subject stays alive;
/// callers that retire a subject should remove its association with
/// [`clear`](Self::clear) (or let the TTL elapse).
///
/// The handle is cheap to clone and may be shared across tasks; all
/// operations take `&self`. Eviction runs asynchronously relative to `get`
/// and `set` (see [`spawn_eviction_task`](crate::tasks::spawn_eviction_task)),
/// so a value observed present before an await point must be re-checked
/// after it.
#[derive(Debug)]
pub struct ExpiringCache<K, V> {
    inner: Arc<Inner<K, V>>,
}

impl<K, V> Clone for ExpiringCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: Eq + Hash, V> ExpiringCache<K, V> {
    // == Constructor ==
    /// Creates an empty cache with the given default TTL.
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(CacheState {
                    entries: HashMap::new(),
                    deadlines: BinaryHeap::new(),
                    stats: CacheStats::new(),
                }),
                wakeup: Notify::new(),
                default_ttl,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, CacheState<K, V>> {
        self.inner.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // == Set ==
    /// Stores `value` under `key`, expiring `ttl` from now.
    ///
    /// Uses the default TTL when `ttl` is `None`. Re-setting an existing key
    /// replaces the value but does not cancel the previously scheduled
    /// deadline; the stale deadline fires later as a no-op because eviction
    /// only removes entries whose own expiry has actually been reached.
    pub fn set(&self, key: K, value: V, ttl: Option<Duration>)
    where
        K: Clone,
    {
        let ttl = ttl.unwrap_or(self.inner.default_ttl);
        let entry = CacheEntry::new(value, ttl);
        let at = entry.expires_at;

        {
            let mut state = self.state();
            state.entries.insert(key.clone(), entry);
            state.deadlines.push(Reverse(Deadline { at, key }));
            let count = state.entries.len();
            state.stats.set_entries(count);
        }

        // The new deadline may be the earliest; let the reaper re-evaluate
        self.inner.wakeup.notify_one();
    }

    // == Get ==
    /// Retrieves the value for `key`, or `None` if absent or expired.
    ///
    /// An entry read after its expiry but before its deadline fired behaves
    /// exactly like an absent one: it is removed from the store here, and the
    /// still-pending deadline is left to fire harmlessly later. A genuine hit
    /// clones the value and does not refresh the TTL.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        let mut state = self.state();

        match state.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                state.entries.remove(key);
                state.stats.record_expiration();
                state.stats.record_miss();
                let count = state.entries.len();
                state.stats.set_entries(count);
                None
            }
            Some(entry) => {
                let value = entry.value.clone();
                state.stats.record_hit();
                Some(value)
            }
            None => {
                state.stats.record_miss();
                None
            }
        }
    }

    // == Clear ==
    /// Drops every entry and every pending deadline.
    ///
    /// Any `get` after this returns `None` until a new `set`. A deadline the
    /// eviction task already popped finds no matching entry and no-ops.
    pub fn clear(&self) {
        {
            let mut state = self.state();
            state.entries.clear();
            state.deadlines.clear();
            state.stats.set_entries(0);
        }
        self.inner.wakeup.notify_one();
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.state().entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.state().entries.is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        let state = self.state();
        let mut stats = state.stats.clone();
        stats.set_entries(state.entries.len());
        stats
    }

    // == Default TTL ==
    /// The TTL applied when `set` is called without one.
    pub fn default_ttl(&self) -> Duration {
        self.inner.default_ttl
    }

    // == Next Deadline ==
    /// Earliest pending deadline, if any.
    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.state().deadlines.peek().map(|Reverse(d)| d.at)
    }

    // == Evict Due ==
    /// Pops every due deadline and removes the entries whose expiry has
    /// actually been reached. Scheduled eviction fires at the expiry
    /// instant, so the check is against the deadline's clock reading rather
    /// than the strict read-side boundary.
    ///
    /// Idempotent per key: a deadline whose entry is already gone, or was
    /// re-set with a later expiry, is discarded without touching the store.
    /// Returns the number of entries removed.
    pub(crate) fn evict_due(&self) -> usize {
        let now = Instant::now();
        let mut state = self.state();
        let mut removed = 0;

        loop {
            match state.deadlines.peek() {
                Some(Reverse(deadline)) if deadline.at <= now => {}
                _ => break,
            }
            if let Some(Reverse(deadline)) = state.deadlines.pop() {
                let due = state
                    .entries
                    .get(&deadline.key)
                    .map(|entry| entry.expires_at <= now)
                    .unwrap_or(false);
                if due {
                    state.entries.remove(&deadline.key);
                    state.stats.record_expiration();
                    removed += 1;
                }
            }
        }

        let count = state.entries.len();
        state.stats.set_entries(count);
        removed
    }

    // == Changed ==
    /// Resolves when a `set` or `clear` may have moved the earliest deadline.
    pub(crate) async fn changed(&self) {
        self.inner.wakeup.notified().await;
    }
}
