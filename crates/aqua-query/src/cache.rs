//! Freshness-window query cache.
//!
//! Entries are keyed by [`QueryKey`] and carry their fetch time. A read
//! within the staleness window is a hit; a stale entry forces the caller to
//! refetch and replace it. Unused entries are swept on access once they
//! outlive the eviction window. Cached values are never patched in place;
//! mutations invalidate whole keys so the next read refetches.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use tracing::debug;

use aqua_core::QueryKey;

use crate::policy::CachePolicy;

struct CacheEntry<T> {
    value: Arc<T>,
    fetched_at: Instant,
    last_used: Instant,
}

/// Cache for one value type, shared across that type's read paths.
pub struct QueryCache<T> {
    policy: CachePolicy,
    entries: Mutex<HashMap<QueryKey, CacheEntry<T>>>,
}

impl<T> QueryCache<T> {
    pub fn new(policy: &CachePolicy) -> Self {
        Self {
            policy: policy.clone(),
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// A fresh cached value, or `None` when absent or stale.
    pub fn get_fresh(&self, key: &QueryKey) -> Option<Arc<T>> {
        let mut entries = self.entries.lock().expect("cache poisoned");
        let evict_after = self.policy.evict_after;
        entries.retain(|_, entry| entry.last_used.elapsed() <= evict_after);

        let entry = entries.get_mut(key)?;
        if entry.fetched_at.elapsed() >= self.policy.stale_after {
            return None;
        }
        entry.last_used = Instant::now();
        Some(Arc::clone(&entry.value))
    }

    /// Store a freshly fetched value, replacing any previous entry.
    pub fn insert(&self, key: QueryKey, value: T) -> Arc<T> {
        let value = Arc::new(value);
        let now = Instant::now();
        self.entries.lock().expect("cache poisoned").insert(
            key,
            CacheEntry {
                value: Arc::clone(&value),
                fetched_at: now,
                last_used: now,
            },
        );
        value
    }

    /// Drop one entry.
    pub fn invalidate(&self, key: &QueryKey) {
        self.entries.lock().expect("cache poisoned").remove(key);
    }

    /// Drop every entry belonging to a resource.
    pub fn invalidate_resource(&self, resource: &str) {
        let mut entries = self.entries.lock().expect("cache poisoned");
        let before = entries.len();
        entries.retain(|key, _| key.resource() != resource);
        debug!(
            subsystem = "query",
            component = "cache",
            resource,
            dropped = before - entries.len(),
            "Invalidated resource"
        );
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
