//! In-flight request coalescing.
//!
//! Concurrent reads of the same key serialize on a per-key guard. The first
//! holder performs the network fetch and fills the cache; later holders
//! re-check the cache under the guard and find the fresh entry instead of
//! issuing a duplicate request.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use aqua_core::QueryKey;

/// Per-key guard map for deduplicating identical in-flight fetches.
#[derive(Default)]
pub struct Coalescer {
    inflight: Mutex<HashMap<QueryKey, Arc<Mutex<()>>>>,
}

impl Coalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the guard for a key, waiting behind any fetch already in
    /// flight for it.
    pub async fn acquire(&self, key: &QueryKey) -> OwnedMutexGuard<()> {
        let lock = {
            let mut inflight = self.inflight.lock().await;
            Arc::clone(
                inflight
                    .entry(key.clone())
                    .or_insert_with(|| Arc::new(Mutex::new(()))),
            )
        };
        lock.lock_owned().await
    }
}
