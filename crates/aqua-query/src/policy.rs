//! Cache freshness and pagination policy.

use std::time::Duration;

use aqua_core::defaults;

/// Tunable windows for the query layer.
///
/// Both windows and the page cap are configuration shared by every call
/// site, never per-call constants.
#[derive(Debug, Clone)]
pub struct CachePolicy {
    /// How long a cached result is served without refetching.
    pub stale_after: Duration,
    /// How long an unused entry survives before eviction.
    pub evict_after: Duration,
    /// Hard cap on pages walked by a full-collection fetch.
    pub max_pages: u32,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            stale_after: Duration::from_secs(defaults::STALE_SECS),
            evict_after: Duration::from_secs(defaults::EVICT_SECS),
            max_pages: defaults::MAX_PAGES,
        }
    }
}

impl CachePolicy {
    /// Policy that never serves from cache; every read refetches.
    pub fn always_refetch() -> Self {
        Self {
            stale_after: Duration::ZERO,
            ..Default::default()
        }
    }
}
