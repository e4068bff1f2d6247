//! Cached read path for the statistics dashboard summary.

use std::sync::Arc;

use aqua_core::key::resource;
use aqua_core::models::UserStatistics;
use aqua_core::{QueryKey, Result, StatisticsApi};

use crate::cache::QueryCache;
use crate::coalesce::Coalescer;
use crate::policy::CachePolicy;

/// Cache-and-refetch surface for the statistics summary.
pub struct StatisticsQueries<T> {
    api: Arc<T>,
    cache: QueryCache<UserStatistics>,
    coalescer: Coalescer,
}

impl<T: StatisticsApi> StatisticsQueries<T> {
    pub fn new(api: Arc<T>, policy: CachePolicy) -> Self {
        Self {
            api,
            cache: QueryCache::new(&policy),
            coalescer: Coalescer::new(),
        }
    }

    fn key() -> QueryKey {
        QueryKey::singleton(resource::STATISTICS)
    }

    /// Fetch the summary, served from cache while fresh.
    pub async fn fetch(&self) -> Result<Arc<UserStatistics>> {
        let key = Self::key();
        let _guard = self.coalescer.acquire(&key).await;
        if let Some(cached) = self.cache.get_fresh(&key) {
            return Ok(cached);
        }
        let stats = self.api.fetch().await?;
        Ok(self.cache.insert(key, stats))
    }

    /// Drop the cached summary so the next read refetches. Intended for use
    /// after specimen or location mutations, which change the aggregates.
    pub fn invalidate(&self) {
        self.cache.invalidate(&Self::key());
    }
}
