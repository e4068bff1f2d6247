//! Cached read and mutation paths for locations.
//!
//! The service layer already normalizes responses, so everything cached and
//! returned here is in the feature shape.

use std::sync::Arc;

use tracing::{debug, warn};

use aqua_core::cursor::PageCursor;
use aqua_core::key::resource;
use aqua_core::models::{LocationFeature, LocationInput, Page};
use aqua_core::{LocationApi, QueryKey, Result};

use crate::cache::QueryCache;
use crate::coalesce::Coalescer;
use crate::policy::CachePolicy;

/// Cache-and-refetch surface for the location resource.
pub struct LocationQueries<L> {
    api: Arc<L>,
    policy: CachePolicy,
    lists: QueryCache<Page<LocationFeature>>,
    items: QueryCache<LocationFeature>,
    coalescer: Coalescer,
}

impl<L: LocationApi> LocationQueries<L> {
    pub fn new(api: Arc<L>, policy: CachePolicy) -> Self {
        Self {
            api,
            lists: QueryCache::new(&policy),
            items: QueryCache::new(&policy),
            coalescer: Coalescer::new(),
            policy,
        }
    }

    /// Fetch one location, served from cache while fresh. A non-positive id
    /// is a no-op.
    pub async fn get(&self, id: i64) -> Result<Option<Arc<LocationFeature>>> {
        if id <= 0 {
            return Ok(None);
        }
        let key = QueryKey::item(resource::LOCATIONS, id);
        let _guard = self.coalescer.acquire(&key).await;
        if let Some(cached) = self.items.get_fresh(&key) {
            return Ok(Some(cached));
        }
        let fetched = self.api.get(id).await?;
        Ok(Some(self.items.insert(key, fetched)))
    }

    /// Fetch one page of locations, cached and coalesced.
    pub async fn list_page(&self, cursor: Option<PageCursor>) -> Result<Arc<Page<LocationFeature>>> {
        let cursor = cursor.unwrap_or(PageCursor::FIRST);
        let key = QueryKey::list(resource::LOCATIONS, "", cursor);
        let _guard = self.coalescer.acquire(&key).await;
        if let Some(cached) = self.lists.get_fresh(&key) {
            return Ok(cached);
        }
        let page = self.api.list(Some(cursor)).await?;
        debug!(
            subsystem = "query",
            component = "locations",
            op = "list",
            page = cursor.page(),
            result_count = page.results.len(),
            "Page fetched"
        );
        Ok(self.lists.insert(key, page))
    }

    /// Walk every page and accumulate all locations in page order, bounded
    /// by the policy's page cap.
    pub async fn all(&self) -> Result<Vec<LocationFeature>> {
        let mut collected = Vec::new();
        let mut cursor = PageCursor::FIRST;
        for _ in 0..self.policy.max_pages {
            let page = self.list_page(Some(cursor)).await?;
            collected.extend(page.results.iter().cloned());
            if !page.has_next() {
                return Ok(collected);
            }
            cursor = page.next_cursor().unwrap_or_else(|| cursor.next());
        }
        warn!(
            subsystem = "query",
            component = "locations",
            op = "all",
            max_pages = self.policy.max_pages,
            "Page cap reached before pagination terminated"
        );
        Ok(collected)
    }

    /// Create a location and invalidate the resource.
    pub async fn create(&self, input: &LocationInput) -> Result<LocationFeature> {
        let created = self.api.create(input).await?;
        self.invalidate_all();
        Ok(created)
    }

    /// Update a location and invalidate the resource, including its item key.
    pub async fn update(&self, id: i64, input: &LocationInput) -> Result<LocationFeature> {
        let updated = self.api.update(id, input).await?;
        self.invalidate_all();
        Ok(updated)
    }

    /// Delete a location and invalidate the resource.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete(id).await?;
        self.invalidate_all();
        Ok(())
    }

    fn invalidate_all(&self) {
        self.lists.invalidate_resource(resource::LOCATIONS);
        self.items.invalidate_resource(resource::LOCATIONS);
    }
}
