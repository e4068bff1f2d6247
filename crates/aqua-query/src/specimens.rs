//! Cached read and mutation paths for specimens.

use std::sync::Arc;

use tracing::{debug, warn};

use aqua_core::cursor::PageCursor;
use aqua_core::key::{resource, specimen_list_key};
use aqua_core::models::{Page, Specimen, SpecimenFilter, SpecimenInput};
use aqua_core::{QueryKey, Result, SpecimenApi};

use crate::cache::QueryCache;
use crate::coalesce::Coalescer;
use crate::policy::CachePolicy;

/// Cache-and-refetch surface for the specimen resource.
///
/// Generic over [`SpecimenApi`] so it runs against the real service in
/// production and a mock in tests.
pub struct SpecimenQueries<S> {
    api: Arc<S>,
    policy: CachePolicy,
    lists: QueryCache<Page<Specimen>>,
    items: QueryCache<Specimen>,
    coalescer: Coalescer,
}

impl<S: SpecimenApi> SpecimenQueries<S> {
    pub fn new(api: Arc<S>, policy: CachePolicy) -> Self {
        Self {
            api,
            lists: QueryCache::new(&policy),
            items: QueryCache::new(&policy),
            coalescer: Coalescer::new(),
            policy,
        }
    }

    /// Fetch one specimen, served from cache while fresh.
    ///
    /// A non-positive id is a no-op: `Ok(None)` without a request.
    pub async fn get(&self, id: i64) -> Result<Option<Arc<Specimen>>> {
        if id <= 0 {
            return Ok(None);
        }
        let key = QueryKey::item(resource::SPECIMENS, id);
        let _guard = self.coalescer.acquire(&key).await;
        if let Some(cached) = self.items.get_fresh(&key) {
            debug!(
                subsystem = "query",
                component = "specimens",
                op = "get",
                id,
                cache_hit = true,
                "Served from cache"
            );
            return Ok(Some(cached));
        }
        let fetched = self.api.get(id).await?;
        Ok(Some(self.items.insert(key, fetched)))
    }

    /// Fetch one page of the filtered list, served from cache while fresh.
    /// Concurrent identical reads coalesce into a single request.
    pub async fn list_page(
        &self,
        filter: &SpecimenFilter,
        cursor: Option<PageCursor>,
    ) -> Result<Arc<Page<Specimen>>> {
        let cursor = cursor.unwrap_or(PageCursor::FIRST);
        let key = specimen_list_key(filter, cursor);
        let _guard = self.coalescer.acquire(&key).await;
        if let Some(cached) = self.lists.get_fresh(&key) {
            return Ok(cached);
        }
        let page = self.api.list(filter, Some(cursor)).await?;
        debug!(
            subsystem = "query",
            component = "specimens",
            op = "list",
            page = cursor.page(),
            result_count = page.results.len(),
            "Page fetched"
        );
        Ok(self.lists.insert(key, page))
    }

    /// Walk every page of the filtered list and accumulate the records in
    /// page order.
    ///
    /// Follows the typed cursor from each response, incrementing by one when
    /// a `next` URL carries no parsable cursor. Iteration stops at the
    /// policy's page cap regardless of what the server claims, so a server
    /// that never returns a null `next` cannot loop us forever.
    pub async fn all(&self, filter: &SpecimenFilter) -> Result<Vec<Specimen>> {
        let mut collected = Vec::new();
        let mut cursor = PageCursor::FIRST;
        for _ in 0..self.policy.max_pages {
            let page = self.list_page(filter, Some(cursor)).await?;
            collected.extend(page.results.iter().cloned());
            if !page.has_next() {
                return Ok(collected);
            }
            cursor = page.next_cursor().unwrap_or_else(|| cursor.next());
        }
        warn!(
            subsystem = "query",
            component = "specimens",
            op = "all",
            max_pages = self.policy.max_pages,
            result_count = collected.len(),
            "Page cap reached before pagination terminated"
        );
        Ok(collected)
    }

    /// Create a specimen and invalidate the resource so reads refetch.
    pub async fn create(&self, input: &SpecimenInput) -> Result<Specimen> {
        let created = self.api.create(input).await?;
        self.invalidate_all();
        Ok(created)
    }

    /// Update a specimen and invalidate the resource, including its item key.
    pub async fn update(&self, id: i64, input: &SpecimenInput) -> Result<Specimen> {
        let updated = self.api.update(id, input).await?;
        self.invalidate_all();
        Ok(updated)
    }

    /// Delete a specimen and invalidate the resource.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete(id).await?;
        self.invalidate_all();
        Ok(())
    }

    fn invalidate_all(&self) {
        self.lists.invalidate_resource(resource::SPECIMENS);
        self.items.invalidate_resource(resource::SPECIMENS);
    }
}
