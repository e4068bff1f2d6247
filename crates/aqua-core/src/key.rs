//! Typed cache keys for the query layer.
//!
//! One shared key constructor guarantees that mutation invalidation matches
//! the keys reads were stored under. Keys are `(resource, scope)`: list keys
//! scope by canonical filter serialization plus page, item keys by id.

use crate::cursor::PageCursor;
use crate::models::SpecimenFilter;

/// Resource names used in cache keys and invalidation.
pub mod resource {
    pub const SPECIMENS: &str = "algae";
    pub const LOCATIONS: &str = "locations";
    pub const STATISTICS: &str = "statistics";
}

/// A cache key for a single query result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    resource: &'static str,
    scope: String,
}

impl QueryKey {
    /// Key for one page of a filtered list.
    pub fn list(resource: &'static str, fragment: &str, cursor: PageCursor) -> Self {
        Self {
            resource,
            scope: format!("list:{}:page={}", fragment, cursor.page()),
        }
    }

    /// Key for a single item fetched by id.
    pub fn item(resource: &'static str, id: i64) -> Self {
        Self {
            resource,
            scope: format!("item:{}", id),
        }
    }

    /// Key for a resource-wide singleton (e.g. the statistics summary).
    pub fn singleton(resource: &'static str) -> Self {
        Self {
            resource,
            scope: String::new(),
        }
    }

    pub fn resource(&self) -> &str {
        self.resource
    }
}

/// Key for one page of the specimen list under a filter.
pub fn specimen_list_key(filter: &SpecimenFilter, cursor: PageCursor) -> QueryKey {
    QueryKey::list(resource::SPECIMENS, &filter.cache_fragment(), cursor)
}
