//! # aqua-query
//!
//! Cache-and-refetch layer over the AquaTracker resource services.
//!
//! This crate provides:
//! - A freshness-window cache keyed by typed [`QueryKey`](aqua_core::QueryKey)s
//! - Coalescing of concurrent identical fetches into one network call
//! - Single-item, paged-list, and bounded full-collection reads
//! - Mutations that invalidate by resource so subsequent reads refetch
//!
//! The layer is generic over the `aqua-core` service traits, so it runs
//! against the real `aqua-client` services in production and against mock
//! implementations in tests. Errors surface as `Err` values; nothing is
//! retried.

pub mod cache;
pub mod coalesce;
pub mod locations;
pub mod policy;
pub mod specimens;
pub mod statistics;

// Mock service implementations for tests
#[cfg(test)]
pub mod mock;

// Re-export core types
pub use aqua_core::{Error, Result};

pub use cache::QueryCache;
pub use coalesce::Coalescer;
pub use locations::LocationQueries;
pub use policy::CachePolicy;
pub use specimens::SpecimenQueries;
pub use statistics::StatisticsQueries;
