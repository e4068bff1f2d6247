//! Core traits for the AquaTracker data layer.
//!
//! These traits define the interfaces the resource services satisfy, so the
//! query-cache layer is generic over them and testable without a network.

use async_trait::async_trait;

use crate::cursor::PageCursor;
use crate::error::Result;
use crate::models::*;

/// Specimen CRUD against the remote API.
#[async_trait]
pub trait SpecimenApi: Send + Sync {
    /// Fetch one page of specimens under a filter.
    async fn list(
        &self,
        filter: &SpecimenFilter,
        cursor: Option<PageCursor>,
    ) -> Result<Page<Specimen>>;

    /// Fetch a single specimen by id.
    async fn get(&self, id: i64) -> Result<Specimen>;

    /// Create a specimen. Multipart when the input carries an image,
    /// JSON otherwise.
    async fn create(&self, input: &SpecimenInput) -> Result<Specimen>;

    /// Update a specimen. Same encoding rule as `create`.
    async fn update(&self, id: i64, input: &SpecimenInput) -> Result<Specimen>;

    /// Delete a specimen.
    async fn delete(&self, id: i64) -> Result<()>;
}

/// Location CRUD against the remote API. Responses are normalized to the
/// feature shape at this boundary.
#[async_trait]
pub trait LocationApi: Send + Sync {
    /// Fetch one page of locations.
    async fn list(&self, cursor: Option<PageCursor>) -> Result<Page<LocationFeature>>;

    /// Fetch a single location by id.
    async fn get(&self, id: i64) -> Result<LocationFeature>;

    /// Create a location.
    async fn create(&self, input: &LocationInput) -> Result<LocationFeature>;

    /// Update a location.
    async fn update(&self, id: i64, input: &LocationInput) -> Result<LocationFeature>;

    /// Delete a location.
    async fn delete(&self, id: i64) -> Result<()>;
}

/// Aggregate statistics endpoint.
#[async_trait]
pub trait StatisticsApi: Send + Sync {
    /// Fetch the account's collection statistics.
    async fn fetch(&self) -> Result<UserStatistics>;
}
