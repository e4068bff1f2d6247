//! Location resource service.
//!
//! Responses arrive in either wire shape; this service normalizes every
//! record to the feature shape before handing it to callers, so map-facing
//! consumers never see the flat representation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use aqua_core::cursor::PageCursor;
use aqua_core::models::{LocationFeature, LocationInput, LocationRecord, Page};
use aqua_core::{LocationApi, Result};

use crate::http::ApiClient;

/// CRUD against `/locations/`.
pub struct LocationService {
    api: Arc<ApiClient>,
}

impl LocationService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    fn item_path(id: i64) -> String {
        format!("/locations/{}/", id)
    }
}

#[async_trait]
impl LocationApi for LocationService {
    #[instrument(skip(self), fields(subsystem = "client", component = "locations", op = "list"))]
    async fn list(&self, cursor: Option<PageCursor>) -> Result<Page<LocationFeature>> {
        let mut query = Vec::new();
        if let Some(cursor) = cursor {
            query.push(("page", cursor.page().to_string()));
        }
        let page: Page<LocationRecord> = self.api.get_json("/locations/", &query).await?;
        debug!(result_count = page.results.len(), "Location list fetched");
        Ok(page.map(LocationRecord::into_feature))
    }

    #[instrument(skip(self), fields(subsystem = "client", component = "locations", op = "get"))]
    async fn get(&self, id: i64) -> Result<LocationFeature> {
        let record: LocationRecord = self.api.get_json(&Self::item_path(id), &[]).await?;
        Ok(record.into_feature())
    }

    #[instrument(skip(self, input), fields(subsystem = "client", component = "locations", op = "create"))]
    async fn create(&self, input: &LocationInput) -> Result<LocationFeature> {
        input.validate()?;
        let record: LocationRecord = self.api.post_json("/locations/", input).await?;
        Ok(record.into_feature())
    }

    #[instrument(skip(self, input), fields(subsystem = "client", component = "locations", op = "update"))]
    async fn update(&self, id: i64, input: &LocationInput) -> Result<LocationFeature> {
        input.validate()?;
        let record: LocationRecord = self.api.put_json(&Self::item_path(id), input).await?;
        Ok(record.into_feature())
    }

    #[instrument(skip(self), fields(subsystem = "client", component = "locations", op = "delete"))]
    async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete(&Self::item_path(id)).await
    }
}
