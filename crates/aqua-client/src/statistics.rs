//! Statistics resource service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use aqua_core::models::UserStatistics;
use aqua_core::{Result, StatisticsApi};

use crate::http::ApiClient;

/// Read-only access to `/user/statistics/`, behind the [`StatisticsApi`]
/// trait so the dashboard query layer can be tested without a network.
pub struct StatisticsService {
    api: Arc<ApiClient>,
}

impl StatisticsService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl StatisticsApi for StatisticsService {
    #[instrument(skip(self), fields(subsystem = "client", component = "statistics", op = "fetch"))]
    async fn fetch(&self) -> Result<UserStatistics> {
        self.api.get_json("/user/statistics/", &[]).await
    }
}
