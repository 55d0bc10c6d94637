//! Sync adapter: triggers the backend's batch-ingestion jobs

use common::{ApiError, ApiResult, HttpClient, RequestOptions};
use tracing::{error, info};

use crate::models::{SyncSummary, SyncTarget};

/// Sync adapter
#[derive(Debug, Clone)]
pub struct SyncAdapter {
    client: HttpClient,
}

impl SyncAdapter {
    /// Create a new sync adapter
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Run one sync job; any 2xx is a success, failures come back as
    /// `ApiError::Operation`
    pub async fn sync(&self, target: SyncTarget) -> ApiResult<SyncSummary> {
        match self
            .client
            .call(target.endpoint(), RequestOptions::post())
            .await
        {
            Ok(payload) => {
                let summary = SyncSummary::from_response(payload.into_json());
                info!("{} finished: {:?}", target.operation(), summary);
                Ok(summary)
            }
            Err(e) => {
                error!("{} failed: {}", target.operation(), e);
                Err(ApiError::operation(target.operation(), e))
            }
        }
    }

    pub async fn sync_nutrition(&self) -> ApiResult<SyncSummary> {
        self.sync(SyncTarget::Nutrition).await
    }

    pub async fn sync_recipes(&self) -> ApiResult<SyncSummary> {
        self.sync(SyncTarget::Recipes).await
    }

    pub async fn sync_images(&self) -> ApiResult<SyncSummary> {
        self.sync(SyncTarget::Images).await
    }
}
