//! Recommendation adapter

use common::{ApiError, ApiResult, Endpoint, HttpClient, RequestOptions};
use futures::stream::{self, StreamExt};
use tracing::{debug, error, info};

use super::image::ImageAdapter;
use crate::models::{
    NutritionInput, PLACEHOLDER_IMAGE_URL, RecommendationItem, RecommendationOutcome,
};
use crate::normalize::normalize_recommendations;
use crate::validation::validate_nutrition_data;

/// Recommendation adapter
#[derive(Debug, Clone)]
pub struct RecommendationAdapter {
    client: HttpClient,
    images: ImageAdapter,
}

impl RecommendationAdapter {
    /// Create a recommendation adapter sharing `client` with its image lookups
    pub fn new(client: HttpClient) -> Self {
        let images = ImageAdapter::new(client.clone());
        Self { client, images }
    }

    /// Recommend menus for macro targets.
    ///
    /// Invalid input fails with `ApiError::Validation` before any request.
    /// Any failure after that is folded into an unsuccessful outcome.
    pub async fn recommend_foods(&self, input: NutritionInput) -> ApiResult<RecommendationOutcome> {
        let query = validate_nutrition_data(&input).map_err(ApiError::Validation)?;
        let options = RequestOptions::post().json(&query)?;

        let payload = match self.client.call(Endpoint::RecommendMenu, options).await {
            Ok(payload) => payload,
            Err(e) => {
                error!("Recommendation request failed: {}", e);
                return Ok(RecommendationOutcome::failed());
            }
        };

        let items = normalize_recommendations(&payload.into_json());
        debug!("Normalized {} recommendations", items.len());

        let items = self.enrich_with_images(items).await;
        info!("Returning {} recommendations", items.len());

        Ok(RecommendationOutcome::succeeded(items, query))
    }

    /// Fill missing images by name lookup, then the placeholder; order is kept
    pub async fn enrich_with_images(
        &self,
        items: Vec<RecommendationItem>,
    ) -> Vec<RecommendationItem> {
        stream::iter(items)
            .map(|mut item| async move {
                if !item.has_image() && !item.name.is_empty() {
                    item.image_url = self.images.get_image_by_name(&item.name).await;
                }
                if !item.has_image() {
                    item.image_url = Some(PLACEHOLDER_IMAGE_URL.to_string());
                }
                item
            })
            .buffered(self.client.config().max_concurrency)
            .collect::<Vec<_>>()
            .await
    }
}
