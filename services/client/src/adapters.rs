//! Adapters for the backend's endpoint groups
//!
//! Each adapter holds a cheap clone of the shared `HttpClient`.

use common::{Endpoint, HttpClient, RequestOptions};
use serde_json::Value;
use tracing::error;

pub mod auth;
pub mod favorites;
pub mod image;
pub mod nutrition;
pub mod recipe;
pub mod recommendation;
pub mod sync;

pub use auth::AuthAdapter;
pub use favorites::FavoritesAdapter;
pub use image::ImageAdapter;
pub use nutrition::NutritionAdapter;
pub use recipe::RecipeAdapter;
pub use recommendation::RecommendationAdapter;
pub use sync::SyncAdapter;

/// Health adapter
#[derive(Debug, Clone)]
pub struct HealthAdapter {
    client: HttpClient,
}

impl HealthAdapter {
    /// Create a new health adapter
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// True only when the backend answers `{"ok": true}`
    pub async fn check_health(&self) -> bool {
        match self.client.call(Endpoint::Health, RequestOptions::get()).await {
            Ok(payload) => payload
                .as_json()
                .and_then(|body| body.get("ok"))
                .and_then(Value::as_bool)
                .unwrap_or(false),
            Err(e) => {
                error!("Health check failed: {}", e);
                false
            }
        }
    }
}
