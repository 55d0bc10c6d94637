//! Typed client for the oneul food-recommendation API
//!
//! `FoodApi` bundles one adapter per endpoint group over a single shared
//! `HttpClient`. Read paths degrade to empty or placeholder results, write
//! paths propagate `ApiError`.
//!
//! ```rust,no_run
//! use client::FoodApi;
//! use client::models::NutritionInput;
//! use common::ApiConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = FoodApi::from_config(ApiConfig::from_env()?)?;
//!     let outcome = api
//!         .recommendation
//!         .recommend_foods(NutritionInput::new(25.0, 40.0, 10.0))
//!         .await?;
//!     for item in &outcome.recommendations {
//!         println!("{} {}", item.name, item.image_or_placeholder());
//!     }
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod catalog;
pub mod models;
pub mod normalize;
pub mod validation;

use common::{ApiConfig, ApiResult, HttpClient, Session, Store};

use crate::adapters::{
    AuthAdapter, FavoritesAdapter, HealthAdapter, ImageAdapter, NutritionAdapter, RecipeAdapter,
    RecommendationAdapter, SyncAdapter,
};

/// Every adapter over one shared client
#[derive(Debug, Clone)]
pub struct FoodApi {
    pub client: HttpClient,
    pub auth: AuthAdapter,
    pub nutrition: NutritionAdapter,
    pub favorites: FavoritesAdapter,
    pub recommendation: RecommendationAdapter,
    pub image: ImageAdapter,
    pub recipe: RecipeAdapter,
    pub sync: SyncAdapter,
    pub health: HealthAdapter,
}

impl FoodApi {
    /// Build the adapters from an explicit config, session and durable store
    pub fn new(config: ApiConfig, session: Session, local: Store) -> ApiResult<Self> {
        let client = HttpClient::new(config, session)?;

        Ok(Self {
            auth: AuthAdapter::new(client.clone()),
            nutrition: NutritionAdapter::new(client.clone(), local),
            favorites: FavoritesAdapter::new(client.clone()),
            recommendation: RecommendationAdapter::new(client.clone()),
            image: ImageAdapter::new(client.clone()),
            recipe: RecipeAdapter::new(client.clone()),
            sync: SyncAdapter::new(client.clone()),
            health: HealthAdapter::new(client.clone()),
            client,
        })
    }

    /// Fresh session and a durable store under the configured directory
    pub fn from_config(config: ApiConfig) -> ApiResult<Self> {
        let local = Store::durable(config.store_path());
        Self::new(config, Session::new(), local)
    }
}
