//! Favorites adapter

use std::collections::{HashMap, HashSet};

use common::{ApiError, ApiResult, Endpoint, HttpClient, Payload, RequestOptions};
use futures::stream::{self, StreamExt};
use serde_json::json;
use tracing::{error, info, warn};

use crate::models::{FavoriteCheck, FavoriteFood, FavoritesResponse};

/// Favorites adapter
#[derive(Debug, Clone)]
pub struct FavoritesAdapter {
    client: HttpClient,
}

impl FavoritesAdapter {
    /// Create a new favorites adapter
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Mark a food as favorite
    pub async fn add_favorite(&self, food_name: &str) -> ApiResult<Payload> {
        let options = RequestOptions::post().json(&json!({ "food_name": food_name }))?;
        let payload = self.client.call(Endpoint::Favorites, options).await?;
        info!("Added favorite {}", food_name);
        Ok(payload)
    }

    /// Unmark a favorite
    pub async fn remove_favorite(&self, food_name: &str) -> ApiResult<Payload> {
        let path = Endpoint::Favorites.path_with(food_name);
        let payload = self.client.request(&path, RequestOptions::delete()).await?;
        info!("Removed favorite {}", food_name);
        Ok(payload)
    }

    /// Favorites of the signed-in user resolved against the catalog; empty on failure
    pub async fn get_favorites(&self) -> Vec<FavoriteFood> {
        let response = match self.client.call(Endpoint::Favorites, RequestOptions::get()).await {
            Ok(payload) => serde_json::from_value::<FavoritesResponse>(payload.into_json())
                .map_err(ApiError::Decode),
            Err(e) => Err(e),
        };

        match response {
            Ok(response) if response.success => {
                let (records, skipped) = response.records();
                if skipped > 0 {
                    warn!("Skipped {} malformed favorite rows", skipped);
                }
                records
                    .iter()
                    .map(|favorite| FavoriteFood::resolve(&favorite.food_name))
                    .collect()
            }
            Ok(_) => Vec::new(),
            Err(e) => {
                error!("Failed to list favorites: {}", e);
                Vec::new()
            }
        }
    }

    /// Whether a food is a favorite; `false` on failure
    pub async fn is_favorite(&self, food_name: &str) -> bool {
        let path = Endpoint::FavoriteCheck.path_with(food_name);
        let check = match self.client.request(&path, RequestOptions::get()).await {
            Ok(payload) => serde_json::from_value::<FavoriteCheck>(payload.into_json())
                .map_err(ApiError::Decode),
            Err(e) => Err(e),
        };

        match check {
            Ok(check) => check.is_favorite,
            Err(e) => {
                error!("Failed to check favorite {}: {}", food_name, e);
                false
            }
        }
    }

    /// Check many names concurrently; one entry per distinct name
    pub async fn check_favorites<I, S>(&self, food_names: I) -> HashMap<String, bool>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let distinct: Vec<String> = food_names
            .into_iter()
            .map(Into::into)
            .filter(|name| seen.insert(name.clone()))
            .collect();

        stream::iter(distinct)
            .map(|name| async move {
                let favorite = self.is_favorite(&name).await;
                (name, favorite)
            })
            .buffer_unordered(self.client.config().max_concurrency)
            .collect::<HashMap<_, _>>()
            .await
    }
}
