//! Recipe adapter

use common::{Endpoint, HttpClient, Payload, RequestOptions};
use serde_json::Value;
use tracing::{debug, error, warn};

use super::image::ImageAdapter;
use crate::models::RecipeLookup;
use crate::models::recipe::{image_of, insert_image_aliases};

/// Recipe adapter
#[derive(Debug, Clone)]
pub struct RecipeAdapter {
    client: HttpClient,
    images: ImageAdapter,
}

impl RecipeAdapter {
    /// Create a recipe adapter sharing `client` with its image lookups
    pub fn new(client: HttpClient) -> Self {
        let images = ImageAdapter::new(client.clone());
        Self { client, images }
    }

    /// Recipe detail by name; never fails
    pub async fn get_recipe_by_name(&self, name: &str) -> RecipeLookup {
        let path = Endpoint::Recipes.path_with(name);

        match self.client.request(&path, RequestOptions::get()).await {
            Ok(Payload::Json(Value::Object(detail)))
                if detail.contains_key("message") && !detail.contains_key("name") =>
            {
                warn!("No recipe detail for {}: {}", name, detail["message"]);
                self.fallback(name).await
            }
            Ok(Payload::Json(Value::Object(mut detail))) => {
                if image_of(&detail).is_none() {
                    if let Some(url) = self.images.get_image_by_name(name).await {
                        insert_image_aliases(&mut detail, &url);
                    }
                }
                RecipeLookup::Found(detail)
            }
            Ok(_) => {
                warn!("Recipe {} came back without a detail object", name);
                self.fallback(name).await
            }
            Err(e) => {
                error!("Failed to fetch recipe {}: {}", name, e);
                self.fallback(name).await
            }
        }
    }

    /// Image lookup by name, then the static catalog
    async fn fallback(&self, name: &str) -> RecipeLookup {
        match self.images.get_image_by_name(name).await {
            Some(image_url) => RecipeLookup::Degraded {
                name: name.to_string(),
                image_url,
            },
            None => RecipeLookup::from_catalog(name).unwrap_or_else(|| {
                debug!("Recipe {} not in catalog either", name);
                RecipeLookup::not_found(name)
            }),
        }
    }
}
