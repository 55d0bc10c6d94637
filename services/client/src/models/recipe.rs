//! Recipe models

use serde_json::{Map, Value};

use crate::catalog::{self, Food};

/// Message of a recipe that could not be found anywhere
pub const RECIPE_NOT_FOUND_MESSAGE: &str = "Recipe information could not be found.";

/// Keys under which a resolved image URL is exposed to consumers
pub const IMAGE_KEYS: [&str; 3] = ["image_url", "imageUrl", "image"];

/// Outcome of a recipe lookup; every variant is a normal result
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeLookup {
    /// Full detail from the backend
    Found(Map<String, Value>),
    /// Backend detail unavailable, but an image was found by name
    Degraded { name: String, image_url: String },
    /// Backend detail unavailable, served from the static catalog
    Catalog(&'static Food),
    /// Nothing known beyond the requested name
    NotFound { name: String, message: String },
}

impl RecipeLookup {
    /// Catalog entry whose id or name is `key`
    pub fn from_catalog(key: &str) -> Option<Self> {
        catalog::food_by_id(key)
            .or_else(|| catalog::food_by_name(key))
            .map(RecipeLookup::Catalog)
    }

    pub fn not_found(name: &str) -> Self {
        RecipeLookup::NotFound {
            name: name.to_string(),
            message: RECIPE_NOT_FOUND_MESSAGE.to_string(),
        }
    }

    /// Recipe name, when known
    pub fn name(&self) -> Option<&str> {
        match self {
            RecipeLookup::Found(detail) => detail.get("name").and_then(Value::as_str),
            RecipeLookup::Catalog(food) => Some(food.name),
            RecipeLookup::Degraded { name, .. } | RecipeLookup::NotFound { name, .. } => {
                Some(name.as_str())
            }
        }
    }

    /// Resolved image URL, when any
    pub fn image_url(&self) -> Option<&str> {
        match self {
            RecipeLookup::Found(detail) => image_of(detail),
            RecipeLookup::Degraded { image_url, .. } => Some(image_url.as_str()),
            RecipeLookup::Catalog(food) => food.image,
            RecipeLookup::NotFound { .. } => None,
        }
    }

    /// JSON object with the image exposed under every alias
    pub fn into_json(self) -> Value {
        match self {
            RecipeLookup::Found(detail) => Value::Object(detail),
            RecipeLookup::Degraded { name, image_url } => {
                let mut map = Map::new();
                map.insert("name".to_string(), Value::String(name));
                insert_image_aliases(&mut map, &image_url);
                Value::Object(map)
            }
            RecipeLookup::Catalog(food) => {
                let mut map = match serde_json::to_value(food) {
                    Ok(Value::Object(map)) => map,
                    _ => {
                        let mut map = Map::new();
                        map.insert("name".to_string(), Value::String(food.name.to_string()));
                        map
                    }
                };
                if let Some(url) = food.image {
                    insert_image_aliases(&mut map, url);
                }
                Value::Object(map)
            }
            RecipeLookup::NotFound { name, message } => {
                let mut map = Map::new();
                map.insert("name".to_string(), Value::String(name));
                map.insert("message".to_string(), Value::String(message));
                Value::Object(map)
            }
        }
    }
}

/// First non-empty image URL among the aliases
pub fn image_of(detail: &Map<String, Value>) -> Option<&str> {
    IMAGE_KEYS
        .iter()
        .filter_map(|key| detail.get(*key).and_then(Value::as_str))
        .find(|url| !url.is_empty())
}

/// Write `url` under every image alias
pub fn insert_image_aliases(detail: &mut Map<String, Value>, url: &str) {
    for key in IMAGE_KEYS {
        detail.insert(key.to_string(), Value::String(url.to_string()));
    }
}
