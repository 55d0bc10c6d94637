//! Recommendation models

use serde::{Deserialize, Serialize};

use super::nutrition::NutritionQuery;

/// Image shown when neither the backend nor a lookup produced one
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://via.placeholder.com/400x300/2d3748/ffffff?text=Food+Image";

/// Message returned when the recommendation call itself failed
pub const RECOMMENDATION_FAILED_MESSAGE: &str =
    "Failed to fetch recommendations (server unreachable or database error).";

/// One recommended menu in canonical shape
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationItem {
    pub name: String,
    pub image_url: Option<String>,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
}

impl RecommendationItem {
    /// Item with only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// True when a non-empty image URL is set
    pub fn has_image(&self) -> bool {
        self.image_url.as_deref().is_some_and(|url| !url.is_empty())
    }

    /// Image URL, or the placeholder
    pub fn image_or_placeholder(&self) -> &str {
        self.image_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE_URL)
    }
}

/// Result handed to the UI; failures are folded into `success: false`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationOutcome {
    pub success: bool,
    pub recommendations: Vec<RecommendationItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RecommendationOutcome {
    pub fn succeeded(recommendations: Vec<RecommendationItem>, nutrition: NutritionQuery) -> Self {
        Self {
            success: true,
            recommendations,
            nutrition: Some(nutrition),
            message: None,
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            recommendations: Vec::new(),
            nutrition: None,
            message: Some(RECOMMENDATION_FAILED_MESSAGE.to_string()),
        }
    }
}
