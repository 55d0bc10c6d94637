//! Nutrition adapter: backend search and the per-user local history

use chrono::Utc;
use common::{ApiError, ApiResult, Endpoint, HttpClient, RequestOptions, Store};
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use crate::models::{NutritionQuery, NutritionRecord, NutritionSearch, SavedNutrition};

/// Band width used when the caller gives none
pub const DEFAULT_TOLERANCE: f64 = 5.0;

/// Nutrition adapter
#[derive(Debug, Clone)]
pub struct NutritionAdapter {
    client: HttpClient,
    local: Store,
}

impl NutritionAdapter {
    /// Create a nutrition adapter writing its history to `local`
    pub fn new(client: HttpClient, local: Store) -> Self {
        Self { client, local }
    }

    /// Search foods whose macros fall within `tolerance` of the targets
    pub async fn search_nutrition(
        &self,
        carb: f64,
        protein: f64,
        fat: f64,
        tolerance: Option<f64>,
    ) -> ApiResult<NutritionSearch> {
        let options = RequestOptions::get()
            .query("carb", carb)
            .query("protein", protein)
            .query("fat", fat)
            .query("tolerance", tolerance.unwrap_or(DEFAULT_TOLERANCE));

        let payload = self
            .client
            .call(Endpoint::SearchNutrition, options)
            .await
            .map_err(|e| {
                error!("Nutrition search failed: {}", e);
                ApiError::operation("Nutrition search", e)
            })?;

        let body = payload.into_json();
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty());

        Ok(match message {
            Some(message) => NutritionSearch::Message(message.to_string()),
            None => NutritionSearch::Matches(body),
        })
    }

    fn history_key(user_id: &str) -> String {
        format!("nutrition_{}", user_id)
    }

    /// Append a record to the user's history
    pub fn save_nutrition_data(&self, user_id: &str, query: NutritionQuery) -> SavedNutrition {
        let key = Self::history_key(user_id);
        let mut history: Vec<NutritionRecord> = self.local.get_or(&key, Vec::new());

        let record = NutritionRecord {
            id: format!("nutrition_{}", Uuid::new_v4()),
            user_id: user_id.to_string(),
            protein: query.protein,
            carbs: query.carbs,
            fat: query.fat,
            created_at: Utc::now(),
        };
        history.push(record.clone());

        let persisted = self.local.set(&key, &history);
        if persisted {
            info!("Saved nutrition record {} for user {}", record.id, user_id);
        }

        SavedNutrition { persisted, record }
    }

    /// Every saved record of the user, oldest first
    pub fn get_nutrition_data(&self, user_id: &str) -> Vec<NutritionRecord> {
        self.local.get_or(&Self::history_key(user_id), Vec::new())
    }

    /// Most recently inserted record
    pub fn get_latest_nutrition_data(&self, user_id: &str) -> Option<NutritionRecord> {
        self.get_nutrition_data(user_id).pop()
    }
}
