//! Sync models

use common::Endpoint;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Batch-ingestion job on the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncTarget {
    Nutrition,
    Recipes,
    Images,
}

impl SyncTarget {
    pub const fn endpoint(self) -> Endpoint {
        match self {
            SyncTarget::Nutrition => Endpoint::SyncNutrition,
            SyncTarget::Recipes => Endpoint::SyncRecipes,
            SyncTarget::Images => Endpoint::SyncImages,
        }
    }

    /// Operation label used in translated errors
    pub const fn operation(self) -> &'static str {
        match self {
            SyncTarget::Nutrition => "Nutrition database sync",
            SyncTarget::Recipes => "Recipe database sync",
            SyncTarget::Images => "Image database sync",
        }
    }
}

/// Summary counts reported by a sync job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages_fetched: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SyncSummary {
    /// Summary of a finished job; bodies that are not a summary object are
    /// kept whole under `extra["response"]`
    pub fn from_response(body: Value) -> Self {
        match body {
            Value::Object(map) => match serde_json::from_value(Value::Object(map.clone())) {
                Ok(summary) => summary,
                Err(_) => Self {
                    extra: map,
                    ..Self::default()
                },
            },
            other => {
                let mut extra = Map::new();
                extra.insert("response".to_string(), other);
                Self {
                    extra,
                    ..Self::default()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn counts_are_read_and_unknown_fields_kept() {
        let summary =
            SyncSummary::from_response(json!({"saved": 200, "pages_fetched": 2, "source": "api"}));
        assert_eq!(summary.saved, Some(200));
        assert_eq!(summary.pages_fetched, Some(2));
        assert_eq!(summary.estimated_total, None);
        assert_eq!(summary.extra["source"], "api");
    }

    #[test]
    fn non_object_bodies_are_kept_as_response() {
        for body in [json!("sync started"), json!(""), Value::Null, json!([1, 2])] {
            let summary = SyncSummary::from_response(body.clone());
            assert_eq!(summary.saved, None);
            assert_eq!(summary.extra["response"], body);
        }
    }

    #[test]
    fn mistyped_counts_keep_the_raw_object() {
        let summary = SyncSummary::from_response(json!({"saved": "many"}));
        assert_eq!(summary.saved, None);
        assert_eq!(summary.extra["saved"], "many");
    }
}
