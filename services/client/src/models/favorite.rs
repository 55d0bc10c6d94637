//! Favorite models

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::{self, Food};

/// Association between the signed-in user and a food name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    pub food_name: String,
}

/// Response of the favorites listing; rows stay raw until `records`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FavoritesResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub favorites: Option<Vec<Value>>,
}

impl FavoritesResponse {
    /// Rows that decode as a favorite, in order, and the number skipped
    pub fn records(&self) -> (Vec<FavoriteRecord>, usize) {
        let rows = self.favorites.as_deref().unwrap_or_default();
        let records: Vec<FavoriteRecord> = rows
            .iter()
            .filter_map(|row| FavoriteRecord::deserialize(row).ok())
            .collect();
        let skipped = rows.len() - records.len();
        (records, skipped)
    }
}

/// Response of a single favorite check
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FavoriteCheck {
    #[serde(default)]
    pub is_favorite: bool,
}

/// A favorite ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FavoriteFood {
    /// Catalog entry with full display attributes
    Catalog(&'static Food),
    /// Name the catalog does not know
    Stub { id: String, name: String },
}

impl FavoriteFood {
    /// Resolve a favorite name against the catalog
    pub fn resolve(food_name: &str) -> Self {
        match catalog::food_by_name(food_name) {
            Some(food) => FavoriteFood::Catalog(food),
            None => FavoriteFood::Stub {
                id: food_name.to_string(),
                name: food_name.to_string(),
            },
        }
    }

    pub fn id(&self) -> &str {
        match self {
            FavoriteFood::Catalog(food) => food.id,
            FavoriteFood::Stub { id, .. } => id.as_str(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FavoriteFood::Catalog(food) => food.name,
            FavoriteFood::Stub { name, .. } => name.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn malformed_rows_are_skipped_individually() {
        let response: FavoritesResponse = serde_json::from_value(json!({
            "success": true,
            "favorites": [{"food_name": "불고기"}, {"id": 5}, "잡채", {"food_name": "비빔밥"}]
        }))
        .unwrap();

        let (records, skipped) = response.records();
        let names: Vec<_> = records.iter().map(|r| r.food_name.as_str()).collect();
        assert_eq!(names, vec!["불고기", "비빔밥"]);
        assert_eq!(skipped, 2);
    }

    #[test]
    fn resolve_prefers_catalog_entry() {
        let known = FavoriteFood::resolve("불고기");
        assert_eq!(known.id(), "bulgogi");
        assert!(matches!(known, FavoriteFood::Catalog(_)));

        let unknown = FavoriteFood::resolve("비빔밥");
        assert_eq!(
            serde_json::to_value(&unknown).unwrap(),
            json!({"id": "비빔밥", "name": "비빔밥"})
        );
    }
}
