//! Recommendation response normalization
//!
//! The recommendation endpoint has answered in several envelopes over time.
//! `normalize_recommendations` folds all of them into one canonical list.

use serde_json::{Map, Value};

use crate::models::RecommendationItem;
use crate::models::recipe::IMAGE_KEYS;

const NAME_KEYS: [&str; 3] = ["menu_name", "name", "menuName"];
const CALORIE_KEYS: [&str; 2] = ["calories", "calorie"];
const PROTEIN_KEYS: [&str; 2] = ["protein", "protein_g"];
const CARB_KEYS: [&str; 3] = ["carbs", "carbohydrate", "carbohydrate_g"];
const FAT_KEYS: [&str; 2] = ["fat", "fat_g"];

/// Normalize a raw recommendation payload.
///
/// Shapes are tried in this order:
/// 1. a bare array of items
/// 2. an object carrying `menu_name` or `image_url`, which is itself an item
/// 3. an object with a `recommendations` array
/// 4. an object with a `data` array
/// 5. any other object, taken as a single item
///
/// Null, text and other scalars yield an empty list.
pub fn normalize_recommendations(payload: &Value) -> Vec<RecommendationItem> {
    match payload {
        Value::Array(items) => normalize_items(items),
        Value::Object(map) => {
            if map.contains_key("menu_name") || map.contains_key("image_url") {
                return vec![normalize_object(map)];
            }
            if let Some(Value::Array(items)) = map.get("recommendations") {
                return normalize_items(items);
            }
            if let Some(Value::Array(items)) = map.get("data") {
                return normalize_items(items);
            }
            vec![normalize_object(map)]
        }
        _ => Vec::new(),
    }
}

fn normalize_items(items: &[Value]) -> Vec<RecommendationItem> {
    items.iter().filter_map(normalize_item).collect()
}

/// Objects map field by field, strings become a bare name, the rest is dropped
fn normalize_item(item: &Value) -> Option<RecommendationItem> {
    match item {
        Value::Object(map) => Some(normalize_object(map)),
        Value::String(name) if !name.trim().is_empty() => {
            Some(RecommendationItem::named(name.trim()))
        }
        _ => None,
    }
}

fn normalize_object(map: &Map<String, Value>) -> RecommendationItem {
    RecommendationItem {
        name: first_text(map, &NAME_KEYS).unwrap_or_default(),
        image_url: first_text(map, &IMAGE_KEYS),
        calories: first_number(map, &CALORIE_KEYS),
        protein: first_number(map, &PROTEIN_KEYS),
        carbs: first_number(map, &CARB_KEYS),
        fat: first_number(map, &FAT_KEYS),
    }
}

fn first_text(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| map.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

fn first_number(map: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .filter_map(|key| map.get(*key))
        .find_map(as_number)
}

/// JSON number, or a string holding one
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bibimbap() -> Value {
        json!({"menu_name": "비빔밥", "image_url": "https://img/bibimbap", "calorie": "560", "protein_g": 18})
    }

    #[test]
    fn envelopes_normalize_identically() {
        let expected = normalize_recommendations(&json!([bibimbap()]));
        assert_eq!(expected.len(), 1);

        assert_eq!(normalize_recommendations(&bibimbap()), expected);
        assert_eq!(
            normalize_recommendations(&json!({"recommendations": [bibimbap()]})),
            expected
        );
        assert_eq!(
            normalize_recommendations(&json!({"data": [bibimbap()]})),
            expected
        );
    }

    #[test]
    fn fields_resolve_through_aliases() {
        let items = normalize_recommendations(&json!([
            {"name": "김치찌개", "imageUrl": "https://img/kimchi", "calories": 450, "carbohydrate": "20.5", "fat_g": 25},
            {"menuName": "잡채", "image": "", "carbohydrate_g": 60, "protein": "abc"}
        ]));

        assert_eq!(items[0].name, "김치찌개");
        assert_eq!(items[0].image_url.as_deref(), Some("https://img/kimchi"));
        assert_eq!(items[0].calories, Some(450.0));
        assert_eq!(items[0].carbs, Some(20.5));
        assert_eq!(items[0].fat, Some(25.0));

        assert_eq!(items[1].name, "잡채");
        assert_eq!(items[1].image_url, None);
        assert_eq!(items[1].carbs, Some(60.0));
        assert_eq!(items[1].protein, None);
    }

    #[test]
    fn menu_name_wins_over_recommendations_key() {
        let items = normalize_recommendations(&json!({
            "menu_name": "불고기",
            "recommendations": [{"menu_name": "갈비"}]
        }));
        assert_eq!(items, vec![RecommendationItem::named("불고기")]);
    }

    #[test]
    fn unknown_object_is_one_item_and_scalars_are_empty() {
        let items = normalize_recommendations(&json!({"name": "떡볶이", "recommendations": "none"}));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "떡볶이");

        assert!(normalize_recommendations(&Value::Null).is_empty());
        assert!(normalize_recommendations(&json!("no menus today")).is_empty());
        assert!(normalize_recommendations(&json!(42)).is_empty());
    }

    #[test]
    fn array_keeps_strings_and_drops_other_scalars() {
        let items = normalize_recommendations(&json!(["된장찌개", 3, null, {"menu_name": "냉면"}]));
        let names: Vec<_> = items.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["된장찌개", "냉면"]);
    }
}
