//! Nutrition models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Macro targets as entered; `None` means missing or not a number
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NutritionInput {
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
}

impl NutritionInput {
    /// Input with all three values present
    pub fn new(protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            protein: Some(protein),
            carbs: Some(carbs),
            fat: Some(fat),
        }
    }

    /// Parse form text; blank or non-numeric fields become `None`
    pub fn parse(protein: &str, carbs: &str, fat: &str) -> Self {
        Self {
            protein: parse_number(protein),
            carbs: parse_number(carbs),
            fat: parse_number(fat),
        }
    }
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|value| !value.is_nan())
}

/// Validated macro targets, in grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionQuery {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// One saved entry of a user's nutrition history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionRecord {
    pub id: String,
    pub user_id: String,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub created_at: DateTime<Utc>,
}

/// Result of saving a record locally
#[derive(Debug, Clone, PartialEq)]
pub struct SavedNutrition {
    /// `false` when the durable store rejected the write
    pub persisted: bool,
    pub record: NutritionRecord,
}

/// Outcome of a tolerance-banded nutrition search
#[derive(Debug, Clone, PartialEq)]
pub enum NutritionSearch {
    /// Raw matching rows, unfiltered
    Matches(Value),
    /// The server explained why nothing was returned
    Message(String),
}
