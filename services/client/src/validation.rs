//! Input validation utilities
//!
//! Every check here runs before any request is sent.

use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::models::{NutritionInput, NutritionQuery, SignupForm};

/// Upper bound for protein, in grams
pub const MAX_PROTEIN: f64 = 200.0;
/// Upper bound for carbohydrates, in grams
pub const MAX_CARBS: f64 = 500.0;
/// Upper bound for fat, in grams
pub const MAX_FAT: f64 = 100.0;

/// Validate macro targets and turn them into a query
pub fn validate_nutrition_data(input: &NutritionInput) -> Result<NutritionQuery, String> {
    let (Some(protein), Some(carbs), Some(fat)) = (input.protein, input.carbs, input.fat) else {
        return Err("Please enter protein, carbs and fat".to_string());
    };

    if [protein, carbs, fat].iter().any(|v| v.is_nan()) {
        return Err("Please enter protein, carbs and fat".to_string());
    }

    if protein < 0.0 || carbs < 0.0 || fat < 0.0 {
        return Err("Nutrient values must be 0 or greater".to_string());
    }

    if protein > MAX_PROTEIN || carbs > MAX_CARBS || fat > MAX_FAT {
        return Err(format!(
            "Nutrient values are too large (protein <= {}, carbs <= {}, fat <= {})",
            MAX_PROTEIN, MAX_CARBS, MAX_FAT
        ));
    }

    Ok(NutritionQuery {
        protein,
        carbs,
        fat,
    })
}

/// Validate that the mandatory signup fields are filled in
pub fn validate_required(form: &SignupForm) -> Result<(), String> {
    let confirm_missing = form
        .password_confirm
        .as_deref()
        .is_none_or(|confirm| confirm.is_empty());

    if form.username.is_empty()
        || form.password.is_empty()
        || confirm_missing
        || form.email.is_empty()
        || form.name.is_empty()
    {
        return Err("Please fill in all required fields".to_string());
    }

    Ok(())
}

/// Validate username
pub fn validate_username(username: &str) -> Result<(), String> {
    static USERNAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = USERNAME_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9_]{4,20}$").expect("Failed to compile username regex")
    });

    if !regex.is_match(username) {
        return Err(
            "Username must be 4-20 characters of letters, numbers and underscores".to_string(),
        );
    }

    Ok(())
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// Password strength bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

/// Score out of five and its bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordStrength {
    pub level: StrengthLevel,
    pub score: u8,
}

/// Score a password on length, lowercase, uppercase, digits and symbols
pub fn password_strength(password: &str) -> PasswordStrength {
    let checks = [
        password.chars().count() >= 8,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    let score = checks.iter().filter(|passed| **passed).count() as u8;

    let level = match score {
        0..=2 => StrengthLevel::Weak,
        3 => StrengthLevel::Medium,
        _ => StrengthLevel::Strong,
    };

    PasswordStrength { level, score }
}

/// Validate password confirmation and strength
pub fn validate_password(password: &str, confirm: Option<&str>) -> Result<(), String> {
    if confirm != Some(password) {
        return Err("Passwords do not match".to_string());
    }

    if password_strength(password).level == StrengthLevel::Weak {
        return Err("Password is too weak, please choose a stronger one".to_string());
    }

    Ok(())
}

/// Validate a `YYYY-MM-DD` birth date; the age in years must be 13 to 120
pub fn validate_birth_date(date: &str, today: NaiveDate) -> Result<(), String> {
    let birth = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| "Invalid birth date".to_string())?;

    let age = today.year() - birth.year();
    if !(13..=120).contains(&age) {
        return Err("Invalid birth date".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn nutrition_within_bounds_is_accepted() {
        let query = validate_nutrition_data(&NutritionInput::new(25.0, 40.0, 10.0)).unwrap();
        assert_eq!(
            query,
            NutritionQuery {
                protein: 25.0,
                carbs: 40.0,
                fat: 10.0
            }
        );

        assert!(validate_nutrition_data(&NutritionInput::new(0.0, 0.0, 0.0)).is_ok());
        assert!(validate_nutrition_data(&NutritionInput::new(200.0, 500.0, 100.0)).is_ok());
    }

    #[test]
    fn nutrition_missing_negative_or_too_large_is_rejected() {
        let missing = NutritionInput {
            protein: Some(10.0),
            carbs: None,
            fat: Some(5.0),
        };
        assert!(validate_nutrition_data(&missing).is_err());
        assert!(validate_nutrition_data(&NutritionInput::parse("10", "abc", "5")).is_err());
        assert!(validate_nutrition_data(&NutritionInput::new(-1.0, 40.0, 10.0)).is_err());
        assert!(validate_nutrition_data(&NutritionInput::new(201.0, 40.0, 10.0)).is_err());
        assert!(validate_nutrition_data(&NutritionInput::new(25.0, 501.0, 10.0)).is_err());
        assert!(validate_nutrition_data(&NutritionInput::new(25.0, 40.0, 100.5)).is_err());
        assert!(validate_nutrition_data(&NutritionInput::new(f64::INFINITY, 40.0, 10.0)).is_err());
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("minji_01").is_ok());
        assert!(validate_username("abc").is_err());
        assert!(validate_username("a".repeat(21).as_str()).is_err());
        assert!(validate_username("min ji").is_err());
        assert!(validate_username("민지민지").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("minji@example.com").is_ok());
        assert!(validate_email("minji@example").is_err());
        assert!(validate_email("min ji@example.com").is_err());
    }

    #[test]
    fn test_password_strength() {
        assert_eq!(password_strength("abc").level, StrengthLevel::Weak);
        assert_eq!(password_strength("abcdefgh1").level, StrengthLevel::Medium);
        assert_eq!(password_strength("Abcdefgh1!").score, 5);
        assert_eq!(password_strength("Abcdefgh1!").level, StrengthLevel::Strong);
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("Abcdefgh1", Some("Abcdefgh1")).is_ok());
        assert!(validate_password("Abcdefgh1", Some("Abcdefgh2")).is_err());
        assert!(validate_password("abc", Some("abc")).is_err());
        assert!(validate_password("Abcdefgh1", None).is_err());
    }

    #[test]
    fn test_validate_birth_date() {
        assert!(validate_birth_date("2000-01-01", today()).is_ok());
        assert!(validate_birth_date("2020-01-01", today()).is_err());
        assert!(validate_birth_date("1900-01-01", today()).is_err());
        assert!(validate_birth_date("01/01/2000", today()).is_err());
    }

    #[test]
    fn test_validate_required() {
        let mut form = SignupForm {
            username: "minji_01".to_string(),
            email: "minji@example.com".to_string(),
            password: "Abcdefgh1!".to_string(),
            password_confirm: Some("Abcdefgh1!".to_string()),
            name: "김민지".to_string(),
            ..SignupForm::default()
        };
        assert!(validate_required(&form).is_ok());

        form.password_confirm = None;
        assert!(validate_required(&form).is_err());
    }
}
