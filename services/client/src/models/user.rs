//! User models: signup form, wire payloads and auth responses

use common::UserSnapshot;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// UI gender value → server code
const GENDER_CODES: &[(&str, &str)] = &[("male", "M"), ("female", "F"), ("other", "O")];

/// UI nationality value → server code
const NATIONALITY_CODES: &[(&str, &str)] = &[("korean", "DOMESTIC"), ("foreigner", "FOREIGN")];

/// UI cuisine preference → server code
const CUISINE_CODES: &[(&str, &str)] = &[
    ("korean", "KOR"),
    ("chinese", "CHN"),
    ("japanese", "JPN"),
    ("western", "WES"),
];

/// UI allergy value → server code
const ALLERGY_CODES: &[(&str, &str)] = &[
    ("milk", "MILK"),
    ("egg", "EGG"),
    ("peanut", "PEANUT"),
    ("nuts", "TREENUT"),
    ("gluten", "GLUTEN"),
    ("seafood", "SHELLFISH"),
    ("none", "NONE"),
];

/// Look `value` up in `table`; unmapped values pass through unchanged
fn to_code(table: &[(&str, &'static str)], value: &str) -> String {
    table
        .iter()
        .find(|(ui, _)| *ui == value)
        .map(|(_, code)| code.to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Signup form as collected by the UI
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub password_confirm: Option<String>,
    pub name: String,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub food_preferences: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
}

/// Signup payload in the server's naming and codes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub name_ko: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub food_preferences: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allergies: Vec<String>,
}

impl From<&SignupForm> for SignupRequest {
    fn from(form: &SignupForm) -> Self {
        Self {
            username: form.username.clone(),
            email: form.email.clone(),
            password: form.password.clone(),
            name_ko: form.name.clone(),
            birth_date: form.birth_date.clone(),
            gender: form.gender.as_deref().map(|g| to_code(GENDER_CODES, g)),
            nationality: form
                .nationality
                .as_deref()
                .map(|n| to_code(NATIONALITY_CODES, n)),
            food_preferences: form
                .food_preferences
                .iter()
                .map(|p| to_code(CUISINE_CODES, p))
                .collect(),
            allergies: form
                .allergies
                .iter()
                .map(|a| to_code(ALLERGY_CODES, a))
                .collect(),
        }
    }
}

impl SignupRequest {
    /// Throwaway payload used by availability checks
    pub(crate) fn availability_check(username: &str, email: &str) -> Self {
        Self {
            username: username.to_string(),
            email: email.to_string(),
            password: "test".to_string(),
            name_ko: "test".to_string(),
            birth_date: Some("2000-01-01".to_string()),
            gender: Some("M".to_string()),
            nationality: Some("DOMESTIC".to_string()),
            food_preferences: Vec::new(),
            allergies: Vec::new(),
        }
    }
}

/// Request for user login
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Response of signup and login
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserSnapshot>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AuthResponse {
    /// Token of a successful response
    pub fn session_token(&self) -> Option<&str> {
        if !self.success {
            return None;
        }
        self.token.as_deref().filter(|token| !token.is_empty())
    }
}
