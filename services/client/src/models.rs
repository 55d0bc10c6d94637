//! API models for request and response payloads

pub mod favorite;
pub mod nutrition;
pub mod recipe;
pub mod recommendation;
pub mod sync;
pub mod user;

pub use favorite::{FavoriteCheck, FavoriteFood, FavoriteRecord, FavoritesResponse};
pub use nutrition::{NutritionInput, NutritionQuery, NutritionRecord, NutritionSearch, SavedNutrition};
pub use recipe::RecipeLookup;
pub use recommendation::{PLACEHOLDER_IMAGE_URL, RecommendationItem, RecommendationOutcome};
pub use sync::{SyncSummary, SyncTarget};
pub use user::{AuthResponse, LoginRequest, SignupForm, SignupRequest};
