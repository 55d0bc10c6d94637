//! Client configuration and the endpoint path table
//!
//! Configuration is layered through the `config` crate: built-in defaults,
//! then an optional `oneul.toml` next to the working directory, then
//! `ONEUL_*` environment variables.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{ApiError, ApiResult};

/// Production API host
pub const DEFAULT_BASE_URL: &str = "https://oneul.site";

/// Default upper bound on concurrent lookups during fan-out
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// Default directory of the durable key-value file
pub const DEFAULT_STORE_DIR: &str = ".oneul";

/// Named backend endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Health,
    RecommendMenu,
    ImageByName,
    SearchNutrition,
    SyncNutrition,
    SyncRecipes,
    SyncImages,
    Signup,
    Login,
    CurrentUser,
    Favorites,
    FavoriteCheck,
    Recipes,
    ImageProxy,
}

impl Endpoint {
    /// Every endpoint, in path-table order
    pub const ALL: [Endpoint; 14] = [
        Endpoint::Health,
        Endpoint::RecommendMenu,
        Endpoint::ImageByName,
        Endpoint::SearchNutrition,
        Endpoint::SyncNutrition,
        Endpoint::SyncRecipes,
        Endpoint::SyncImages,
        Endpoint::Signup,
        Endpoint::Login,
        Endpoint::CurrentUser,
        Endpoint::Favorites,
        Endpoint::FavoriteCheck,
        Endpoint::Recipes,
        Endpoint::ImageProxy,
    ];

    /// Path relative to the base URL
    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::Health => "/api/health",
            Endpoint::RecommendMenu => "/api/recommend/menu",
            Endpoint::ImageByName => "/api/images/by-name",
            Endpoint::SearchNutrition => "/api/search/nutrition",
            Endpoint::SyncNutrition => "/api/sync/nutrition",
            Endpoint::SyncRecipes => "/api/sync/recipes",
            Endpoint::SyncImages => "/api/sync/images",
            Endpoint::Signup => "/api/auth/signup",
            Endpoint::Login => "/api/auth/login",
            Endpoint::CurrentUser => "/api/auth/me",
            Endpoint::Favorites => "/api/favorites",
            Endpoint::FavoriteCheck => "/api/favorites/check",
            Endpoint::Recipes => "/api/recipes",
            Endpoint::ImageProxy => "/img-proxy",
        }
    }

    /// Name used by callers that address endpoints by string
    pub const fn name(self) -> &'static str {
        match self {
            Endpoint::Health => "health",
            Endpoint::RecommendMenu => "recommendMenu",
            Endpoint::ImageByName => "imageByName",
            Endpoint::SearchNutrition => "searchNutrition",
            Endpoint::SyncNutrition => "syncNutrition",
            Endpoint::SyncRecipes => "syncRecipes",
            Endpoint::SyncImages => "syncImages",
            Endpoint::Signup => "signup",
            Endpoint::Login => "login",
            Endpoint::CurrentUser => "getCurrentUser",
            Endpoint::Favorites => "favorites",
            Endpoint::FavoriteCheck => "checkFavorite",
            Endpoint::Recipes => "getRecipe",
            Endpoint::ImageProxy => "imageProxy",
        }
    }

    /// Path with one percent-encoded trailing segment, e.g. `/api/recipes/<name>`
    pub fn path_with(self, segment: &str) -> String {
        format!("{}/{}", self.path(), urlencoding::encode(segment))
    }
}

impl FromStr for Endpoint {
    type Err = ApiError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Endpoint::ALL
            .into_iter()
            .find(|endpoint| endpoint.name() == name)
            .ok_or_else(|| ApiError::UnknownEndpoint(name.to_string()))
    }
}

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL without trailing slash (e.g., "https://oneul.site")
    pub base_url: String,
    /// Per-request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
    /// Maximum number of lookups in flight during a fan-out
    pub max_concurrency: usize,
    /// Directory holding the durable key-value file
    pub store_dir: PathBuf,
}

/// Shape of the layered configuration sources
#[derive(Debug, Deserialize)]
struct RawConfig {
    base_url: String,
    #[serde(default)]
    request_timeout_secs: Option<u64>,
    max_concurrency: i64,
    store_dir: String,
}

impl ApiConfig {
    /// Create a config pointing at `base_url` with default limits
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_base_url(base_url.into()),
            request_timeout: None,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            store_dir: PathBuf::from(DEFAULT_STORE_DIR),
        }
    }

    /// Create a new ApiConfig from defaults, `oneul.toml` and environment variables
    ///
    /// # Environment Variables
    /// - `ONEUL_BASE_URL`: API base URL (default: "https://oneul.site")
    /// - `ONEUL_REQUEST_TIMEOUT_SECS`: per-request timeout in seconds (default: none)
    /// - `ONEUL_MAX_CONCURRENCY`: fan-out limit, at least 1 (default: 8)
    /// - `ONEUL_STORE_DIR`: durable store directory (default: ".oneul")
    pub fn from_env() -> ApiResult<Self> {
        let raw: RawConfig = ::config::Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("max_concurrency", DEFAULT_MAX_CONCURRENCY as i64)?
            .set_default("store_dir", DEFAULT_STORE_DIR)?
            .add_source(::config::File::with_name("oneul").required(false))
            .add_source(::config::Environment::with_prefix("ONEUL").try_parsing(true))
            .build()?
            .try_deserialize()?;

        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> ApiResult<Self> {
        if raw.base_url.trim().is_empty() {
            return Err(ApiError::Config("base_url must not be empty".to_string()));
        }

        if raw.max_concurrency < 1 {
            return Err(ApiError::Config(format!(
                "max_concurrency must be at least 1, got {}",
                raw.max_concurrency
            )));
        }

        Ok(Self {
            base_url: trim_base_url(raw.base_url),
            request_timeout: raw.request_timeout_secs.map(Duration::from_secs),
            max_concurrency: usize::try_from(raw.max_concurrency)
                .map_err(|e| ApiError::Config(format!("Invalid max_concurrency: {}", e)))?,
            store_dir: PathBuf::from(raw.store_dir),
        })
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Set the fan-out limit (values below 1 are raised to 1)
    pub fn with_max_concurrency(mut self, limit: usize) -> Self {
        self.max_concurrency = limit.max(1);
        self
    }

    /// Absolute URL of a named endpoint
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        self.url(endpoint.path())
    }

    /// Absolute URL of a relative path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Durable store file path
    pub fn store_path(&self) -> PathBuf {
        self.store_dir.join("local_storage.json")
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn trim_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}
