//! Common library for the oneul client
//!
//! This crate provides the pieces every API adapter builds on: endpoint
//! configuration, the error taxonomy, key-value storage, the session
//! context and the HTTP request primitive.
//!
//! ```rust,no_run
//! use common::{ApiConfig, HttpClient, RequestOptions, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::from_env()?;
//!     let client = HttpClient::new(config, Session::new())?;
//!     let health = client.request("/api/health", RequestOptions::get()).await?;
//!     println!("Health check: {:?}", health);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod session;
pub mod storage;
pub mod telemetry;

pub use crate::config::{ApiConfig, Endpoint};
pub use error::{ApiError, ApiResult};
pub use http::{HttpClient, Payload, RequestOptions};
pub use session::{Session, UserSnapshot};
pub use storage::Store;
