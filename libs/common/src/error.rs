//! Custom error types for the common library
//!
//! `ApiError` is the taxonomy every adapter speaks: transport failures,
//! non-2xx statuses, client-side validation and decoding problems.
//! `StorageError` never leaves the storage layer; it is logged and
//! downgraded to a boolean there.

use thiserror::Error;

/// Fixed message reported when the server cannot be reached at all
pub const TRANSPORT_MESSAGE: &str =
    "Cannot connect to the server. Please check your network connection.";

/// Custom error type for API operations
#[derive(Error, Debug)]
pub enum ApiError {
    /// Server unreachable (DNS, refused connection, TLS, timeout)
    #[error("{}", TRANSPORT_MESSAGE)]
    Transport(#[source] reqwest::Error),

    /// The server answered with a status outside the success range
    #[error("{message}")]
    Status {
        status: u16,
        message: String,
        /// Detail string reported by the server, when there was one
        detail: Option<String>,
    },

    /// A client-side precondition failed before any request was sent
    #[error("{0}")]
    Validation(String),

    /// A success response declared JSON but did not contain it
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// An outgoing request body could not be serialized
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A higher-level operation failed; the cause is kept as the source
    #[error("{operation} failed")]
    Operation {
        operation: &'static str,
        #[source]
        source: Box<ApiError>,
    },

    /// Endpoint name not present in the path table
    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Wrap an error into a translated operation failure
    pub fn operation(operation: &'static str, source: ApiError) -> Self {
        ApiError::Operation {
            operation,
            source: Box::new(source),
        }
    }

    /// True when the server could not be reached
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    /// HTTP status of a status error
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<::config::ConfigError> for ApiError {
    fn from(err: ::config::ConfigError) -> Self {
        ApiError::Config(err.to_string())
    }
}

/// Type alias for Result with ApiError
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure inside a key-value backend
#[derive(Error, Debug)]
pub enum StorageError {
    /// Writing the value would exceed the backend quota
    #[error("Storage quota exceeded: {needed} bytes requested, {limit} allowed")]
    QuotaExceeded { needed: usize, limit: usize },

    /// Value could not be (de)serialized
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backing file could not be read or written
    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A writer panicked while holding the lock
    #[error("Storage lock poisoned")]
    Poisoned,
}

/// Type alias for Result with StorageError
pub type StorageResult<T> = Result<T, StorageError>;
