//! HTTP client for the food-recommendation API
//!
//! One call, one attempt: no retries, no caching. Every outcome is either a
//! decoded `Payload` or an `ApiError` whose variant tells transport failures
//! apart from error statuses.

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::config::{ApiConfig, Endpoint};
use crate::error::{ApiError, ApiResult};
use crate::session::Session;

/// Decoded success body
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    /// JSON value, with text bodies wrapped as a JSON string
    pub fn into_json(self) -> Value {
        match self {
            Payload::Json(value) => value,
            Payload::Text(text) => Value::String(text),
        }
    }

    /// Borrow the JSON value, if the body was JSON
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }
}

/// Per-request options; everything is optional and the method defaults to GET
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
}

impl RequestOptions {
    /// GET with no body
    pub fn get() -> Self {
        Self::default()
    }

    /// POST with no body
    pub fn post() -> Self {
        Self {
            method: Method::POST,
            ..Self::default()
        }
    }

    /// DELETE with no body
    pub fn delete() -> Self {
        Self {
            method: Method::DELETE,
            ..Self::default()
        }
    }

    /// Attach a JSON body
    pub fn json<T: Serialize>(mut self, body: &T) -> ApiResult<Self> {
        self.body = Some(serde_json::to_value(body).map_err(ApiError::Encode)?);
        Ok(self)
    }

    /// Append a query pair
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Set a header, replacing the default of the same name
    pub fn header(mut self, name: reqwest::header::HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Shared client; cloning is cheap
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    config: Arc<ApiConfig>,
    session: Session,
}

impl HttpClient {
    /// Build a client from an explicit config and session context
    pub fn new(config: ApiConfig, session: Session) -> ApiResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        let inner = builder
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            inner,
            config: Arc::new(config),
            session,
        })
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Session context shared with the adapters
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Default headers merged with the caller's; the caller wins on conflict
    fn merged_headers(&self, overrides: &HeaderMap) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in self.session.auth_headers().iter() {
            headers.insert(name.clone(), value.clone());
        }
        for (name, value) in overrides.iter() {
            headers.insert(name.clone(), value.clone());
        }
        headers
    }

    /// Perform one request against a path relative to the base URL
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> ApiResult<Payload> {
        let url = self.config.url(endpoint);
        debug!("{} {}", options.method, url);

        let mut request = self
            .inner
            .request(options.method.clone(), &url)
            .headers(self.merged_headers(&options.headers));

        if !options.query.is_empty() {
            request = request.query(&options.query);
        }

        if let Some(body) = &options.body {
            request = request.body(body.to_string());
        }

        let response = request.send().await.map_err(|e| {
            error!("API request error for {}: {}", url, e);
            ApiError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = status_error(status, &body);
            error!("API request error for {}: {}", url, err);
            return Err(err);
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains("application/json"));

        let bytes = response.bytes().await.map_err(|e| {
            error!("API response read error for {}: {}", url, e);
            ApiError::Transport(e)
        })?;

        if is_json {
            let value = serde_json::from_slice(&bytes).map_err(ApiError::Decode)?;
            Ok(Payload::Json(value))
        } else {
            Ok(Payload::Text(String::from_utf8_lossy(&bytes).into_owned()))
        }
    }

    /// Request a named endpoint
    pub async fn call(&self, endpoint: Endpoint, options: RequestOptions) -> ApiResult<Payload> {
        self.request(endpoint.path(), options).await
    }
}

/// Map a non-2xx response to a status error
///
/// A JSON `detail` becomes the message; plain text is used verbatim; an
/// empty body or JSON without `detail` falls back to the status line.
pub fn status_error(status: StatusCode, body: &str) -> ApiError {
    let generic = format!(
        "API error: {} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or_default()
    )
    .trim_end()
    .to_string();

    let detail = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => match map.get("detail") {
            None | Some(Value::Null) => None,
            Some(Value::String(detail)) if detail.is_empty() => None,
            Some(Value::String(detail)) => Some(detail.clone()),
            Some(other) => Some(other.to_string()),
        },
        Ok(_) => None,
        Err(_) if body.is_empty() => None,
        Err(_) => Some(body.to_string()),
    };

    ApiError::Status {
        status: status.as_u16(),
        message: detail.clone().unwrap_or(generic),
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;

    #[test]
    fn json_detail_becomes_message() {
        let err = status_error(StatusCode::CONFLICT, r#"{"detail":"username already in use"}"#);
        assert_eq!(err.to_string(), "username already in use");
        assert!(matches!(
            err,
            ApiError::Status { status: 409, detail: Some(ref d), .. } if d == "username already in use"
        ));
    }

    #[test]
    fn plain_text_body_is_used_verbatim() {
        let err = status_error(StatusCode::BAD_GATEWAY, "upstream timed out");
        assert_eq!(err.to_string(), "upstream timed out");
    }

    #[test]
    fn empty_body_falls_back_to_status_line() {
        let err = status_error(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(err.to_string(), "API error: 500 Internal Server Error");
    }

    #[test]
    fn json_without_detail_falls_back_to_status_line() {
        let err = status_error(StatusCode::NOT_FOUND, r#"{"error":"nope"}"#);
        assert_eq!(err.to_string(), "API error: 404 Not Found");
    }

    #[test]
    fn structured_detail_is_rendered_as_json() {
        let err = status_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"detail":[{"loc":["body","fat"],"msg":"field required"}]}"#,
        );
        assert_eq!(
            err.to_string(),
            r#"[{"loc":["body","fat"],"msg":"field required"}]"#
        );
    }

    #[test]
    fn unserializable_body_is_an_encode_error() {
        let mut body = std::collections::HashMap::new();
        body.insert((1, 2), "fat");

        let err = RequestOptions::post().json(&body).unwrap_err();
        assert!(matches!(err, ApiError::Encode(_)));
        assert!(err.to_string().starts_with("Failed to encode request body"));
    }

    #[test]
    fn caller_headers_override_defaults() {
        let session = Session::new();
        session.begin("tok", None);
        let client = HttpClient::new(ApiConfig::default(), session).unwrap();

        let overrides = RequestOptions::get()
            .header(CONTENT_TYPE, HeaderValue::from_static("text/plain"))
            .headers;
        let headers = client.merged_headers(&overrides);

        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "text/plain");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer tok");
    }
}
