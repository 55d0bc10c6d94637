//! Integration tests for the HTTP client
//!
//! These tests run the client against an in-process axum backend bound to
//! an ephemeral port, so status mapping and header handling are checked on
//! real HTTP exchanges.

use std::collections::HashMap;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::Query,
    http::{HeaderMap, Method, StatusCode},
    response::IntoResponse,
    routing::{any, get, post},
};
use common::{
    ApiConfig, ApiError, Endpoint, HttpClient, Payload, RequestOptions, Session,
    error::TRANSPORT_MESSAGE, telemetry,
};
use reqwest::header::{HeaderName, HeaderValue};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio_test::assert_err;

async fn spawn_backend(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn echo(
    method: Method,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
    body: String,
) -> Json<Value> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    Json(json!({
        "method": method.as_str(),
        "authorization": header("authorization"),
        "content_type": header("content-type"),
        "x_trace": header("x-trace"),
        "query": query,
        "body": body,
    }))
}

fn backend() -> Router {
    Router::new()
        .route("/echo", any(echo))
        .route("/text", get(|| async { "plain pong" }))
        .route(
            "/api/auth/signup",
            post(|| async {
                (
                    StatusCode::CONFLICT,
                    Json(json!({"detail": "username already in use"})),
                )
            }),
        )
        .route(
            "/broken",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR.into_response() }),
        )
        .route(
            "/gateway",
            get(|| async { (StatusCode::BAD_GATEWAY, "upstream unavailable") }),
        )
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                "late"
            }),
        )
        .route(
            "/bad-json",
            get(|| async { ([("content-type", "application/json")], "{not json") }),
        )
}

async fn client_for(base_url: &str, session: Session) -> HttpClient {
    telemetry::init_tracing();
    HttpClient::new(ApiConfig::new(base_url), session).unwrap()
}

#[tokio::test]
async fn get_sends_default_headers_and_decodes_json() {
    let base = spawn_backend(backend()).await;
    let client = client_for(&base, Session::new()).await;

    let payload = client
        .request("/echo", RequestOptions::get().query("name", "김치찌개"))
        .await
        .unwrap();

    let body = payload.as_json().cloned().unwrap();
    assert_eq!(body["method"], "GET");
    assert_eq!(body["content_type"], "application/json");
    assert_eq!(body["authorization"], Value::Null);
    assert_eq!(body["query"]["name"], "김치찌개");
}

#[tokio::test]
async fn bearer_token_and_caller_headers_are_sent() {
    let base = spawn_backend(backend()).await;
    let session = Session::new();
    session.begin("secret-token", None);
    let client = client_for(&base, session).await;

    let options = RequestOptions::post()
        .json(&json!({"protein": 25.0}))
        .unwrap()
        .header(
            HeaderName::from_static("x-trace"),
            HeaderValue::from_static("abc"),
        );
    let body = client.request("/echo", options).await.unwrap().into_json();

    assert_eq!(body["method"], "POST");
    assert_eq!(body["authorization"], "Bearer secret-token");
    assert_eq!(body["x_trace"], "abc");
    let sent: Value = serde_json::from_str(body["body"].as_str().unwrap()).unwrap();
    assert_eq!(sent, json!({"protein": 25.0}));
}

#[tokio::test]
async fn non_json_success_is_returned_as_text() {
    let base = spawn_backend(backend()).await;
    let client = client_for(&base, Session::new()).await;

    let payload = client.request("/text", RequestOptions::get()).await.unwrap();
    assert_eq!(payload, Payload::Text("plain pong".to_string()));
}

#[tokio::test]
async fn conflict_detail_becomes_status_error_message() {
    let base = spawn_backend(backend()).await;
    let client = client_for(&base, Session::new()).await;

    let err = assert_err!(client.call(Endpoint::Signup, RequestOptions::post()).await);
    assert_eq!(err.to_string(), "username already in use");
    assert_eq!(err.status(), Some(409));
    assert!(!err.is_transport());
}

#[tokio::test]
async fn empty_error_body_uses_status_line() {
    let base = spawn_backend(backend()).await;
    let client = client_for(&base, Session::new()).await;

    let err = assert_err!(client.request("/broken", RequestOptions::get()).await);
    assert_eq!(err.to_string(), "API error: 500 Internal Server Error");

    let err = assert_err!(client.request("/gateway", RequestOptions::get()).await);
    assert_eq!(err.to_string(), "upstream unavailable");
}

#[tokio::test]
async fn malformed_json_success_is_a_decode_error() {
    let base = spawn_backend(backend()).await;
    let client = client_for(&base, Session::new()).await;

    let err = assert_err!(client.request("/bad-json", RequestOptions::get()).await);
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let client = client_for("http://127.0.0.1:1", Session::new()).await;

    let err = assert_err!(client.call(Endpoint::Health, RequestOptions::get()).await);
    assert!(err.is_transport());
    assert_eq!(err.to_string(), TRANSPORT_MESSAGE);
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn timeout_is_reported_as_transport_error() {
    let base = spawn_backend(backend()).await;
    let config = ApiConfig::new(&base).with_timeout(Duration::from_millis(200));
    let client = HttpClient::new(config, Session::new()).unwrap();

    let err = assert_err!(client.request("/slow", RequestOptions::get()).await);
    assert!(err.is_transport());
}
