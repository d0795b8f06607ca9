//! Authentication test helpers
//!
//! Builds the full router on an in-memory SQLite database and drives it
//! with `tower::ServiceExt::oneshot`, so no port is bound.

use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use show_auth::backend::auth::SqliteUserStore;
use show_auth::backend::create_app;
use show_auth::shared::config::MIN_HASH_COST;
use show_auth::shared::AuthConfig;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Status and decoded body of one response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Test user credentials
pub struct TestUser {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Credential config with a cheap bcrypt cost
pub fn test_config() -> AuthConfig {
    assert_ok!(AuthConfig::builder()
        .jwt_secret(TEST_SECRET)
        .token_ttl(Duration::from_secs(7 * 24 * 60 * 60))
        .hash_cost(MIN_HASH_COST)
        .build())
}

/// Fresh app with an empty user table
pub async fn test_app() -> Router {
    let store = assert_ok!(
        SqliteUserStore::connect("sqlite::memory:").await,
        "Failed to open in-memory database"
    );
    create_app(&test_config(), store)
}

/// Send one request; non-JSON bodies come back as a JSON string
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    authorization: Option<&str>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    TestResponse { status, body }
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::POST, uri, Some(body), None).await
}

/// GET /api/auth/validate-token with an optional raw Authorization value
pub async fn validate(app: &Router, authorization: Option<&str>) -> TestResponse {
    send(app, Method::GET, "/api/auth/validate-token", None, authorization).await
}

pub async fn login(app: &Router, email: &str, password: &str) -> TestResponse {
    post_json(
        app,
        "/api/auth/login",
        serde_json::json!({ "email": email, "password": password }),
    )
    .await
}

/// Register a user through the API
pub async fn register_user(app: &Router, name: &str, email: &str, password: &str) -> TestUser {
    let response = post_json(
        app,
        "/api/auth/register",
        serde_json::json!({ "name": name, "email": email, "password": password }),
    )
    .await;
    assert_status!(response, StatusCode::CREATED);

    TestUser {
        id: response.body["userId"].as_i64().unwrap(),
        email: email.to_string(),
        password: password.to_string(),
        token: response.body["token"].as_str().unwrap().to_string(),
    }
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
