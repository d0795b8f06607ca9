//! Authentication API integration tests
//!
//! Tests for the register, login and validate-token endpoints.

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::*;

#[tokio::test]
async fn test_register_success() {
    let app = test_app().await;

    let response = post_json(
        &app,
        "/api/auth/register",
        json!({ "name": "Alice", "email": "a@x.com", "password": "secret1" }),
    )
    .await;

    assert_status!(response, StatusCode::CREATED);
    assert_eq!(response.body["message"], "User registered successfully");
    assert!(response.body["userId"].is_i64());
    assert!(response.body["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn test_register_token_validates() {
    let app = test_app().await;
    let user = register_user(&app, "Alice", "a@x.com", "secret1").await;

    let response = validate(&app, Some(&auth_header(&user.token))).await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body, json!({ "valid": true }));
}

#[tokio::test]
async fn test_register_assigns_distinct_ids() {
    let app = test_app().await;
    let alice = register_user(&app, "Alice", "a@x.com", "secret1").await;
    let bob = register_user(&app, "Bob", "b@x.com", "secret2").await;

    assert!(alice.id != bob.id);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = test_app().await;
    register_user(&app, "Alice", "a@x.com", "secret1").await;

    let response = post_json(
        &app,
        "/api/auth/register",
        json!({ "name": "Other", "email": "a@x.com", "password": "another1" }),
    )
    .await;

    assert_status!(response, StatusCode::CONFLICT);
    assert_eq!(
        response.body,
        json!({ "error": "Email already in use", "status": 409 })
    );
}

#[tokio::test]
async fn test_register_duplicate_keeps_original_password() {
    let app = test_app().await;
    let user = register_user(&app, "Alice", "a@x.com", "secret1").await;

    post_json(
        &app,
        "/api/auth/register",
        json!({ "name": "Mallory", "email": "a@x.com", "password": "hijacked" }),
    )
    .await;

    assert_status!(login(&app, &user.email, &user.password).await, StatusCode::OK);
    assert_status!(login(&app, &user.email, "hijacked").await, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_validation_lists_every_field() {
    let app = test_app().await;

    let response = post_json(
        &app,
        "/api/auth/register",
        json!({ "name": "", "email": "not-an-email", "password": "abc" }),
    )
    .await;

    assert_status!(response, StatusCode::BAD_REQUEST);
    let fields: Vec<&str> = response.body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "email", "password"]);
}

#[tokio::test]
async fn test_register_missing_fields_are_validation_errors() {
    let app = test_app().await;

    let response = post_json(&app, "/api/auth/register", json!({})).await;

    assert_status!(response, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["errors"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_register_wrong_field_type_is_bad_request() {
    let app = test_app().await;

    let response = post_json(
        &app,
        "/api/auth/register",
        json!({ "name": "A", "email": 123, "password": "secret1" }),
    )
    .await;

    assert_status!(response, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["status"], 400);
    assert_contains!(
        response.body["error"].as_str().unwrap(),
        "Invalid request body"
    );
}

#[tokio::test]
async fn test_register_password_over_byte_limit() {
    let app = test_app().await;
    let long = format!("{}X", "a".repeat(72));

    let response = post_json(
        &app,
        "/api/auth/register",
        json!({ "name": "Alice", "email": "a@x.com", "password": long }),
    )
    .await;

    assert_status!(response, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["errors"][0]["field"], "password");
}

#[tokio::test]
async fn test_login_with_long_password_sharing_a_prefix_fails() {
    let app = test_app().await;
    let password = "a".repeat(71);
    let user = register_user(&app, "Alice", "a@x.com", &password).await;

    let response = login(&app, &user.email, &format!("{}aX", password)).await;

    assert_status!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_non_object_body_is_bad_request() {
    let app = test_app().await;

    let response = post_json(&app, "/api/auth/login", json!(["a@x.com", "secret1"])).await;

    assert_status!(response, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["status"], 400);
    assert!(response.body["error"].is_string());
}

#[tokio::test]
async fn test_login_success() {
    let app = test_app().await;
    let user = register_user(&app, "Alice", "a@x.com", "secret1").await;

    let response = login(&app, &user.email, &user.password).await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["message"], "Login successful");
    assert_eq!(response.body["userId"], json!(user.id));

    let token = response.body["token"].as_str().unwrap();
    assert_status!(validate(&app, Some(&auth_header(token))).await, StatusCode::OK);
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_email_look_the_same() {
    let app = test_app().await;
    register_user(&app, "Alice", "a@x.com", "secret1").await;

    let wrong_password = login(&app, "a@x.com", "wrong-password").await;
    let unknown_email = login(&app, "nobody@x.com", "secret1").await;

    assert_status!(wrong_password, StatusCode::UNAUTHORIZED);
    assert_status!(unknown_email, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
    assert_eq!(wrong_password.body["error"], "Invalid email or password");
}

#[tokio::test]
async fn test_login_validation() {
    let app = test_app().await;

    let response = login(&app, "bad", "").await;

    assert_status!(response, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["errors"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_validate_without_header() {
    let app = test_app().await;

    let response = validate(&app, None).await;

    assert_status!(response, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body,
        json!({ "valid": false, "error": "No token provided" })
    );
}

#[tokio::test]
async fn test_validate_requires_bearer_prefix() {
    let app = test_app().await;
    let user = register_user(&app, "Alice", "a@x.com", "secret1").await;

    for header in [user.token.clone(), format!("Token {}", user.token), format!("bearer {}", user.token)] {
        let response = validate(&app, Some(&header)).await;
        assert_status!(response, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body["error"], "No token provided");
    }
}

#[tokio::test]
async fn test_validate_rejects_garbage() {
    let app = test_app().await;

    for token in ["", "garbage", "a.b.c"] {
        let response = validate(&app, Some(&auth_header(token))).await;
        assert_status!(response, StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.body,
            json!({ "valid": false, "error": "Invalid token" })
        );
    }
}

#[tokio::test]
async fn test_token_from_another_deployment_is_rejected() {
    let app = test_app().await;
    let other = show_auth::backend::auth::TokenIssuer::new(
        b"some-other-secret",
        std::time::Duration::from_secs(3600),
        std::sync::Arc::new(show_auth::backend::auth::SystemClock),
    );
    let token = assert_ok!(other.issue(1));

    let response = validate(&app, Some(&auth_header(&token))).await;

    assert_status!(response, StatusCode::UNAUTHORIZED);
    assert_contains!(response.body["error"].as_str().unwrap(), "Invalid");
}

#[tokio::test]
async fn test_health() {
    let app = test_app().await;

    let response = send(&app, Method::GET, "/health", None, None).await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body, json!("ok"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = test_app().await;

    let response = send(&app, Method::GET, "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
