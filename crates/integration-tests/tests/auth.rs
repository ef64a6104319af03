//! Account flows: signup, login, current user, and bearer token checks.

#![allow(clippy::unwrap_used)]

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use emporium_integration_tests::{TestApp, token_of};
use serde_json::json;

#[tokio::test]
async fn test_signup_returns_token_and_public_user() {
    let app = TestApp::new();
    let response = app
        .post(
            "/api/auth/signup",
            None,
            &json!({"email": "jane@example.com", "password": "hunter22", "name": "Jane"}),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["token"].as_str().is_some_and(|t| !t.is_empty()));
    let user = &response.body["user"];
    assert_eq!(user["email"], "jane@example.com");
    assert_eq!(user["name"], "Jane");
    assert_eq!(user["role"], "user");
    assert!(user["id"].as_str().is_some());
    assert!(user.get("password_hash").is_none());
}

#[tokio::test]
async fn test_duplicate_signup_is_rejected() {
    let app = TestApp::new();
    app.signup("dup@example.com").await;

    let response = app
        .post(
            "/api/auth/signup",
            None,
            &json!({"email": "dup@example.com", "password": "other-pass", "name": "Again"}),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.code(), "duplicate_email");
    assert_eq!(response.body["message"], "Email already registered");
}

#[tokio::test]
async fn test_signup_rejects_malformed_email() {
    let app = TestApp::new();
    let response = app
        .post(
            "/api/auth/signup",
            None,
            &json!({"email": "not-an-email", "password": "hunter22", "name": "X"}),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.code(), "validation_error");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new();
    app.signup("known@example.com").await;

    let wrong_password = app
        .post(
            "/api/auth/login",
            None,
            &json!({"email": "known@example.com", "password": "wrong"}),
        )
        .await;
    let unknown_email = app
        .post(
            "/api/auth/login",
            None,
            &json!({"email": "nobody@example.com", "password": "hunter22"}),
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
    assert_eq!(wrong_password.code(), "invalid_credentials");
}

#[tokio::test]
async fn test_signup_and_login_tokens_differ_but_share_identity() {
    let app = TestApp::new();
    let signup_token = app.signup("same@example.com").await;

    let login = app
        .post(
            "/api/auth/login",
            None,
            &json!({"email": "same@example.com", "password": "hunter22"}),
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);
    let login_token = token_of(&login);
    assert_ne!(signup_token, login_token);

    let me_a = app.get("/api/auth/me", Some(&signup_token)).await;
    let me_b = app.get("/api/auth/me", Some(&login_token)).await;
    assert_eq!(me_a.status, StatusCode::OK);
    assert_eq!(me_a.body, me_b.body);
    assert_eq!(me_a.body["email"], "same@example.com");
}

#[tokio::test]
async fn test_me_requires_a_valid_token() {
    let app = TestApp::new();

    let missing = app.get("/api/auth/me", None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);
    assert_eq!(missing.code(), "missing_token");

    let garbage = app.get("/api/auth/me", Some("not.a.token")).await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
    assert_eq!(garbage.code(), "invalid_token");

    let basic = app
        .send(
            Request::get("/api/auth/me")
                .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(basic.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_bearer_scheme_is_case_insensitive() {
    let app = TestApp::new();
    let token = app.signup("case@example.com").await;

    let response = app
        .send(
            Request::get("/api/auth/me")
                .header(header::AUTHORIZATION, format!("bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_malformed_json_is_a_validation_error() {
    let app = TestApp::new();
    let response = app
        .send(
            Request::post("/api/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.code(), "validation_error");
}
