//! Integration tests for authentication endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

fn unique_email(prefix: &str) -> String {
    format!("{}_{}@example.com", prefix, uuid::Uuid::new_v4())
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_signup_success() {
    let app = common::TestApp::new().await;

    let body = json!({
        "email": unique_email("signup"),
        "password": "SecurePassword123!",
        "gym_name": "Iron Temple",
        "owner_name": "Kim",
    });

    let response = app.post("/api/v1/auth/signup", &body.to_string()).await;

    assert_eq!(response.status, StatusCode::CREATED);

    let gym = response.json();
    assert_eq!(gym["gym_name"], "Iron Temple");
    // password hash never leaves the server
    assert!(gym.get("password").is_none());
    assert!(gym.get("password_hash").is_none());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_signup_duplicate_email() {
    let app = common::TestApp::new().await;

    let body = json!({
        "email": unique_email("duplicate"),
        "password": "SecurePassword123!",
        "gym_name": "Iron Temple",
        "owner_name": "Kim",
    });

    // First signup should succeed
    let response = app.post("/api/v1/auth/signup", &body.to_string()).await;
    assert_eq!(response.status, StatusCode::CREATED);

    // Second signup with same email should fail
    let response = app.post("/api/v1/auth/signup", &body.to_string()).await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_signup_invalid_email() {
    let app = common::TestApp::new().await;

    let body = json!({
        "email": "not-an-email",
        "password": "SecurePassword123!",
        "gym_name": "Iron Temple",
        "owner_name": "Kim",
    });

    let response = app.post("/api/v1/auth/signup", &body.to_string()).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_signup_weak_password() {
    let app = common::TestApp::new().await;

    let body = json!({
        "email": unique_email("weak"),
        "password": "123",
        "gym_name": "Iron Temple",
        "owner_name": "Kim",
    });

    let response = app.post("/api/v1/auth/signup", &body.to_string()).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_sets_refresh_cookie() {
    let app = common::TestApp::new().await;

    let email = unique_email("login");
    let password = "SecurePassword123!";

    let signup = json!({
        "email": email,
        "password": password,
        "gym_name": "Iron Temple",
        "owner_name": "Kim",
    });
    app.post("/api/v1/auth/signup", &signup.to_string()).await;

    let login = json!({ "email": email, "password": password });
    let response = app.post("/api/v1/auth/login", &login.to_string()).await;

    assert_eq!(response.status, StatusCode::OK);

    let body = response.json();
    assert!(!body["access_token"].as_str().unwrap().is_empty());
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["gym"]["email"], email);
    // refresh token travels only in the cookie
    assert!(body.get("refresh_token").is_none());

    let cookie = response.refresh_cookie().expect("refresh cookie missing");
    assert!(!cookie.is_empty());

    let set_cookie = response
        .headers
        .get(axum::http::header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Strict"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_wrong_password() {
    let app = common::TestApp::new().await;

    let email = unique_email("wrong_pass");
    let signup = json!({
        "email": email,
        "password": "CorrectPassword123!",
        "gym_name": "Iron Temple",
        "owner_name": "Kim",
    });
    app.post("/api/v1/auth/signup", &signup.to_string()).await;

    let login = json!({ "email": email, "password": "WrongPassword123!" });
    let response = app.post("/api/v1/auth/login", &login.to_string()).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_nonexistent_gym() {
    let app = common::TestApp::new().await;

    let login = json!({
        "email": "nonexistent@example.com",
        "password": "SomePassword123!",
    });
    let response = app.post("/api/v1/auth/login", &login.to_string()).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_refresh_with_cookie() {
    let app = common::TestApp::new().await;

    let email = unique_email("refresh");
    let password = "SecurePassword123!";
    let signup = json!({
        "email": email,
        "password": password,
        "gym_name": "Iron Temple",
        "owner_name": "Kim",
    });
    app.post("/api/v1/auth/signup", &signup.to_string()).await;

    let login = json!({ "email": email, "password": password });
    let response = app.post("/api/v1/auth/login", &login.to_string()).await;
    let cookie = response.refresh_cookie().unwrap();

    let response = app
        .request("POST", "/api/v1/auth/refresh", None, None, Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(!response.json()["access_token"].as_str().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_refresh_without_cookie() {
    let app = common::TestApp::new().await;

    let response = app.post("/api/v1/auth/refresh", "").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_refresh_with_garbage_cookie() {
    let app = common::TestApp::new().await;

    let response = app
        .request("POST", "/api/v1/auth/refresh", None, None, Some("garbage"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_logout_revokes_refresh_token() {
    let app = common::TestApp::new().await;

    let email = unique_email("logout");
    let password = "SecurePassword123!";
    let signup = json!({
        "email": email,
        "password": password,
        "gym_name": "Iron Temple",
        "owner_name": "Kim",
    });
    app.post("/api/v1/auth/signup", &signup.to_string()).await;

    let login = json!({ "email": email, "password": password });
    let response = app.post("/api/v1/auth/login", &login.to_string()).await;
    let cookie = response.refresh_cookie().unwrap();

    // Logout succeeds and clears the cookie
    let response = app
        .request("POST", "/api/v1/auth/logout", None, None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let cleared = response
        .headers
        .get(axum::http::header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(cleared.contains("Max-Age=0"));

    // The revoked token can no longer refresh
    let response = app
        .request("POST", "/api/v1/auth/refresh", None, None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_logout_without_cookie_still_succeeds() {
    let app = common::TestApp::new().await;

    let response = app.post("/api/v1/auth/logout", "").await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_protected_endpoint_with_invalid_token() {
    let app = common::TestApp::new().await;

    let fake_token =
        "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiIxMjM0NTY3ODkwIiwiZXhwIjoxfQ.invalid";

    let response = app.get_auth("/api/v1/members", fake_token).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
