//! Authentication routes
//!
//! Signup, login, refresh and logout. The access token travels in the
//! response body; the refresh token only ever travels in an HTTP-only
//! cookie so scripts cannot read it.

use crate::config::AppConfig;
use crate::error::ApiResult;
use crate::services::AuthService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::AppendHeaders,
    routing::post,
    Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use gymgrade_shared::types::{
    AccessTokenResponse, GymResponse, LoginRequest, LoginResponse, MessageResponse, SignupRequest,
};

/// Cookie carrying the refresh token
const REFRESH_COOKIE: &str = "refresh_token";

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/refresh", post(refresh))
        .route("/logout", post(logout))
}

/// Set-Cookie value for a fresh refresh token
///
/// HttpOnly blocks script access, SameSite=Strict blocks cross-site sends,
/// Secure is added in production where HTTPS is guaranteed.
fn set_refresh_cookie(token: &str, max_age_secs: i64) -> String {
    let secure = if AppConfig::is_production() {
        "Secure; "
    } else {
        ""
    };
    format!(
        "{REFRESH_COOKIE}={token}; HttpOnly; {secure}Path=/; SameSite=Strict; Max-Age={max_age_secs}"
    )
}

/// Set-Cookie value that removes the refresh cookie
fn clear_refresh_cookie() -> String {
    let secure = if AppConfig::is_production() {
        "Secure; "
    } else {
        ""
    };
    format!("{REFRESH_COOKIE}=; HttpOnly; {secure}Path=/; SameSite=Strict; Max-Age=0")
}

/// POST /api/v1/auth/signup - Register a gym account
async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<GymResponse>)> {
    let gym = AuthService::signup(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(gym)))
}

/// POST /api/v1/auth/login - Login with email and password
///
/// Returns the access token in the body and sets the refresh token cookie.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<(
    AppendHeaders<[(axum::http::HeaderName, String); 1]>,
    Json<LoginResponse>,
)> {
    let outcome = AuthService::login(state.db(), state.jwt(), req).await?;

    let cookie = set_refresh_cookie(
        &outcome.refresh_token,
        state.jwt().refresh_token_expiry_secs(),
    );

    Ok((AppendHeaders([(SET_COOKIE, cookie)]), Json(outcome.response)))
}

/// POST /api/v1/auth/refresh - Issue a new access token
///
/// Reads the refresh token from the cookie; the stored digest must still
/// be live.
async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<Json<AccessTokenResponse>> {
    let token = jar
        .get(REFRESH_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or_else(|| {
            crate::error::ApiError::Unauthorized("Missing refresh token".to_string())
        })?;

    let response = AuthService::refresh(state.db(), state.jwt(), &token).await?;
    Ok(Json(response))
}

/// POST /api/v1/auth/logout - Revoke the refresh token and clear the cookie
///
/// Succeeds even when the cookie is absent or the token invalid.
async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<(
    AppendHeaders<[(axum::http::HeaderName, String); 1]>,
    Json<MessageResponse>,
)> {
    if let Some(cookie) = jar.get(REFRESH_COOKIE) {
        AuthService::logout(state.db(), state.jwt(), cookie.value()).await;
    }

    Ok((
        AppendHeaders([(SET_COOKIE, clear_refresh_cookie())]),
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_cookie_is_http_only_and_strict() {
        let cookie = set_refresh_cookie("tok", 604800);
        assert!(cookie.starts_with("refresh_token=tok;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.contains("Max-Age=604800"));
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        let cookie = clear_refresh_cookie();
        assert!(cookie.contains("Max-Age=0"));
    }
}
