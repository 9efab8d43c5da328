//! Authentication middleware
//!
//! Provides the extractor that validates the Bearer access token and
//! resolves the calling gym. Uses the pre-computed JWT keys from AppState.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Authenticated gym extracted from the access token
///
/// Every gym-scoped handler takes this extractor; the gym id in the token
/// subject is the only tenant key the handlers ever trust.
#[derive(Debug, Clone, Copy)]
pub struct AuthGym {
    pub gym_id: i32,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthGym
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // Extract Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".to_string()))?;

        // Check Bearer prefix
        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Invalid authorization format".to_string()))?;

        let claims = app_state
            .jwt()
            .validate_access_token(token)
            .map_err(|e| ApiError::Unauthorized(format!("Invalid token: {}", e)))?;

        let gym_id = claims
            .gym_id()
            .map_err(|_| ApiError::Unauthorized("Invalid gym ID in token".to_string()))?;

        Ok(AuthGym { gym_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_gym_debug() {
        let gym = AuthGym { gym_id: 3 };
        let debug_str = format!("{:?}", gym);
        assert!(debug_str.contains("AuthGym"));
    }
}
