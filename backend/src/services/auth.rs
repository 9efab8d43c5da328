//! Authentication service
//!
//! Signup, login, token refresh and logout for gym accounts. Password
//! hashing runs on the blocking thread pool; refresh tokens are tracked
//! server-side by SHA-256 digest so they can be revoked.

use crate::auth::{token_digest, JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{CreateGym, GymRecord, GymRepository, RefreshTokenRepository};
use chrono::{Duration, Utc};
use gymgrade_shared::types::{
    AccessTokenResponse, GymResponse, LoginRequest, LoginResponse, SignupRequest,
};
use sqlx::PgPool;
use tracing::debug;
use validator::Validate;

/// Successful login: the body response plus the refresh token the route
/// layer moves into an HTTP-only cookie
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub response: LoginResponse,
    pub refresh_token: String,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new gym account
    ///
    /// Password hashing is offloaded to the blocking thread pool.
    pub async fn signup(pool: &PgPool, req: SignupRequest) -> Result<GymResponse, ApiError> {
        req.validate().map_err(ApiError::from_validation)?;

        if GymRepository::email_exists(pool, &req.email)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict("Email already registered".to_string()));
        }

        let password_hash = PasswordService::hash_async(req.password)
            .await
            .map_err(ApiError::Internal)?;

        let gym = GymRepository::create(
            pool,
            CreateGym {
                email: req.email,
                password_hash,
                gym_name: req.gym_name,
                owner_name: req.owner_name,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(gym_response(gym))
    }

    /// Login with email and password
    ///
    /// Issues a 15-minute access token in the body and a 7-day refresh
    /// token for the cookie; the refresh token's digest is persisted so
    /// refresh/logout can verify and revoke it.
    pub async fn login(
        pool: &PgPool,
        jwt: &JwtService,
        req: LoginRequest,
    ) -> Result<LoginOutcome, ApiError> {
        let gym = GymRepository::find_by_email(pool, &req.email)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Unauthorized("Invalid email or password".to_string()))?;

        let valid = PasswordService::verify_async(req.password, gym.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::Unauthorized(
                "Invalid email or password".to_string(),
            ));
        }

        let access_token = jwt
            .generate_access_token(gym.id)
            .map_err(ApiError::Internal)?;
        let refresh_token = jwt
            .generate_refresh_token(gym.id)
            .map_err(ApiError::Internal)?;

        let expires_at = Utc::now() + Duration::seconds(jwt.refresh_token_expiry_secs());
        RefreshTokenRepository::create(pool, gym.id, &token_digest(&refresh_token), expires_at)
            .await
            .map_err(ApiError::Internal)?;

        debug!(gym_id = gym.id, "login succeeded");

        Ok(LoginOutcome {
            response: LoginResponse {
                access_token,
                token_type: "Bearer".to_string(),
                expires_in: jwt.access_token_expiry_secs(),
                gym: gym_response(gym),
            },
            refresh_token,
        })
    }

    /// Issue a new access token for a valid, unrevoked refresh token
    pub async fn refresh(
        pool: &PgPool,
        jwt: &JwtService,
        refresh_token: &str,
    ) -> Result<AccessTokenResponse, ApiError> {
        let claims = jwt
            .validate_refresh_token(refresh_token)
            .map_err(|e| ApiError::Unauthorized(format!("Invalid refresh token: {}", e)))?;

        let gym_id = claims
            .gym_id()
            .map_err(|_| ApiError::Unauthorized("Invalid gym ID in token".to_string()))?;

        let gym = GymRepository::find_by_id(pool, gym_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Unauthorized("Gym not found".to_string()))?;

        // The JWT alone is not enough; the stored digest must still be live
        RefreshTokenRepository::find_active(pool, gym.id, &token_digest(refresh_token))
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Unauthorized("Invalid refresh token".to_string()))?;

        let access_token = jwt
            .generate_access_token(gym.id)
            .map_err(ApiError::Internal)?;

        Ok(AccessTokenResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: jwt.access_token_expiry_secs(),
        })
    }

    /// Revoke the refresh token's stored digest
    ///
    /// Logout never fails: an invalid or already-revoked token still ends
    /// the session from the client's point of view.
    pub async fn logout(pool: &PgPool, jwt: &JwtService, refresh_token: &str) {
        let Ok(claims) = jwt.validate_refresh_token(refresh_token) else {
            return;
        };
        let Ok(gym_id) = claims.gym_id() else {
            return;
        };

        if let Err(e) =
            RefreshTokenRepository::revoke(pool, gym_id, &token_digest(refresh_token)).await
        {
            debug!(gym_id, "failed to revoke refresh token: {}", e);
        }
    }
}

/// Strip the password hash off a gym record
pub(crate) fn gym_response(gym: GymRecord) -> GymResponse {
    GymResponse {
        id: gym.id,
        email: gym.email,
        gym_name: gym.gym_name,
        owner_name: gym.owner_name,
        created_at: gym.created_at,
    }
}
