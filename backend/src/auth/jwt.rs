//! JWT token generation and validation
//!
//! Provides access and refresh token management with pre-computed keys.
//! Access tokens authorize API calls for 15 minutes; refresh tokens live
//! for 7 days and are tracked server-side by digest so they can be revoked.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (gym ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Token type: "access" or "refresh"
    pub token_type: String,
    /// JWT ID, set on refresh tokens so two tokens for the same gym issued
    /// in the same second still digest differently
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

impl Claims {
    /// Parse the subject as a gym id
    pub fn gym_id(&self) -> Result<i32> {
        self.sub
            .parse::<i32>()
            .map_err(|_| anyhow::anyhow!("Invalid gym ID in token"))
    }
}

/// Pre-computed JWT keys for efficient token operations
/// These are expensive to create, so we cache them in AppState
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    /// Create new JWT keys from secret
    /// This should be called once at startup
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// JWT service configuration
#[derive(Clone)]
pub struct JwtConfig {
    pub access_token_expiry_secs: i64,
    pub refresh_token_expiry_secs: i64,
}

/// JWT service for token operations
///
/// Uses pre-computed keys to avoid expensive key derivation on every
/// request. Keys are wrapped in Arc for cheap cloning.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    config: JwtConfig,
}

impl JwtService {
    /// Create a new JWT service with pre-computed keys
    ///
    /// Call this once at application startup and store in AppState.
    pub fn new(secret: &str, access_token_expiry_secs: i64, refresh_token_expiry_secs: i64) -> Self {
        Self {
            keys: JwtKeys::new(secret),
            config: JwtConfig {
                access_token_expiry_secs,
                refresh_token_expiry_secs,
            },
        }
    }

    /// Generate an access token for a gym
    #[inline]
    pub fn generate_access_token(&self, gym_id: i32) -> Result<String> {
        self.generate_token(gym_id, "access", self.config.access_token_expiry_secs, None)
    }

    /// Generate a refresh token for a gym
    #[inline]
    pub fn generate_refresh_token(&self, gym_id: i32) -> Result<String> {
        self.generate_token(
            gym_id,
            "refresh",
            self.config.refresh_token_expiry_secs,
            Some(Uuid::new_v4().to_string()),
        )
    }

    /// Generate a token with specified type and expiry
    fn generate_token(
        &self,
        gym_id: i32,
        token_type: &str,
        expiry_secs: i64,
        jti: Option<String>,
    ) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(expiry_secs);

        let claims = Claims {
            sub: gym_id.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            token_type: token_type.to_string(),
            jti,
        };

        encode(&Header::default(), &claims, self.keys.encoding())
            .map_err(|e| anyhow::anyhow!("Failed to generate {} token: {}", token_type, e))
    }

    /// Validate a token and return claims
    #[inline]
    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, self.keys.decoding(), &Validation::default())
            .map_err(|e| anyhow::anyhow!("Invalid token: {}", e))?;

        Ok(token_data.claims)
    }

    /// Validate an access token specifically
    #[inline]
    pub fn validate_access_token(&self, token: &str) -> Result<Claims> {
        let claims = self.validate_token(token)?;
        if claims.token_type != "access" {
            return Err(anyhow::anyhow!("Not an access token"));
        }
        Ok(claims)
    }

    /// Validate a refresh token specifically
    #[inline]
    pub fn validate_refresh_token(&self, token: &str) -> Result<Claims> {
        let claims = self.validate_token(token)?;
        if claims.token_type != "refresh" {
            return Err(anyhow::anyhow!("Not a refresh token"));
        }
        Ok(claims)
    }

    /// Get access token expiry in seconds
    #[inline]
    pub fn access_token_expiry_secs(&self) -> i64 {
        self.config.access_token_expiry_secs
    }

    /// Get refresh token expiry in seconds
    #[inline]
    pub fn refresh_token_expiry_secs(&self) -> i64 {
        self.config.refresh_token_expiry_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret", 900, 604800)
    }

    #[test]
    fn test_generate_and_validate_access_token() {
        let service = create_test_service();

        let token = service.generate_access_token(7).unwrap();
        let claims = service.validate_access_token(&token).unwrap();

        assert_eq!(claims.sub, "7");
        assert_eq!(claims.gym_id().unwrap(), 7);
        assert_eq!(claims.token_type, "access");
        assert!(claims.jti.is_none());
    }

    #[test]
    fn test_generate_and_validate_refresh_token() {
        let service = create_test_service();

        let token = service.generate_refresh_token(7).unwrap();
        let claims = service.validate_refresh_token(&token).unwrap();

        assert_eq!(claims.gym_id().unwrap(), 7);
        assert_eq!(claims.token_type, "refresh");
        assert!(claims.jti.is_some());
    }

    #[test]
    fn test_refresh_tokens_are_unique() {
        let service = create_test_service();

        // the jti keeps same-second tokens distinct
        let a = service.generate_refresh_token(7).unwrap();
        let b = service.generate_refresh_token(7).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_access_token_rejected_as_refresh() {
        let service = create_test_service();

        let token = service.generate_access_token(7).unwrap();
        let result = service.validate_refresh_token(&token);

        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_token_rejected() {
        let service = create_test_service();
        let result = service.validate_token("invalid.token.here");

        assert!(result.is_err());
    }

    #[test]
    fn test_service_is_clone_cheap() {
        let service = create_test_service();
        let _cloned = service.clone(); // Should be cheap due to Arc
    }
}
