//! Refresh token repository for database operations
//!
//! Tokens are stored as SHA-256 digests; lookups are always by
//! (gym_id, digest) so a stolen database row never yields a usable token.

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Refresh token record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RefreshTokenRecord {
    pub id: i32,
    pub gym_id: i32,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub is_revoked: bool,
    pub created_at: DateTime<Utc>,
}

/// Refresh token repository for database operations
pub struct RefreshTokenRepository;

impl RefreshTokenRepository {
    /// Store a new refresh token digest
    pub async fn create(
        pool: &PgPool,
        gym_id: i32,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<RefreshTokenRecord> {
        let record = sqlx::query_as::<_, RefreshTokenRecord>(
            r#"
            INSERT INTO refresh_tokens (gym_id, token_hash, expires_at)
            VALUES ($1, $2, $3)
            RETURNING id, gym_id, token_hash, expires_at, is_revoked, created_at
            "#,
        )
        .bind(gym_id)
        .bind(token_hash)
        .bind(expires_at)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Find a live (unrevoked, unexpired) token row by digest
    pub async fn find_active(
        pool: &PgPool,
        gym_id: i32,
        token_hash: &str,
    ) -> Result<Option<RefreshTokenRecord>> {
        let record = sqlx::query_as::<_, RefreshTokenRecord>(
            r#"
            SELECT id, gym_id, token_hash, expires_at, is_revoked, created_at
            FROM refresh_tokens
            WHERE gym_id = $1 AND token_hash = $2
              AND is_revoked = FALSE AND expires_at > NOW()
            "#,
        )
        .bind(gym_id)
        .bind(token_hash)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Revoke the token row matching a digest
    pub async fn revoke(pool: &PgPool, gym_id: i32, token_hash: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE refresh_tokens
            SET is_revoked = TRUE
            WHERE gym_id = $1 AND token_hash = $2 AND is_revoked = FALSE
            "#,
        )
        .bind(gym_id)
        .bind(token_hash)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Drop rows that expired before the cutoff; returns how many were removed
    pub async fn delete_expired(pool: &PgPool, cutoff: DateTime<Utc>) -> Result<u64> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE expires_at < $1")
            .bind(cutoff)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}
