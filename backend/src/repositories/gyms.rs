//! Gym account repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Gym record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GymRecord {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub gym_name: String,
    pub owner_name: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a gym
#[derive(Debug, Clone)]
pub struct CreateGym {
    pub email: String,
    pub password_hash: String,
    pub gym_name: String,
    pub owner_name: String,
}

/// Input for updating a gym; None leaves the column unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateGym {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub gym_name: Option<String>,
    pub owner_name: Option<String>,
}

/// Gym repository for database operations
pub struct GymRepository;

impl GymRepository {
    /// Create a new gym account
    pub async fn create(pool: &PgPool, input: CreateGym) -> Result<GymRecord> {
        let record = sqlx::query_as::<_, GymRecord>(
            r#"
            INSERT INTO gyms (email, password_hash, gym_name, owner_name)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, password_hash, gym_name, owner_name, created_at
            "#,
        )
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(&input.gym_name)
        .bind(&input.owner_name)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Check whether an email is already registered
    pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM gyms WHERE email = $1)")
                .bind(email)
                .fetch_one(pool)
                .await?;

        Ok(exists.0)
    }

    /// Find a gym by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<GymRecord>> {
        let record = sqlx::query_as::<_, GymRecord>(
            r#"
            SELECT id, email, password_hash, gym_name, owner_name, created_at
            FROM gyms
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Find a gym by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<GymRecord>> {
        let record = sqlx::query_as::<_, GymRecord>(
            r#"
            SELECT id, email, password_hash, gym_name, owner_name, created_at
            FROM gyms
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// List all gyms
    pub async fn list(pool: &PgPool) -> Result<Vec<GymRecord>> {
        let records = sqlx::query_as::<_, GymRecord>(
            r#"
            SELECT id, email, password_hash, gym_name, owner_name, created_at
            FROM gyms
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Update a gym; absent fields keep their current values
    pub async fn update(pool: &PgPool, id: i32, input: UpdateGym) -> Result<Option<GymRecord>> {
        let record = sqlx::query_as::<_, GymRecord>(
            r#"
            UPDATE gyms
            SET email = COALESCE($2, email),
                password_hash = COALESCE($3, password_hash),
                gym_name = COALESCE($4, gym_name),
                owner_name = COALESCE($5, owner_name)
            WHERE id = $1
            RETURNING id, email, password_hash, gym_name, owner_name, created_at
            "#,
        )
        .bind(id)
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(&input.gym_name)
        .bind(&input.owner_name)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a gym (cascades to members and refresh tokens)
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM gyms WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
