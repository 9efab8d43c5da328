//! Member repository for database operations
//!
//! Every query is scoped by gym_id; a member id from another gym behaves
//! exactly like a missing row.

use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

/// Member record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MemberRecord {
    pub id: i32,
    pub gym_id: i32,
    pub name: String,
    pub gender: String,
    pub age: i32,
    pub height: Decimal,
    pub weight: Decimal,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a member
#[derive(Debug, Clone)]
pub struct CreateMember {
    pub gym_id: i32,
    pub name: String,
    pub gender: String,
    pub age: i32,
    pub height: Decimal,
    pub weight: Decimal,
    pub notes: Option<String>,
}

/// Input for updating a member; None leaves the column unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateMember {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub height: Option<Decimal>,
    pub weight: Option<Decimal>,
    pub notes: Option<String>,
}

/// Member repository for database operations
pub struct MemberRepository;

impl MemberRepository {
    /// Create a new member
    pub async fn create(pool: &PgPool, input: CreateMember) -> Result<MemberRecord> {
        let record = sqlx::query_as::<_, MemberRecord>(
            r#"
            INSERT INTO members (gym_id, name, gender, age, height, weight, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, gym_id, name, gender, age, height, weight, notes, created_at
            "#,
        )
        .bind(input.gym_id)
        .bind(&input.name)
        .bind(&input.gender)
        .bind(input.age)
        .bind(input.height)
        .bind(input.weight)
        .bind(&input.notes)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// List all members of a gym
    pub async fn list_for_gym(pool: &PgPool, gym_id: i32) -> Result<Vec<MemberRecord>> {
        let records = sqlx::query_as::<_, MemberRecord>(
            r#"
            SELECT id, gym_id, name, gender, age, height, weight, notes, created_at
            FROM members
            WHERE gym_id = $1
            ORDER BY id
            "#,
        )
        .bind(gym_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Find a member by ID within a gym
    pub async fn find_by_id(pool: &PgPool, id: i32, gym_id: i32) -> Result<Option<MemberRecord>> {
        let record = sqlx::query_as::<_, MemberRecord>(
            r#"
            SELECT id, gym_id, name, gender, age, height, weight, notes, created_at
            FROM members
            WHERE id = $1 AND gym_id = $2
            "#,
        )
        .bind(id)
        .bind(gym_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Update a member; absent fields keep their current values
    pub async fn update(
        pool: &PgPool,
        id: i32,
        gym_id: i32,
        input: UpdateMember,
    ) -> Result<Option<MemberRecord>> {
        let record = sqlx::query_as::<_, MemberRecord>(
            r#"
            UPDATE members
            SET name = COALESCE($3, name),
                gender = COALESCE($4, gender),
                age = COALESCE($5, age),
                height = COALESCE($6, height),
                weight = COALESCE($7, weight),
                notes = COALESCE($8, notes)
            WHERE id = $1 AND gym_id = $2
            RETURNING id, gym_id, name, gender, age, height, weight, notes, created_at
            "#,
        )
        .bind(id)
        .bind(gym_id)
        .bind(&input.name)
        .bind(&input.gender)
        .bind(input.age)
        .bind(input.height)
        .bind(input.weight)
        .bind(&input.notes)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a member (cascades to physical records)
    pub async fn delete(pool: &PgPool, id: i32, gym_id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1 AND gym_id = $2")
            .bind(id)
            .bind(gym_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
