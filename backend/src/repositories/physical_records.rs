//! Physical record repository for database operations
//!
//! Records are an immutable measurement history: inserts happen one at a
//! time or inside a batch transaction, and the only mutable column is the
//! trainer feedback. Gym scoping goes through the owning member.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};

/// Physical record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PhysicalRecordRecord {
    pub id: i32,
    pub member_id: i32,
    pub category_id: i32,
    pub value: Decimal,
    pub measured_at: NaiveDate,
    pub age: i32,
    pub height: Decimal,
    pub weight: Decimal,
    pub grade: String,
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a physical record
#[derive(Debug, Clone)]
pub struct CreatePhysicalRecord {
    pub member_id: i32,
    pub category_id: i32,
    pub value: Decimal,
    pub measured_at: NaiveDate,
    pub age: i32,
    pub height: Decimal,
    pub weight: Decimal,
    pub grade: String,
    pub feedback: Option<String>,
}

const INSERT_SQL: &str = r#"
    INSERT INTO physical_records
        (member_id, category_id, value, measured_at, age, height, weight, grade, feedback)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
    RETURNING id, member_id, category_id, value, measured_at, age, height, weight, grade, feedback, created_at
"#;

const SELECT_COLUMNS: &str = r#"
    SELECT pr.id, pr.member_id, pr.category_id, pr.value, pr.measured_at,
           pr.age, pr.height, pr.weight, pr.grade, pr.feedback, pr.created_at
    FROM physical_records pr
    JOIN members m ON m.id = pr.member_id
"#;

/// Physical record repository for database operations
pub struct PhysicalRecordRepository;

impl PhysicalRecordRepository {
    /// Create a single physical record
    pub async fn create(
        pool: &PgPool,
        input: &CreatePhysicalRecord,
    ) -> Result<PhysicalRecordRecord> {
        let record = sqlx::query_as::<_, PhysicalRecordRecord>(INSERT_SQL)
            .bind(input.member_id)
            .bind(input.category_id)
            .bind(input.value)
            .bind(input.measured_at)
            .bind(input.age)
            .bind(input.height)
            .bind(input.weight)
            .bind(&input.grade)
            .bind(&input.feedback)
            .fetch_one(pool)
            .await?;

        Ok(record)
    }

    /// Create a physical record inside a batch transaction
    ///
    /// The caller owns commit/rollback, so a failing row aborts the whole
    /// batch.
    pub async fn create_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        input: &CreatePhysicalRecord,
    ) -> Result<PhysicalRecordRecord> {
        let record = sqlx::query_as::<_, PhysicalRecordRecord>(INSERT_SQL)
            .bind(input.member_id)
            .bind(input.category_id)
            .bind(input.value)
            .bind(input.measured_at)
            .bind(input.age)
            .bind(input.height)
            .bind(input.weight)
            .bind(&input.grade)
            .bind(&input.feedback)
            .fetch_one(&mut **tx)
            .await?;

        Ok(record)
    }

    /// List all records of a gym's members, newest first
    pub async fn list_for_gym(pool: &PgPool, gym_id: i32) -> Result<Vec<PhysicalRecordRecord>> {
        let sql = format!(
            "{SELECT_COLUMNS} WHERE m.gym_id = $1 ORDER BY pr.measured_at DESC, pr.id DESC"
        );
        let records = sqlx::query_as::<_, PhysicalRecordRecord>(&sql)
            .bind(gym_id)
            .fetch_all(pool)
            .await?;

        Ok(records)
    }

    /// List a member's measurement history, newest first
    pub async fn list_for_member(
        pool: &PgPool,
        member_id: i32,
        gym_id: i32,
    ) -> Result<Vec<PhysicalRecordRecord>> {
        let sql = format!(
            "{SELECT_COLUMNS} WHERE pr.member_id = $1 AND m.gym_id = $2 \
             ORDER BY pr.measured_at DESC, pr.id DESC"
        );
        let records = sqlx::query_as::<_, PhysicalRecordRecord>(&sql)
            .bind(member_id)
            .bind(gym_id)
            .fetch_all(pool)
            .await?;

        Ok(records)
    }

    /// The most recent record per category for a member
    pub async fn latest_per_category(
        pool: &PgPool,
        member_id: i32,
        gym_id: i32,
    ) -> Result<Vec<PhysicalRecordRecord>> {
        let records = sqlx::query_as::<_, PhysicalRecordRecord>(
            r#"
            SELECT DISTINCT ON (pr.category_id)
                   pr.id, pr.member_id, pr.category_id, pr.value, pr.measured_at,
                   pr.age, pr.height, pr.weight, pr.grade, pr.feedback, pr.created_at
            FROM physical_records pr
            JOIN members m ON m.id = pr.member_id
            WHERE pr.member_id = $1 AND m.gym_id = $2
            ORDER BY pr.category_id, pr.measured_at DESC, pr.id DESC
            "#,
        )
            .bind(member_id)
            .bind(gym_id)
            .fetch_all(pool)
            .await?;

        Ok(records)
    }

    /// Find a record by ID within a gym
    pub async fn find_by_id(
        pool: &PgPool,
        id: i32,
        gym_id: i32,
    ) -> Result<Option<PhysicalRecordRecord>> {
        let sql = format!("{SELECT_COLUMNS} WHERE pr.id = $1 AND m.gym_id = $2");
        let record = sqlx::query_as::<_, PhysicalRecordRecord>(&sql)
            .bind(id)
            .bind(gym_id)
            .fetch_optional(pool)
            .await?;

        Ok(record)
    }

    /// Update the trainer feedback on a record
    pub async fn update_feedback(
        pool: &PgPool,
        id: i32,
        gym_id: i32,
        feedback: Option<&str>,
    ) -> Result<Option<PhysicalRecordRecord>> {
        let record = sqlx::query_as::<_, PhysicalRecordRecord>(
            r#"
            UPDATE physical_records pr
            SET feedback = $3
            FROM members m
            WHERE pr.id = $1 AND m.id = pr.member_id AND m.gym_id = $2
            RETURNING pr.id, pr.member_id, pr.category_id, pr.value, pr.measured_at,
                      pr.age, pr.height, pr.weight, pr.grade, pr.feedback, pr.created_at
            "#,
        )
        .bind(id)
        .bind(gym_id)
        .bind(feedback)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a record
    pub async fn delete(pool: &PgPool, id: i32, gym_id: i32) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM physical_records pr
            USING members m
            WHERE pr.id = $1 AND m.id = pr.member_id AND m.gym_id = $2
            "#,
        )
        .bind(id)
        .bind(gym_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
