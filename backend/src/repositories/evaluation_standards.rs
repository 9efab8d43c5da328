//! Evaluation standard repository for database operations
//!
//! One row per (gender, category, bodyweight bracket) holding the five
//! nullable grade thresholds the grading engine consumes.

use anyhow::Result;
use rust_decimal::Decimal;
use sqlx::PgPool;

/// Evaluation standard record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EvaluationStandardRecord {
    pub id: i32,
    pub gender: String,
    pub category_id: i32,
    pub body_weight: Decimal,
    pub beginner: Option<Decimal>,
    pub novice: Option<Decimal>,
    pub intermediate: Option<Decimal>,
    pub advanced: Option<Decimal>,
    pub elite: Option<Decimal>,
}

/// Input for creating an evaluation standard
#[derive(Debug, Clone)]
pub struct CreateEvaluationStandard {
    pub gender: String,
    pub category_id: i32,
    pub body_weight: Decimal,
    pub beginner: Option<Decimal>,
    pub novice: Option<Decimal>,
    pub intermediate: Option<Decimal>,
    pub advanced: Option<Decimal>,
    pub elite: Option<Decimal>,
}

/// Input for updating an evaluation standard
///
/// Identity fields use COALESCE semantics; threshold columns are written
/// as given (the service merges current values into fields the request
/// omitted, since COALESCE cannot express "keep" for a nullable column).
#[derive(Debug, Clone, Default)]
pub struct UpdateEvaluationStandard {
    pub gender: Option<String>,
    pub category_id: Option<i32>,
    pub body_weight: Option<Decimal>,
    pub beginner: Option<Decimal>,
    pub novice: Option<Decimal>,
    pub intermediate: Option<Decimal>,
    pub advanced: Option<Decimal>,
    pub elite: Option<Decimal>,
}

/// Evaluation standard repository for database operations
pub struct EvaluationStandardRepository;

impl EvaluationStandardRepository {
    /// Create a new evaluation standard
    pub async fn create(
        pool: &PgPool,
        input: CreateEvaluationStandard,
    ) -> Result<EvaluationStandardRecord> {
        let record = sqlx::query_as::<_, EvaluationStandardRecord>(
            r#"
            INSERT INTO evaluation_standards
                (gender, category_id, body_weight, beginner, novice, intermediate, advanced, elite)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, gender, category_id, body_weight, beginner, novice, intermediate, advanced, elite
            "#,
        )
        .bind(&input.gender)
        .bind(input.category_id)
        .bind(input.body_weight)
        .bind(input.beginner)
        .bind(input.novice)
        .bind(input.intermediate)
        .bind(input.advanced)
        .bind(input.elite)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// List all evaluation standards
    pub async fn list(pool: &PgPool) -> Result<Vec<EvaluationStandardRecord>> {
        let records = sqlx::query_as::<_, EvaluationStandardRecord>(
            r#"
            SELECT id, gender, category_id, body_weight, beginner, novice, intermediate, advanced, elite
            FROM evaluation_standards
            ORDER BY category_id, gender, body_weight
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Find an evaluation standard by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<EvaluationStandardRecord>> {
        let record = sqlx::query_as::<_, EvaluationStandardRecord>(
            r#"
            SELECT id, gender, category_id, body_weight, beginner, novice, intermediate, advanced, elite
            FROM evaluation_standards
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Select the standard with the largest body_weight <= the query
    /// bodyweight for a gender and category
    pub async fn find_for(
        pool: &PgPool,
        gender: &str,
        category_id: i32,
        body_weight: Decimal,
    ) -> Result<Option<EvaluationStandardRecord>> {
        let record = sqlx::query_as::<_, EvaluationStandardRecord>(
            r#"
            SELECT id, gender, category_id, body_weight, beginner, novice, intermediate, advanced, elite
            FROM evaluation_standards
            WHERE gender = $1 AND category_id = $2 AND body_weight <= $3
            ORDER BY body_weight DESC
            LIMIT 1
            "#,
        )
        .bind(gender)
        .bind(category_id)
        .bind(body_weight)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Update an evaluation standard
    pub async fn update(
        pool: &PgPool,
        id: i32,
        input: UpdateEvaluationStandard,
    ) -> Result<Option<EvaluationStandardRecord>> {
        let record = sqlx::query_as::<_, EvaluationStandardRecord>(
            r#"
            UPDATE evaluation_standards
            SET gender = COALESCE($2, gender),
                category_id = COALESCE($3, category_id),
                body_weight = COALESCE($4, body_weight),
                beginner = $5,
                novice = $6,
                intermediate = $7,
                advanced = $8,
                elite = $9
            WHERE id = $1
            RETURNING id, gender, category_id, body_weight, beginner, novice, intermediate, advanced, elite
            "#,
        )
        .bind(id)
        .bind(&input.gender)
        .bind(input.category_id)
        .bind(input.body_weight)
        .bind(input.beginner)
        .bind(input.novice)
        .bind(input.intermediate)
        .bind(input.advanced)
        .bind(input.elite)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete an evaluation standard
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM evaluation_standards WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
