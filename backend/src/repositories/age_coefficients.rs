//! Age coefficient repository for database operations

use anyhow::Result;
use rust_decimal::Decimal;
use sqlx::PgPool;

/// Age coefficient record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AgeCoefficientRecord {
    pub id: i32,
    pub gender: String,
    pub category_id: i32,
    pub age: i32,
    pub coefficient: Decimal,
}

/// Input for creating an age coefficient
#[derive(Debug, Clone)]
pub struct CreateAgeCoefficient {
    pub gender: String,
    pub category_id: i32,
    pub age: i32,
    pub coefficient: Decimal,
}

/// Input for updating an age coefficient; None leaves the column unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateAgeCoefficient {
    pub gender: Option<String>,
    pub category_id: Option<i32>,
    pub age: Option<i32>,
    pub coefficient: Option<Decimal>,
}

/// The stored coefficient rows bracketing a query age
#[derive(Debug, Clone, Default)]
pub struct CoefficientNeighbors {
    /// Largest age <= the query age
    pub below: Option<AgeCoefficientRecord>,
    /// Smallest age > the query age
    pub above: Option<AgeCoefficientRecord>,
}

/// Age coefficient repository for database operations
pub struct AgeCoefficientRepository;

impl AgeCoefficientRepository {
    /// Create a new age coefficient
    pub async fn create(
        pool: &PgPool,
        input: CreateAgeCoefficient,
    ) -> Result<AgeCoefficientRecord> {
        let record = sqlx::query_as::<_, AgeCoefficientRecord>(
            r#"
            INSERT INTO age_coefficients (gender, category_id, age, coefficient)
            VALUES ($1, $2, $3, $4)
            RETURNING id, gender, category_id, age, coefficient
            "#,
        )
        .bind(&input.gender)
        .bind(input.category_id)
        .bind(input.age)
        .bind(input.coefficient)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// List all age coefficients
    pub async fn list(pool: &PgPool) -> Result<Vec<AgeCoefficientRecord>> {
        let records = sqlx::query_as::<_, AgeCoefficientRecord>(
            r#"
            SELECT id, gender, category_id, age, coefficient
            FROM age_coefficients
            ORDER BY category_id, gender, age
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Find an age coefficient by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<AgeCoefficientRecord>> {
        let record = sqlx::query_as::<_, AgeCoefficientRecord>(
            r#"
            SELECT id, gender, category_id, age, coefficient
            FROM age_coefficients
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Fetch the stored rows nearest below and above a query age for a
    /// gender and category; the grading engine picks between them
    pub async fn neighbors_for(
        pool: &PgPool,
        gender: &str,
        category_id: i32,
        age: i32,
    ) -> Result<CoefficientNeighbors> {
        let below = sqlx::query_as::<_, AgeCoefficientRecord>(
            r#"
            SELECT id, gender, category_id, age, coefficient
            FROM age_coefficients
            WHERE gender = $1 AND category_id = $2 AND age <= $3
            ORDER BY age DESC
            LIMIT 1
            "#,
        )
        .bind(gender)
        .bind(category_id)
        .bind(age)
        .fetch_optional(pool)
        .await?;

        let above = sqlx::query_as::<_, AgeCoefficientRecord>(
            r#"
            SELECT id, gender, category_id, age, coefficient
            FROM age_coefficients
            WHERE gender = $1 AND category_id = $2 AND age > $3
            ORDER BY age ASC
            LIMIT 1
            "#,
        )
        .bind(gender)
        .bind(category_id)
        .bind(age)
        .fetch_optional(pool)
        .await?;

        Ok(CoefficientNeighbors { below, above })
    }

    /// Update an age coefficient; absent fields keep their current values
    pub async fn update(
        pool: &PgPool,
        id: i32,
        input: UpdateAgeCoefficient,
    ) -> Result<Option<AgeCoefficientRecord>> {
        let record = sqlx::query_as::<_, AgeCoefficientRecord>(
            r#"
            UPDATE age_coefficients
            SET gender = COALESCE($2, gender),
                category_id = COALESCE($3, category_id),
                age = COALESCE($4, age),
                coefficient = COALESCE($5, coefficient)
            WHERE id = $1
            RETURNING id, gender, category_id, age, coefficient
            "#,
        )
        .bind(id)
        .bind(&input.gender)
        .bind(input.category_id)
        .bind(input.age)
        .bind(input.coefficient)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete an age coefficient
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM age_coefficients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
