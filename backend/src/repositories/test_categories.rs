//! Test category repository for database operations

use anyhow::Result;
use sqlx::PgPool;

/// Test category record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TestCategoryRecord {
    pub id: i32,
    pub name: String,
    pub unit: String,
}

/// Test category repository for database operations
pub struct TestCategoryRepository;

impl TestCategoryRepository {
    /// Create a new test category
    pub async fn create(pool: &PgPool, name: &str, unit: &str) -> Result<TestCategoryRecord> {
        let record = sqlx::query_as::<_, TestCategoryRecord>(
            r#"
            INSERT INTO test_categories (name, unit)
            VALUES ($1, $2)
            RETURNING id, name, unit
            "#,
        )
        .bind(name)
        .bind(unit)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// List all test categories
    pub async fn list(pool: &PgPool) -> Result<Vec<TestCategoryRecord>> {
        let records = sqlx::query_as::<_, TestCategoryRecord>(
            "SELECT id, name, unit FROM test_categories ORDER BY id",
        )
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Find a test category by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<TestCategoryRecord>> {
        let record = sqlx::query_as::<_, TestCategoryRecord>(
            "SELECT id, name, unit FROM test_categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Update a test category; absent fields keep their current values
    pub async fn update(
        pool: &PgPool,
        id: i32,
        name: Option<&str>,
        unit: Option<&str>,
    ) -> Result<Option<TestCategoryRecord>> {
        let record = sqlx::query_as::<_, TestCategoryRecord>(
            r#"
            UPDATE test_categories
            SET name = COALESCE($2, name),
                unit = COALESCE($3, unit)
            WHERE id = $1
            RETURNING id, name, unit
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(unit)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a test category
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM test_categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
