//! Public physical record repository for database operations
//!
//! Reference measurements imported from public fitness datasets.

use anyhow::Result;
use rust_decimal::Decimal;
use sqlx::PgPool;

/// Public physical record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PublicPhysicalRecordRecord {
    pub id: i32,
    pub gender: String,
    pub age: i32,
    pub category_id: i32,
    pub measured_value: Decimal,
}

/// Input for creating a public physical record
#[derive(Debug, Clone)]
pub struct CreatePublicPhysicalRecord {
    pub gender: String,
    pub age: i32,
    pub category_id: i32,
    pub measured_value: Decimal,
}

/// Input for updating a public physical record; None leaves the column unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdatePublicPhysicalRecord {
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub category_id: Option<i32>,
    pub measured_value: Option<Decimal>,
}

/// Public physical record repository for database operations
pub struct PublicPhysicalRecordRepository;

impl PublicPhysicalRecordRepository {
    /// Create a new public physical record
    pub async fn create(
        pool: &PgPool,
        input: CreatePublicPhysicalRecord,
    ) -> Result<PublicPhysicalRecordRecord> {
        let record = sqlx::query_as::<_, PublicPhysicalRecordRecord>(
            r#"
            INSERT INTO public_physical_records (gender, age, category_id, measured_value)
            VALUES ($1, $2, $3, $4)
            RETURNING id, gender, age, category_id, measured_value
            "#,
        )
        .bind(&input.gender)
        .bind(input.age)
        .bind(input.category_id)
        .bind(input.measured_value)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// List all public physical records
    pub async fn list(pool: &PgPool) -> Result<Vec<PublicPhysicalRecordRecord>> {
        let records = sqlx::query_as::<_, PublicPhysicalRecordRecord>(
            r#"
            SELECT id, gender, age, category_id, measured_value
            FROM public_physical_records
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Find a public physical record by ID
    pub async fn find_by_id(
        pool: &PgPool,
        id: i32,
    ) -> Result<Option<PublicPhysicalRecordRecord>> {
        let record = sqlx::query_as::<_, PublicPhysicalRecordRecord>(
            r#"
            SELECT id, gender, age, category_id, measured_value
            FROM public_physical_records
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Update a public physical record; absent fields keep their current values
    pub async fn update(
        pool: &PgPool,
        id: i32,
        input: UpdatePublicPhysicalRecord,
    ) -> Result<Option<PublicPhysicalRecordRecord>> {
        let record = sqlx::query_as::<_, PublicPhysicalRecordRecord>(
            r#"
            UPDATE public_physical_records
            SET gender = COALESCE($2, gender),
                age = COALESCE($3, age),
                category_id = COALESCE($4, category_id),
                measured_value = COALESCE($5, measured_value)
            WHERE id = $1
            RETURNING id, gender, age, category_id, measured_value
            "#,
        )
        .bind(id)
        .bind(&input.gender)
        .bind(input.age)
        .bind(input.category_id)
        .bind(input.measured_value)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a public physical record
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM public_physical_records WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
