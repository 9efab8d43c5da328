//! Public physical record service

use crate::error::ApiError;
use crate::repositories::{
    CreatePublicPhysicalRecord, PublicPhysicalRecordRecord, PublicPhysicalRecordRepository,
    TestCategoryRepository, UpdatePublicPhysicalRecord,
};
use crate::services::parse_gender;
use gymgrade_shared::types::{
    CreatePublicPhysicalRecordRequest, PublicPhysicalRecordResponse,
    UpdatePublicPhysicalRecordRequest,
};
use sqlx::PgPool;
use validator::Validate;

/// Public physical record service
pub struct PublicPhysicalRecordService;

impl PublicPhysicalRecordService {
    /// Create a public reference record for an existing category
    pub async fn create(
        pool: &PgPool,
        req: CreatePublicPhysicalRecordRequest,
    ) -> Result<PublicPhysicalRecordResponse, ApiError> {
        req.validate().map_err(ApiError::from_validation)?;

        TestCategoryRepository::find_by_id(pool, req.category_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Test category not found".to_string()))?;

        let record = PublicPhysicalRecordRepository::create(
            pool,
            CreatePublicPhysicalRecord {
                gender: req.gender.as_str().to_string(),
                age: req.age,
                category_id: req.category_id,
                measured_value: req.measured_value,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        record_response(record)
    }

    /// List all public records
    pub async fn list(pool: &PgPool) -> Result<Vec<PublicPhysicalRecordResponse>, ApiError> {
        let records = PublicPhysicalRecordRepository::list(pool)
            .await
            .map_err(ApiError::Internal)?;

        records.into_iter().map(record_response).collect()
    }

    /// Get a public record by ID
    pub async fn get(pool: &PgPool, id: i32) -> Result<PublicPhysicalRecordResponse, ApiError> {
        let record = PublicPhysicalRecordRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Public physical record not found".to_string()))?;

        record_response(record)
    }

    /// Update a public record
    pub async fn update(
        pool: &PgPool,
        id: i32,
        req: UpdatePublicPhysicalRecordRequest,
    ) -> Result<PublicPhysicalRecordResponse, ApiError> {
        req.validate().map_err(ApiError::from_validation)?;

        if let Some(category_id) = req.category_id {
            TestCategoryRepository::find_by_id(pool, category_id)
                .await
                .map_err(ApiError::Internal)?
                .ok_or_else(|| ApiError::NotFound("Test category not found".to_string()))?;
        }

        let record = PublicPhysicalRecordRepository::update(
            pool,
            id,
            UpdatePublicPhysicalRecord {
                gender: req.gender.map(|g| g.as_str().to_string()),
                age: req.age,
                category_id: req.category_id,
                measured_value: req.measured_value,
            },
        )
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("Public physical record not found".to_string()))?;

        record_response(record)
    }

    /// Delete a public record
    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), ApiError> {
        let deleted = PublicPhysicalRecordRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound(
                "Public physical record not found".to_string(),
            ));
        }
        Ok(())
    }
}

fn record_response(
    record: PublicPhysicalRecordRecord,
) -> Result<PublicPhysicalRecordResponse, ApiError> {
    Ok(PublicPhysicalRecordResponse {
        id: record.id,
        gender: parse_gender(&record.gender)?,
        age: record.age,
        category_id: record.category_id,
        measured_value: record.measured_value,
    })
}
