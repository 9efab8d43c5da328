//! Evaluation standard service

use crate::error::ApiError;
use crate::repositories::{
    CreateEvaluationStandard, EvaluationStandardRecord, EvaluationStandardRepository,
    TestCategoryRepository, UpdateEvaluationStandard,
};
use crate::services::parse_gender;
use gymgrade_shared::grading::GradeThresholds;
use gymgrade_shared::types::{
    CreateEvaluationStandardRequest, EvaluationStandardResponse, UpdateEvaluationStandardRequest,
};
use sqlx::PgPool;
use validator::Validate;

/// Evaluation standard service
pub struct EvaluationStandardService;

impl EvaluationStandardService {
    /// Create an evaluation standard for an existing category
    pub async fn create(
        pool: &PgPool,
        req: CreateEvaluationStandardRequest,
    ) -> Result<EvaluationStandardResponse, ApiError> {
        req.validate().map_err(ApiError::from_validation)?;

        ensure_category_exists(pool, req.category_id).await?;

        let standard = EvaluationStandardRepository::create(
            pool,
            CreateEvaluationStandard {
                gender: req.gender.as_str().to_string(),
                category_id: req.category_id,
                body_weight: req.body_weight,
                beginner: req.beginner,
                novice: req.novice,
                intermediate: req.intermediate,
                advanced: req.advanced,
                elite: req.elite,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        standard_response(standard)
    }

    /// List all evaluation standards
    pub async fn list(pool: &PgPool) -> Result<Vec<EvaluationStandardResponse>, ApiError> {
        let standards = EvaluationStandardRepository::list(pool)
            .await
            .map_err(ApiError::Internal)?;

        standards.into_iter().map(standard_response).collect()
    }

    /// Get an evaluation standard by ID
    pub async fn get(pool: &PgPool, id: i32) -> Result<EvaluationStandardResponse, ApiError> {
        let standard = EvaluationStandardRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Evaluation standard not found".to_string()))?;

        standard_response(standard)
    }

    /// Update an evaluation standard
    ///
    /// Threshold fields absent from the request keep their current values;
    /// the merge happens here because COALESCE cannot distinguish "keep"
    /// from "clear" on a nullable column.
    pub async fn update(
        pool: &PgPool,
        id: i32,
        req: UpdateEvaluationStandardRequest,
    ) -> Result<EvaluationStandardResponse, ApiError> {
        req.validate().map_err(ApiError::from_validation)?;

        let existing = EvaluationStandardRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Evaluation standard not found".to_string()))?;

        if let Some(category_id) = req.category_id {
            ensure_category_exists(pool, category_id).await?;
        }

        let standard = EvaluationStandardRepository::update(
            pool,
            id,
            UpdateEvaluationStandard {
                gender: req.gender.map(|g| g.as_str().to_string()),
                category_id: req.category_id,
                body_weight: req.body_weight,
                beginner: req.beginner.or(existing.beginner),
                novice: req.novice.or(existing.novice),
                intermediate: req.intermediate.or(existing.intermediate),
                advanced: req.advanced.or(existing.advanced),
                elite: req.elite.or(existing.elite),
            },
        )
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("Evaluation standard not found".to_string()))?;

        standard_response(standard)
    }

    /// Delete an evaluation standard
    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), ApiError> {
        let deleted = EvaluationStandardRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound(
                "Evaluation standard not found".to_string(),
            ));
        }
        Ok(())
    }
}

async fn ensure_category_exists(pool: &PgPool, category_id: i32) -> Result<(), ApiError> {
    TestCategoryRepository::find_by_id(pool, category_id)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("Test category not found".to_string()))?;
    Ok(())
}

fn standard_response(
    standard: EvaluationStandardRecord,
) -> Result<EvaluationStandardResponse, ApiError> {
    Ok(EvaluationStandardResponse {
        id: standard.id,
        gender: parse_gender(&standard.gender)?,
        category_id: standard.category_id,
        body_weight: standard.body_weight,
        thresholds: GradeThresholds {
            beginner: standard.beginner,
            novice: standard.novice,
            intermediate: standard.intermediate,
            advanced: standard.advanced,
            elite: standard.elite,
        },
    })
}
