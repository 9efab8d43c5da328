//! Age coefficient service

use crate::error::ApiError;
use crate::repositories::{
    AgeCoefficientRecord, AgeCoefficientRepository, CreateAgeCoefficient, TestCategoryRepository,
    UpdateAgeCoefficient,
};
use crate::services::parse_gender;
use gymgrade_shared::types::{
    AgeCoefficientResponse, CreateAgeCoefficientRequest, UpdateAgeCoefficientRequest,
};
use sqlx::PgPool;
use validator::Validate;

/// Age coefficient service
pub struct AgeCoefficientService;

impl AgeCoefficientService {
    /// Create an age coefficient for an existing category
    pub async fn create(
        pool: &PgPool,
        req: CreateAgeCoefficientRequest,
    ) -> Result<AgeCoefficientResponse, ApiError> {
        req.validate().map_err(ApiError::from_validation)?;

        TestCategoryRepository::find_by_id(pool, req.category_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Test category not found".to_string()))?;

        let coefficient = AgeCoefficientRepository::create(
            pool,
            CreateAgeCoefficient {
                gender: req.gender.as_str().to_string(),
                category_id: req.category_id,
                age: req.age,
                coefficient: req.coefficient,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        coefficient_response(coefficient)
    }

    /// List all age coefficients
    pub async fn list(pool: &PgPool) -> Result<Vec<AgeCoefficientResponse>, ApiError> {
        let coefficients = AgeCoefficientRepository::list(pool)
            .await
            .map_err(ApiError::Internal)?;

        coefficients.into_iter().map(coefficient_response).collect()
    }

    /// Get an age coefficient by ID
    pub async fn get(pool: &PgPool, id: i32) -> Result<AgeCoefficientResponse, ApiError> {
        let coefficient = AgeCoefficientRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Age coefficient not found".to_string()))?;

        coefficient_response(coefficient)
    }

    /// Update an age coefficient
    pub async fn update(
        pool: &PgPool,
        id: i32,
        req: UpdateAgeCoefficientRequest,
    ) -> Result<AgeCoefficientResponse, ApiError> {
        req.validate().map_err(ApiError::from_validation)?;

        if let Some(category_id) = req.category_id {
            TestCategoryRepository::find_by_id(pool, category_id)
                .await
                .map_err(ApiError::Internal)?
                .ok_or_else(|| ApiError::NotFound("Test category not found".to_string()))?;
        }

        let coefficient = AgeCoefficientRepository::update(
            pool,
            id,
            UpdateAgeCoefficient {
                gender: req.gender.map(|g| g.as_str().to_string()),
                category_id: req.category_id,
                age: req.age,
                coefficient: req.coefficient,
            },
        )
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("Age coefficient not found".to_string()))?;

        coefficient_response(coefficient)
    }

    /// Delete an age coefficient
    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), ApiError> {
        let deleted = AgeCoefficientRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Age coefficient not found".to_string()));
        }
        Ok(())
    }
}

fn coefficient_response(
    coefficient: AgeCoefficientRecord,
) -> Result<AgeCoefficientResponse, ApiError> {
    Ok(AgeCoefficientResponse {
        id: coefficient.id,
        gender: parse_gender(&coefficient.gender)?,
        category_id: coefficient.category_id,
        age: coefficient.age,
        coefficient: coefficient.coefficient,
    })
}
