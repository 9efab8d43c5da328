//! Test category service

use crate::error::ApiError;
use crate::repositories::{TestCategoryRecord, TestCategoryRepository};
use gymgrade_shared::types::{
    CreateTestCategoryRequest, TestCategoryResponse, UpdateTestCategoryRequest,
};
use sqlx::PgPool;
use validator::Validate;

/// Test category service
pub struct TestCategoryService;

impl TestCategoryService {
    /// Create a test category
    pub async fn create(
        pool: &PgPool,
        req: CreateTestCategoryRequest,
    ) -> Result<TestCategoryResponse, ApiError> {
        req.validate().map_err(ApiError::from_validation)?;

        let category = TestCategoryRepository::create(pool, &req.name, &req.unit)
            .await
            .map_err(ApiError::Internal)?;

        Ok(category_response(category))
    }

    /// List all test categories
    pub async fn list(pool: &PgPool) -> Result<Vec<TestCategoryResponse>, ApiError> {
        let categories = TestCategoryRepository::list(pool)
            .await
            .map_err(ApiError::Internal)?;

        Ok(categories.into_iter().map(category_response).collect())
    }

    /// Get a test category by ID
    pub async fn get(pool: &PgPool, id: i32) -> Result<TestCategoryResponse, ApiError> {
        let category = TestCategoryRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Test category not found".to_string()))?;

        Ok(category_response(category))
    }

    /// Update a test category
    pub async fn update(
        pool: &PgPool,
        id: i32,
        req: UpdateTestCategoryRequest,
    ) -> Result<TestCategoryResponse, ApiError> {
        req.validate().map_err(ApiError::from_validation)?;

        let category =
            TestCategoryRepository::update(pool, id, req.name.as_deref(), req.unit.as_deref())
                .await
                .map_err(ApiError::Internal)?
                .ok_or_else(|| ApiError::NotFound("Test category not found".to_string()))?;

        Ok(category_response(category))
    }

    /// Delete a test category
    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), ApiError> {
        let deleted = TestCategoryRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Test category not found".to_string()));
        }
        Ok(())
    }
}

fn category_response(category: TestCategoryRecord) -> TestCategoryResponse {
    TestCategoryResponse {
        id: category.id,
        name: category.name,
        unit: category.unit,
    }
}
