//! Gym account service

use crate::auth::PasswordService;
use crate::error::ApiError;
use crate::repositories::{CreateGym, GymRepository, UpdateGym};
use crate::services::auth::gym_response;
use gymgrade_shared::types::{CreateGymRequest, GymResponse, UpdateGymRequest};
use sqlx::PgPool;
use validator::Validate;

/// Gym service for account CRUD
pub struct GymService;

impl GymService {
    /// Create a gym account (same rules as signup)
    pub async fn create(pool: &PgPool, req: CreateGymRequest) -> Result<GymResponse, ApiError> {
        req.validate().map_err(ApiError::from_validation)?;

        if GymRepository::email_exists(pool, &req.email)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict("Email already registered".to_string()));
        }

        let password_hash = PasswordService::hash_async(req.password)
            .await
            .map_err(ApiError::Internal)?;

        let gym = GymRepository::create(
            pool,
            CreateGym {
                email: req.email,
                password_hash,
                gym_name: req.gym_name,
                owner_name: req.owner_name,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(gym_response(gym))
    }

    /// List all gyms
    pub async fn list(pool: &PgPool) -> Result<Vec<GymResponse>, ApiError> {
        let gyms = GymRepository::list(pool).await.map_err(ApiError::Internal)?;
        Ok(gyms.into_iter().map(gym_response).collect())
    }

    /// Get a gym by ID
    pub async fn get(pool: &PgPool, id: i32) -> Result<GymResponse, ApiError> {
        let gym = GymRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Gym not found".to_string()))?;

        Ok(gym_response(gym))
    }

    /// Update a gym; a new email must stay unique, a new password is rehashed
    pub async fn update(
        pool: &PgPool,
        id: i32,
        req: UpdateGymRequest,
    ) -> Result<GymResponse, ApiError> {
        req.validate().map_err(ApiError::from_validation)?;

        if let Some(email) = &req.email {
            let taken = GymRepository::find_by_email(pool, email)
                .await
                .map_err(ApiError::Internal)?
                .is_some_and(|existing| existing.id != id);
            if taken {
                return Err(ApiError::Conflict("Email already registered".to_string()));
            }
        }

        let password_hash = match req.password {
            Some(password) => Some(
                PasswordService::hash_async(password)
                    .await
                    .map_err(ApiError::Internal)?,
            ),
            None => None,
        };

        let gym = GymRepository::update(
            pool,
            id,
            UpdateGym {
                email: req.email,
                password_hash,
                gym_name: req.gym_name,
                owner_name: req.owner_name,
            },
        )
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("Gym not found".to_string()))?;

        Ok(gym_response(gym))
    }

    /// Delete a gym; members and refresh tokens cascade
    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), ApiError> {
        let deleted = GymRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Gym not found".to_string()));
        }
        Ok(())
    }
}
