//! Member service
//!
//! All operations are scoped to the authenticated gym; a member id from
//! another gym is indistinguishable from a missing one.

use crate::error::ApiError;
use crate::repositories::{CreateMember, MemberRecord, MemberRepository, UpdateMember};
use crate::services::parse_gender;
use gymgrade_shared::types::{CreateMemberRequest, MemberResponse, UpdateMemberRequest};
use sqlx::PgPool;
use validator::Validate;

/// Member service for gym-scoped CRUD
pub struct MemberService;

impl MemberService {
    /// Register a member with the authenticated gym
    pub async fn create(
        pool: &PgPool,
        gym_id: i32,
        req: CreateMemberRequest,
    ) -> Result<MemberResponse, ApiError> {
        req.validate().map_err(ApiError::from_validation)?;

        let member = MemberRepository::create(
            pool,
            CreateMember {
                gym_id,
                name: req.name,
                gender: req.gender.as_str().to_string(),
                age: req.age,
                height: req.height,
                weight: req.weight,
                notes: req.notes,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        member_response(member)
    }

    /// List the gym's members
    pub async fn list(pool: &PgPool, gym_id: i32) -> Result<Vec<MemberResponse>, ApiError> {
        let members = MemberRepository::list_for_gym(pool, gym_id)
            .await
            .map_err(ApiError::Internal)?;

        members.into_iter().map(member_response).collect()
    }

    /// Get one member
    pub async fn get(pool: &PgPool, id: i32, gym_id: i32) -> Result<MemberResponse, ApiError> {
        let member = MemberRepository::find_by_id(pool, id, gym_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Member not found".to_string()))?;

        member_response(member)
    }

    /// Update a member
    pub async fn update(
        pool: &PgPool,
        id: i32,
        gym_id: i32,
        req: UpdateMemberRequest,
    ) -> Result<MemberResponse, ApiError> {
        req.validate().map_err(ApiError::from_validation)?;

        let member = MemberRepository::update(
            pool,
            id,
            gym_id,
            UpdateMember {
                name: req.name,
                gender: req.gender.map(|g| g.as_str().to_string()),
                age: req.age,
                height: req.height,
                weight: req.weight,
                notes: req.notes,
            },
        )
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("Member not found".to_string()))?;

        member_response(member)
    }

    /// Delete a member; their measurement history cascades
    pub async fn delete(pool: &PgPool, id: i32, gym_id: i32) -> Result<(), ApiError> {
        let deleted = MemberRepository::delete(pool, id, gym_id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Member not found".to_string()));
        }
        Ok(())
    }
}

fn member_response(member: MemberRecord) -> Result<MemberResponse, ApiError> {
    Ok(MemberResponse {
        id: member.id,
        gym_id: member.gym_id,
        name: member.name,
        gender: parse_gender(&member.gender)?,
        age: member.age,
        height: member.height,
        weight: member.weight,
        notes: member.notes,
        created_at: member.created_at,
    })
}
