//! Physical record service
//!
//! Direct CRUD over the measurement history. Creation snapshots the
//! member's age/height/weight and computes the grade, so a record stays
//! meaningful even after the member's profile changes.

use crate::error::ApiError;
use crate::repositories::{
    CreatePhysicalRecord, MemberRepository, PhysicalRecordRecord, PhysicalRecordRepository,
};
use crate::services::{parse_gender, parse_grade, StrengthService};
use chrono::Utc;
use gymgrade_shared::types::{
    CreatePhysicalRecordRequest, PhysicalRecordResponse, UpdatePhysicalRecordRequest,
};
use sqlx::PgPool;
use validator::Validate;

/// Physical record service
pub struct PhysicalRecordService;

impl PhysicalRecordService {
    /// Record one measurement for a member of the authenticated gym
    pub async fn create(
        pool: &PgPool,
        gym_id: i32,
        req: CreatePhysicalRecordRequest,
    ) -> Result<PhysicalRecordResponse, ApiError> {
        req.validate().map_err(ApiError::from_validation)?;

        let member = MemberRepository::find_by_id(pool, req.member_id, gym_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Member not found".to_string()))?;

        let gender = parse_gender(&member.gender)?;
        let assessment = StrengthService::grade(
            pool,
            gender,
            member.age,
            member.weight,
            req.category_id,
            req.value,
        )
        .await?;

        let record = PhysicalRecordRepository::create(
            pool,
            &CreatePhysicalRecord {
                member_id: member.id,
                category_id: req.category_id,
                value: req.value,
                measured_at: req.measured_at.unwrap_or_else(|| Utc::now().date_naive()),
                age: member.age,
                height: member.height,
                weight: member.weight,
                grade: assessment.grade.label().to_string(),
                feedback: req.feedback,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        record_response(record)
    }

    /// List all records of the gym's members
    pub async fn list(pool: &PgPool, gym_id: i32) -> Result<Vec<PhysicalRecordResponse>, ApiError> {
        let records = PhysicalRecordRepository::list_for_gym(pool, gym_id)
            .await
            .map_err(ApiError::Internal)?;

        records.into_iter().map(record_response).collect()
    }

    /// A member's full measurement history, newest first
    pub async fn history(
        pool: &PgPool,
        member_id: i32,
        gym_id: i32,
    ) -> Result<Vec<PhysicalRecordResponse>, ApiError> {
        ensure_member_exists(pool, member_id, gym_id).await?;

        let records = PhysicalRecordRepository::list_for_member(pool, member_id, gym_id)
            .await
            .map_err(ApiError::Internal)?;

        records.into_iter().map(record_response).collect()
    }

    /// A member's most recent record per category
    pub async fn latest(
        pool: &PgPool,
        member_id: i32,
        gym_id: i32,
    ) -> Result<Vec<PhysicalRecordResponse>, ApiError> {
        ensure_member_exists(pool, member_id, gym_id).await?;

        let records = PhysicalRecordRepository::latest_per_category(pool, member_id, gym_id)
            .await
            .map_err(ApiError::Internal)?;

        records.into_iter().map(record_response).collect()
    }

    /// Get one record
    pub async fn get(
        pool: &PgPool,
        id: i32,
        gym_id: i32,
    ) -> Result<PhysicalRecordResponse, ApiError> {
        let record = PhysicalRecordRepository::find_by_id(pool, id, gym_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Physical record not found".to_string()))?;

        record_response(record)
    }

    /// Update the trainer feedback; all measurement fields are immutable
    pub async fn update(
        pool: &PgPool,
        id: i32,
        gym_id: i32,
        req: UpdatePhysicalRecordRequest,
    ) -> Result<PhysicalRecordResponse, ApiError> {
        let record =
            PhysicalRecordRepository::update_feedback(pool, id, gym_id, req.feedback.as_deref())
                .await
                .map_err(ApiError::Internal)?
                .ok_or_else(|| ApiError::NotFound("Physical record not found".to_string()))?;

        record_response(record)
    }

    /// Delete a record
    pub async fn delete(pool: &PgPool, id: i32, gym_id: i32) -> Result<(), ApiError> {
        let deleted = PhysicalRecordRepository::delete(pool, id, gym_id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Physical record not found".to_string()));
        }
        Ok(())
    }
}

async fn ensure_member_exists(pool: &PgPool, member_id: i32, gym_id: i32) -> Result<(), ApiError> {
    MemberRepository::find_by_id(pool, member_id, gym_id)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("Member not found".to_string()))?;
    Ok(())
}

fn record_response(record: PhysicalRecordRecord) -> Result<PhysicalRecordResponse, ApiError> {
    Ok(PhysicalRecordResponse {
        id: record.id,
        member_id: record.member_id,
        category_id: record.category_id,
        value: record.value,
        measured_at: record.measured_at,
        age: record.age,
        height: record.height,
        weight: record.weight,
        grade: parse_grade(&record.grade)?,
        feedback: record.feedback,
        created_at: record.created_at,
    })
}
