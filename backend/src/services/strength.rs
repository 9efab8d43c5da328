//! Strength level service
//!
//! Fetches the evaluation standard and age coefficient rows a measurement
//! needs and hands them to the pure grading engine. The batch entry point
//! persists every graded measurement in a single transaction.

use crate::error::ApiError;
use crate::repositories::{
    AgeCoefficientRepository, CreatePhysicalRecord, EvaluationStandardRepository,
    MemberRepository, PhysicalRecordRepository, TestCategoryRepository,
};
use crate::services::parse_gender;
use chrono::Utc;
use gymgrade_shared::grading::{
    assess, resolve_coefficient, CoefficientEntry, Gender, GradeThresholds, StrengthAssessment,
};
use gymgrade_shared::types::{
    CalculateMeasurementsRequest, CalculateMeasurementsResponse, CalculateStrengthLevelRequest,
    MeasurementResult, StrengthLevelResponse,
};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::debug;
use validator::Validate;

/// Strength level service
pub struct StrengthService;

impl StrengthService {
    /// Grade one measurement (reads only, no persistence)
    ///
    /// Fails with NotFound when the category is unknown, when no standard
    /// bracket covers the bodyweight, or when the category has no age
    /// coefficients for the gender.
    pub async fn grade(
        pool: &PgPool,
        gender: Gender,
        age: i32,
        body_weight: Decimal,
        category_id: i32,
        measured: Decimal,
    ) -> Result<StrengthAssessment, ApiError> {
        TestCategoryRepository::find_by_id(pool, category_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Test category not found".to_string()))?;

        let standard =
            EvaluationStandardRepository::find_for(pool, gender.as_str(), category_id, body_weight)
                .await
                .map_err(ApiError::Internal)?
                .ok_or_else(|| {
                    ApiError::NotFound(
                        "No evaluation standard for this gender, category and bodyweight"
                            .to_string(),
                    )
                })?;

        let neighbors =
            AgeCoefficientRepository::neighbors_for(pool, gender.as_str(), category_id, age)
                .await
                .map_err(ApiError::Internal)?;

        let coefficient = resolve_coefficient(
            neighbors.below.map(|r| CoefficientEntry {
                age: r.age,
                coefficient: r.coefficient,
            }),
            neighbors.above.map(|r| CoefficientEntry {
                age: r.age,
                coefficient: r.coefficient,
            }),
            age,
        )
        .ok_or_else(|| {
            ApiError::NotFound("No age coefficient for this gender and category".to_string())
        })?;

        let thresholds = GradeThresholds {
            beginner: standard.beginner,
            novice: standard.novice,
            intermediate: standard.intermediate,
            advanced: standard.advanced,
            elite: standard.elite,
        };

        Ok(assess(&thresholds, coefficient, measured))
    }

    /// Stateless strength level calculation
    pub async fn calculate(
        pool: &PgPool,
        req: CalculateStrengthLevelRequest,
    ) -> Result<StrengthLevelResponse, ApiError> {
        req.validate().map_err(ApiError::from_validation)?;

        let assessment = Self::grade(
            pool,
            req.gender,
            req.age,
            req.body_weight,
            req.category_id,
            req.measured_weight,
        )
        .await?;

        Ok(StrengthLevelResponse {
            grade: assessment.grade,
            adjusted_thresholds: assessment.adjusted,
            next_level_target: assessment.next_level_target,
            remaining: assessment.remaining,
        })
    }

    /// Grade a batch of measurements for a member and persist them atomically
    ///
    /// All grading reads happen up front, so a missing standard or
    /// coefficient aborts the batch before anything is written; the inserts
    /// then share one transaction and commit or roll back together.
    pub async fn calculate_measurements(
        pool: &PgPool,
        gym_id: i32,
        req: CalculateMeasurementsRequest,
    ) -> Result<CalculateMeasurementsResponse, ApiError> {
        req.validate().map_err(ApiError::from_validation)?;

        let member = MemberRepository::find_by_id(pool, req.member_id, gym_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Member not found".to_string()))?;

        let gender = parse_gender(&member.gender)?;
        let measured_at = Utc::now().date_naive();

        let mut graded = Vec::with_capacity(req.measurements.len());
        for measurement in &req.measurements {
            let assessment = Self::grade(
                pool,
                gender,
                member.age,
                member.weight,
                measurement.category_id,
                measurement.value,
            )
            .await?;
            graded.push((measurement, assessment));
        }

        let mut tx = pool.begin().await?;
        let mut results = Vec::with_capacity(graded.len());
        for (measurement, assessment) in graded {
            let record = PhysicalRecordRepository::create_in_tx(
                &mut tx,
                &CreatePhysicalRecord {
                    member_id: member.id,
                    category_id: measurement.category_id,
                    value: measurement.value,
                    measured_at,
                    age: member.age,
                    height: member.height,
                    weight: member.weight,
                    grade: assessment.grade.label().to_string(),
                    feedback: None,
                },
            )
            .await
            .map_err(ApiError::Internal)?;

            results.push(MeasurementResult {
                record_id: record.id,
                category_id: measurement.category_id,
                value: measurement.value,
                grade: assessment.grade,
                next_level_target: assessment.next_level_target,
                remaining: assessment.remaining,
            });
        }
        tx.commit().await?;

        debug!(
            member_id = member.id,
            count = results.len(),
            "measurement batch graded and saved"
        );

        Ok(CalculateMeasurementsResponse {
            member_id: member.id,
            results,
        })
    }
}
