//! API request and response types

use crate::grading::{Gender, Grade, GradeThresholds};
use crate::validation::{
    validate_body_weight, validate_coefficient, validate_measured_value, validate_member_height,
    validate_member_weight,
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// Auth
// ============================================================================

/// Signup request (creates a gym account)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email, length(max = 100))]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    #[validate(length(min = 1, max = 100))]
    pub gym_name: String,
    #[validate(length(min = 1, max = 50))]
    pub owner_name: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response; the refresh token travels in an HTTP-only cookie,
/// never in the body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub gym: GymResponse,
}

/// Refresh response (new access token only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Generic message response (logout)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Gyms
// ============================================================================

/// Gym account, password hash never included
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GymResponse {
    pub id: i32,
    pub email: String,
    pub gym_name: String,
    pub owner_name: String,
    pub created_at: DateTime<Utc>,
}

/// Create gym request (admin-style creation, same fields as signup)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateGymRequest {
    #[validate(email, length(max = 100))]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    #[validate(length(min = 1, max = 100))]
    pub gym_name: String,
    #[validate(length(min = 1, max = 50))]
    pub owner_name: String,
}

/// Update gym request, all fields optional
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateGymRequest {
    #[validate(email, length(max = 100))]
    pub email: Option<String>,
    #[validate(length(min = 8, max = 128))]
    pub password: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub gym_name: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub owner_name: Option<String>,
}

// ============================================================================
// Members
// ============================================================================

/// Create member request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMemberRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    pub gender: Gender,
    #[validate(range(min = 1, max = 150))]
    pub age: i32,
    #[validate(custom(function = validate_member_height))]
    pub height: Decimal,
    #[validate(custom(function = validate_member_weight))]
    pub weight: Decimal,
    pub notes: Option<String>,
}

/// Update member request, all fields optional
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateMemberRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,
    pub gender: Option<Gender>,
    #[validate(range(min = 1, max = 150))]
    pub age: Option<i32>,
    #[validate(custom(function = validate_member_height))]
    pub height: Option<Decimal>,
    #[validate(custom(function = validate_member_weight))]
    pub weight: Option<Decimal>,
    pub notes: Option<String>,
}

/// Member as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberResponse {
    pub id: i32,
    pub gym_id: i32,
    pub name: String,
    pub gender: Gender,
    pub age: i32,
    pub height: Decimal,
    pub weight: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Test Categories
// ============================================================================

/// Create test category request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTestCategoryRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 20))]
    pub unit: String,
}

/// Update test category request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTestCategoryRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub unit: Option<String>,
}

/// Test category as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCategoryResponse {
    pub id: i32,
    pub name: String,
    pub unit: String,
}

// ============================================================================
// Evaluation Standards
// ============================================================================

/// Create evaluation standard request
///
/// One row per (gender, category, bodyweight bracket); every grade threshold
/// is optional so partial ladders can be seeded.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEvaluationStandardRequest {
    pub gender: Gender,
    #[validate(range(min = 1))]
    pub category_id: i32,
    #[validate(custom(function = validate_body_weight))]
    pub body_weight: Decimal,
    pub beginner: Option<Decimal>,
    pub novice: Option<Decimal>,
    pub intermediate: Option<Decimal>,
    pub advanced: Option<Decimal>,
    pub elite: Option<Decimal>,
}

/// Update evaluation standard request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateEvaluationStandardRequest {
    pub gender: Option<Gender>,
    #[validate(range(min = 1))]
    pub category_id: Option<i32>,
    #[validate(custom(function = validate_body_weight))]
    pub body_weight: Option<Decimal>,
    pub beginner: Option<Decimal>,
    pub novice: Option<Decimal>,
    pub intermediate: Option<Decimal>,
    pub advanced: Option<Decimal>,
    pub elite: Option<Decimal>,
}

/// Evaluation standard as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationStandardResponse {
    pub id: i32,
    pub gender: Gender,
    pub category_id: i32,
    pub body_weight: Decimal,
    pub thresholds: GradeThresholds,
}

// ============================================================================
// Age Coefficients
// ============================================================================

/// Create age coefficient request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAgeCoefficientRequest {
    pub gender: Gender,
    #[validate(range(min = 1))]
    pub category_id: i32,
    #[validate(range(min = 1, max = 150))]
    pub age: i32,
    #[validate(custom(function = validate_coefficient))]
    pub coefficient: Decimal,
}

/// Update age coefficient request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateAgeCoefficientRequest {
    pub gender: Option<Gender>,
    #[validate(range(min = 1))]
    pub category_id: Option<i32>,
    #[validate(range(min = 1, max = 150))]
    pub age: Option<i32>,
    #[validate(custom(function = validate_coefficient))]
    pub coefficient: Option<Decimal>,
}

/// Age coefficient as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeCoefficientResponse {
    pub id: i32,
    pub gender: Gender,
    pub category_id: i32,
    pub age: i32,
    pub coefficient: Decimal,
}

// ============================================================================
// Physical Records
// ============================================================================

/// Create physical record request
///
/// The member's age/height/weight are snapshotted server-side and the grade
/// is computed, so only the measurement itself is accepted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePhysicalRecordRequest {
    #[validate(range(min = 1))]
    pub member_id: i32,
    #[validate(range(min = 1))]
    pub category_id: i32,
    #[validate(custom(function = validate_measured_value))]
    pub value: Decimal,
    /// Defaults to today when omitted
    pub measured_at: Option<NaiveDate>,
    pub feedback: Option<String>,
}

/// Update physical record request
///
/// Records are an immutable measurement history; only the trainer feedback
/// can change after the fact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePhysicalRecordRequest {
    pub feedback: Option<String>,
}

/// Physical record as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicalRecordResponse {
    pub id: i32,
    pub member_id: i32,
    pub category_id: i32,
    pub value: Decimal,
    pub measured_at: NaiveDate,
    /// Member snapshot at measurement time
    pub age: i32,
    pub height: Decimal,
    pub weight: Decimal,
    pub grade: Grade,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Public Physical Records
// ============================================================================

/// Create public physical record request (imported reference measurements)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePublicPhysicalRecordRequest {
    pub gender: Gender,
    #[validate(range(min = 1, max = 150))]
    pub age: i32,
    #[validate(range(min = 1))]
    pub category_id: i32,
    #[validate(custom(function = validate_measured_value))]
    pub measured_value: Decimal,
}

/// Update public physical record request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePublicPhysicalRecordRequest {
    pub gender: Option<Gender>,
    #[validate(range(min = 1, max = 150))]
    pub age: Option<i32>,
    #[validate(range(min = 1))]
    pub category_id: Option<i32>,
    #[validate(custom(function = validate_measured_value))]
    pub measured_value: Option<Decimal>,
}

/// Public physical record as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicPhysicalRecordResponse {
    pub id: i32,
    pub gender: Gender,
    pub age: i32,
    pub category_id: i32,
    pub measured_value: Decimal,
}

// ============================================================================
// Strength Level Calculation
// ============================================================================

/// Stateless strength level calculation request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CalculateStrengthLevelRequest {
    pub gender: Gender,
    #[validate(range(min = 1, max = 150))]
    pub age: i32,
    #[validate(custom(function = validate_body_weight))]
    pub body_weight: Decimal,
    #[validate(custom(function = validate_measured_value))]
    pub measured_weight: Decimal,
    #[validate(range(min = 1))]
    pub category_id: i32,
}

/// Strength level calculation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthLevelResponse {
    pub grade: Grade,
    /// Thresholds after age adjustment
    pub adjusted_thresholds: GradeThresholds,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_level_target: Option<Decimal>,
    pub remaining: Decimal,
}

/// One measurement in a batch grading request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MeasurementInput {
    #[validate(range(min = 1))]
    pub category_id: i32,
    #[validate(custom(function = validate_measured_value))]
    pub value: Decimal,
}

/// Batch grading request: grade and persist several measurements atomically
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CalculateMeasurementsRequest {
    #[validate(range(min = 1))]
    pub member_id: i32,
    #[validate(length(min = 1), nested)]
    pub measurements: Vec<MeasurementInput>,
}

/// One graded measurement out of a batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementResult {
    pub record_id: i32,
    pub category_id: i32,
    pub value: Decimal,
    pub grade: Grade,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_level_target: Option<Decimal>,
    pub remaining: Decimal,
}

/// Batch grading response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateMeasurementsResponse {
    pub member_id: i32,
    pub results: Vec<MeasurementResult>,
}
