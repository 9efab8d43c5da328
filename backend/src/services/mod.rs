//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the grading engine.

pub mod age_coefficients;
pub mod auth;
pub mod evaluation_standards;
pub mod gyms;
pub mod members;
pub mod physical_records;
pub mod public_physical_records;
pub mod strength;
pub mod test_categories;

pub use age_coefficients::AgeCoefficientService;
pub use auth::AuthService;
pub use evaluation_standards::EvaluationStandardService;
pub use gyms::GymService;
pub use members::MemberService;
pub use physical_records::PhysicalRecordService;
pub use public_physical_records::PublicPhysicalRecordService;
pub use strength::StrengthService;
pub use test_categories::TestCategoryService;

use crate::error::ApiError;
use gymgrade_shared::grading::{Gender, Grade};

/// Parse a stored gender column; a bad value means corrupt data, not user error
pub(crate) fn parse_gender(value: &str) -> Result<Gender, ApiError> {
    value
        .parse::<Gender>()
        .map_err(|e| ApiError::Internal(anyhow::anyhow!(e)))
}

/// Parse a stored grade column
pub(crate) fn parse_grade(value: &str) -> Result<Grade, ApiError> {
    value
        .parse::<Grade>()
        .map_err(|e| ApiError::Internal(anyhow::anyhow!(e)))
}
