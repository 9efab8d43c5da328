//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod age_coefficients;
pub mod evaluation_standards;
pub mod gyms;
pub mod members;
pub mod physical_records;
pub mod public_physical_records;
pub mod refresh_tokens;
pub mod test_categories;

pub use age_coefficients::{
    AgeCoefficientRecord, AgeCoefficientRepository, CoefficientNeighbors, CreateAgeCoefficient,
    UpdateAgeCoefficient,
};
pub use evaluation_standards::{
    CreateEvaluationStandard, EvaluationStandardRecord, EvaluationStandardRepository,
    UpdateEvaluationStandard,
};
pub use gyms::{CreateGym, GymRecord, GymRepository, UpdateGym};
pub use members::{CreateMember, MemberRecord, MemberRepository, UpdateMember};
pub use physical_records::{
    CreatePhysicalRecord, PhysicalRecordRecord, PhysicalRecordRepository,
};
pub use public_physical_records::{
    CreatePublicPhysicalRecord, PublicPhysicalRecordRecord, PublicPhysicalRecordRepository,
    UpdatePublicPhysicalRecord,
};
pub use refresh_tokens::{RefreshTokenRecord, RefreshTokenRepository};
pub use test_categories::{TestCategoryRecord, TestCategoryRepository};
