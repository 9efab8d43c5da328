//! Member API routes
//!
//! Member CRUD plus the strength grading operations. Everything is scoped
//! to the gym in the access token.

use crate::auth::AuthGym;
use crate::error::ApiResult;
use crate::services::{MemberService, PhysicalRecordService, StrengthService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use gymgrade_shared::types::{
    CalculateMeasurementsRequest, CalculateMeasurementsResponse, CalculateStrengthLevelRequest,
    CreateMemberRequest, MemberResponse, PhysicalRecordResponse, StrengthLevelResponse,
    UpdateMemberRequest,
};

/// Create member routes
pub fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_member).get(list_members))
        .route("/calculate-strength-level", post(calculate_strength_level))
        .route("/calculate-measurements", post(calculate_measurements))
        .route(
            "/:id",
            get(get_member).patch(update_member).delete(delete_member),
        )
        .route("/:id/measurements", get(member_measurements))
        .route("/:id/measurements/latest", get(member_latest_measurements))
}

/// POST /api/v1/members - Register a member
async fn create_member(
    State(state): State<AppState>,
    auth: AuthGym,
    Json(req): Json<CreateMemberRequest>,
) -> ApiResult<(StatusCode, Json<MemberResponse>)> {
    let member = MemberService::create(state.db(), auth.gym_id, req).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// GET /api/v1/members - List the gym's members
async fn list_members(
    State(state): State<AppState>,
    auth: AuthGym,
) -> ApiResult<Json<Vec<MemberResponse>>> {
    let members = MemberService::list(state.db(), auth.gym_id).await?;
    Ok(Json(members))
}

/// GET /api/v1/members/:id - Get a member
async fn get_member(
    State(state): State<AppState>,
    auth: AuthGym,
    Path(id): Path<i32>,
) -> ApiResult<Json<MemberResponse>> {
    let member = MemberService::get(state.db(), id, auth.gym_id).await?;
    Ok(Json(member))
}

/// PATCH /api/v1/members/:id - Update a member
async fn update_member(
    State(state): State<AppState>,
    auth: AuthGym,
    Path(id): Path<i32>,
    Json(req): Json<UpdateMemberRequest>,
) -> ApiResult<Json<MemberResponse>> {
    let member = MemberService::update(state.db(), id, auth.gym_id, req).await?;
    Ok(Json(member))
}

/// DELETE /api/v1/members/:id - Delete a member
async fn delete_member(
    State(state): State<AppState>,
    auth: AuthGym,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    MemberService::delete(state.db(), id, auth.gym_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/members/calculate-strength-level - Stateless grading
///
/// Grades a measurement against the stored standards without touching any
/// member data.
async fn calculate_strength_level(
    State(state): State<AppState>,
    _auth: AuthGym,
    Json(req): Json<CalculateStrengthLevelRequest>,
) -> ApiResult<Json<StrengthLevelResponse>> {
    let response = StrengthService::calculate(state.db(), req).await?;
    Ok(Json(response))
}

/// POST /api/v1/members/calculate-measurements - Batch grading
///
/// Grades every measurement for the member and persists the whole batch in
/// one transaction.
async fn calculate_measurements(
    State(state): State<AppState>,
    auth: AuthGym,
    Json(req): Json<CalculateMeasurementsRequest>,
) -> ApiResult<(StatusCode, Json<CalculateMeasurementsResponse>)> {
    let response = StrengthService::calculate_measurements(state.db(), auth.gym_id, req).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/v1/members/:id/measurements - Full measurement history
async fn member_measurements(
    State(state): State<AppState>,
    auth: AuthGym,
    Path(id): Path<i32>,
) -> ApiResult<Json<Vec<PhysicalRecordResponse>>> {
    let records = PhysicalRecordService::history(state.db(), id, auth.gym_id).await?;
    Ok(Json(records))
}

/// GET /api/v1/members/:id/measurements/latest - Newest record per category
async fn member_latest_measurements(
    State(state): State<AppState>,
    auth: AuthGym,
    Path(id): Path<i32>,
) -> ApiResult<Json<Vec<PhysicalRecordResponse>>> {
    let records = PhysicalRecordService::latest(state.db(), id, auth.gym_id).await?;
    Ok(Json(records))
}
