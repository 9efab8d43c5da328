//! Physical record API routes

use crate::auth::AuthGym;
use crate::error::ApiResult;
use crate::services::PhysicalRecordService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use gymgrade_shared::types::{
    CreatePhysicalRecordRequest, PhysicalRecordResponse, UpdatePhysicalRecordRequest,
};

/// Create physical record routes
pub fn physical_record_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_record).get(list_records))
        .route(
            "/:id",
            get(get_record).patch(update_record).delete(delete_record),
        )
}

/// POST /api/v1/physical-records - Record a measurement
async fn create_record(
    State(state): State<AppState>,
    auth: AuthGym,
    Json(req): Json<CreatePhysicalRecordRequest>,
) -> ApiResult<(StatusCode, Json<PhysicalRecordResponse>)> {
    let record = PhysicalRecordService::create(state.db(), auth.gym_id, req).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/physical-records - List the gym's records
async fn list_records(
    State(state): State<AppState>,
    auth: AuthGym,
) -> ApiResult<Json<Vec<PhysicalRecordResponse>>> {
    let records = PhysicalRecordService::list(state.db(), auth.gym_id).await?;
    Ok(Json(records))
}

/// GET /api/v1/physical-records/:id - Get a record
async fn get_record(
    State(state): State<AppState>,
    auth: AuthGym,
    Path(id): Path<i32>,
) -> ApiResult<Json<PhysicalRecordResponse>> {
    let record = PhysicalRecordService::get(state.db(), id, auth.gym_id).await?;
    Ok(Json(record))
}

/// PATCH /api/v1/physical-records/:id - Update trainer feedback
async fn update_record(
    State(state): State<AppState>,
    auth: AuthGym,
    Path(id): Path<i32>,
    Json(req): Json<UpdatePhysicalRecordRequest>,
) -> ApiResult<Json<PhysicalRecordResponse>> {
    let record = PhysicalRecordService::update(state.db(), id, auth.gym_id, req).await?;
    Ok(Json(record))
}

/// DELETE /api/v1/physical-records/:id - Delete a record
async fn delete_record(
    State(state): State<AppState>,
    auth: AuthGym,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    PhysicalRecordService::delete(state.db(), id, auth.gym_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
