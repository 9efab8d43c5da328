//! Public physical record API routes

use crate::auth::AuthGym;
use crate::error::ApiResult;
use crate::services::PublicPhysicalRecordService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use gymgrade_shared::types::{
    CreatePublicPhysicalRecordRequest, PublicPhysicalRecordResponse,
    UpdatePublicPhysicalRecordRequest,
};

/// Create public physical record routes
pub fn public_physical_record_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_record).get(list_records))
        .route(
            "/:id",
            get(get_record).patch(update_record).delete(delete_record),
        )
}

/// POST /api/v1/public-physical-records - Create a reference record
async fn create_record(
    State(state): State<AppState>,
    _auth: AuthGym,
    Json(req): Json<CreatePublicPhysicalRecordRequest>,
) -> ApiResult<(StatusCode, Json<PublicPhysicalRecordResponse>)> {
    let record = PublicPhysicalRecordService::create(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/public-physical-records - List reference records
async fn list_records(
    State(state): State<AppState>,
    _auth: AuthGym,
) -> ApiResult<Json<Vec<PublicPhysicalRecordResponse>>> {
    let records = PublicPhysicalRecordService::list(state.db()).await?;
    Ok(Json(records))
}

/// GET /api/v1/public-physical-records/:id - Get a reference record
async fn get_record(
    State(state): State<AppState>,
    _auth: AuthGym,
    Path(id): Path<i32>,
) -> ApiResult<Json<PublicPhysicalRecordResponse>> {
    let record = PublicPhysicalRecordService::get(state.db(), id).await?;
    Ok(Json(record))
}

/// PATCH /api/v1/public-physical-records/:id - Update a reference record
async fn update_record(
    State(state): State<AppState>,
    _auth: AuthGym,
    Path(id): Path<i32>,
    Json(req): Json<UpdatePublicPhysicalRecordRequest>,
) -> ApiResult<Json<PublicPhysicalRecordResponse>> {
    let record = PublicPhysicalRecordService::update(state.db(), id, req).await?;
    Ok(Json(record))
}

/// DELETE /api/v1/public-physical-records/:id - Delete a reference record
async fn delete_record(
    State(state): State<AppState>,
    _auth: AuthGym,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    PublicPhysicalRecordService::delete(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
