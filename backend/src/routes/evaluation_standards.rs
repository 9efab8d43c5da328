//! Evaluation standard API routes

use crate::auth::AuthGym;
use crate::error::ApiResult;
use crate::services::EvaluationStandardService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use gymgrade_shared::types::{
    CreateEvaluationStandardRequest, EvaluationStandardResponse, UpdateEvaluationStandardRequest,
};

/// Create evaluation standard routes
pub fn evaluation_standard_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_standard).get(list_standards))
        .route(
            "/:id",
            get(get_standard).patch(update_standard).delete(delete_standard),
        )
}

/// POST /api/v1/evaluation-standards - Create a standard
async fn create_standard(
    State(state): State<AppState>,
    _auth: AuthGym,
    Json(req): Json<CreateEvaluationStandardRequest>,
) -> ApiResult<(StatusCode, Json<EvaluationStandardResponse>)> {
    let standard = EvaluationStandardService::create(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(standard)))
}

/// GET /api/v1/evaluation-standards - List standards
async fn list_standards(
    State(state): State<AppState>,
    _auth: AuthGym,
) -> ApiResult<Json<Vec<EvaluationStandardResponse>>> {
    let standards = EvaluationStandardService::list(state.db()).await?;
    Ok(Json(standards))
}

/// GET /api/v1/evaluation-standards/:id - Get a standard
async fn get_standard(
    State(state): State<AppState>,
    _auth: AuthGym,
    Path(id): Path<i32>,
) -> ApiResult<Json<EvaluationStandardResponse>> {
    let standard = EvaluationStandardService::get(state.db(), id).await?;
    Ok(Json(standard))
}

/// PATCH /api/v1/evaluation-standards/:id - Update a standard
async fn update_standard(
    State(state): State<AppState>,
    _auth: AuthGym,
    Path(id): Path<i32>,
    Json(req): Json<UpdateEvaluationStandardRequest>,
) -> ApiResult<Json<EvaluationStandardResponse>> {
    let standard = EvaluationStandardService::update(state.db(), id, req).await?;
    Ok(Json(standard))
}

/// DELETE /api/v1/evaluation-standards/:id - Delete a standard
async fn delete_standard(
    State(state): State<AppState>,
    _auth: AuthGym,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    EvaluationStandardService::delete(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
