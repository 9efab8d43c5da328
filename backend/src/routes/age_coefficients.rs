//! Age coefficient API routes

use crate::auth::AuthGym;
use crate::error::ApiResult;
use crate::services::AgeCoefficientService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use gymgrade_shared::types::{
    AgeCoefficientResponse, CreateAgeCoefficientRequest, UpdateAgeCoefficientRequest,
};

/// Create age coefficient routes
pub fn age_coefficient_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_coefficient).get(list_coefficients))
        .route(
            "/:id",
            get(get_coefficient)
                .patch(update_coefficient)
                .delete(delete_coefficient),
        )
}

/// POST /api/v1/age-coefficients - Create a coefficient
async fn create_coefficient(
    State(state): State<AppState>,
    _auth: AuthGym,
    Json(req): Json<CreateAgeCoefficientRequest>,
) -> ApiResult<(StatusCode, Json<AgeCoefficientResponse>)> {
    let coefficient = AgeCoefficientService::create(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(coefficient)))
}

/// GET /api/v1/age-coefficients - List coefficients
async fn list_coefficients(
    State(state): State<AppState>,
    _auth: AuthGym,
) -> ApiResult<Json<Vec<AgeCoefficientResponse>>> {
    let coefficients = AgeCoefficientService::list(state.db()).await?;
    Ok(Json(coefficients))
}

/// GET /api/v1/age-coefficients/:id - Get a coefficient
async fn get_coefficient(
    State(state): State<AppState>,
    _auth: AuthGym,
    Path(id): Path<i32>,
) -> ApiResult<Json<AgeCoefficientResponse>> {
    let coefficient = AgeCoefficientService::get(state.db(), id).await?;
    Ok(Json(coefficient))
}

/// PATCH /api/v1/age-coefficients/:id - Update a coefficient
async fn update_coefficient(
    State(state): State<AppState>,
    _auth: AuthGym,
    Path(id): Path<i32>,
    Json(req): Json<UpdateAgeCoefficientRequest>,
) -> ApiResult<Json<AgeCoefficientResponse>> {
    let coefficient = AgeCoefficientService::update(state.db(), id, req).await?;
    Ok(Json(coefficient))
}

/// DELETE /api/v1/age-coefficients/:id - Delete a coefficient
async fn delete_coefficient(
    State(state): State<AppState>,
    _auth: AuthGym,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    AgeCoefficientService::delete(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
