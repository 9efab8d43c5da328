//! Gym account API routes

use crate::auth::AuthGym;
use crate::error::ApiResult;
use crate::services::GymService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use gymgrade_shared::types::{CreateGymRequest, GymResponse, UpdateGymRequest};

/// Create gym routes
pub fn gym_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_gym).get(list_gyms))
        .route("/:id", get(get_gym).patch(update_gym).delete(delete_gym))
}

/// POST /api/v1/gyms - Create a gym account
async fn create_gym(
    State(state): State<AppState>,
    _auth: AuthGym,
    Json(req): Json<CreateGymRequest>,
) -> ApiResult<(StatusCode, Json<GymResponse>)> {
    let gym = GymService::create(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(gym)))
}

/// GET /api/v1/gyms - List gyms
async fn list_gyms(
    State(state): State<AppState>,
    _auth: AuthGym,
) -> ApiResult<Json<Vec<GymResponse>>> {
    let gyms = GymService::list(state.db()).await?;
    Ok(Json(gyms))
}

/// GET /api/v1/gyms/:id - Get a gym
async fn get_gym(
    State(state): State<AppState>,
    _auth: AuthGym,
    Path(id): Path<i32>,
) -> ApiResult<Json<GymResponse>> {
    let gym = GymService::get(state.db(), id).await?;
    Ok(Json(gym))
}

/// PATCH /api/v1/gyms/:id - Update a gym
async fn update_gym(
    State(state): State<AppState>,
    _auth: AuthGym,
    Path(id): Path<i32>,
    Json(req): Json<UpdateGymRequest>,
) -> ApiResult<Json<GymResponse>> {
    let gym = GymService::update(state.db(), id, req).await?;
    Ok(Json(gym))
}

/// DELETE /api/v1/gyms/:id - Delete a gym
async fn delete_gym(
    State(state): State<AppState>,
    _auth: AuthGym,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    GymService::delete(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
