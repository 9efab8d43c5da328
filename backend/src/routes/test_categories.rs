//! Test category API routes

use crate::auth::AuthGym;
use crate::error::ApiResult;
use crate::services::TestCategoryService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use gymgrade_shared::types::{
    CreateTestCategoryRequest, TestCategoryResponse, UpdateTestCategoryRequest,
};

/// Create test category routes
pub fn test_category_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_category).get(list_categories))
        .route(
            "/:id",
            get(get_category).patch(update_category).delete(delete_category),
        )
}

/// POST /api/v1/test-categories - Create a category
async fn create_category(
    State(state): State<AppState>,
    _auth: AuthGym,
    Json(req): Json<CreateTestCategoryRequest>,
) -> ApiResult<(StatusCode, Json<TestCategoryResponse>)> {
    let category = TestCategoryService::create(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/v1/test-categories - List categories
async fn list_categories(
    State(state): State<AppState>,
    _auth: AuthGym,
) -> ApiResult<Json<Vec<TestCategoryResponse>>> {
    let categories = TestCategoryService::list(state.db()).await?;
    Ok(Json(categories))
}

/// GET /api/v1/test-categories/:id - Get a category
async fn get_category(
    State(state): State<AppState>,
    _auth: AuthGym,
    Path(id): Path<i32>,
) -> ApiResult<Json<TestCategoryResponse>> {
    let category = TestCategoryService::get(state.db(), id).await?;
    Ok(Json(category))
}

/// PATCH /api/v1/test-categories/:id - Update a category
async fn update_category(
    State(state): State<AppState>,
    _auth: AuthGym,
    Path(id): Path<i32>,
    Json(req): Json<UpdateTestCategoryRequest>,
) -> ApiResult<Json<TestCategoryResponse>> {
    let category = TestCategoryService::update(state.db(), id, req).await?;
    Ok(Json(category))
}

/// DELETE /api/v1/test-categories/:id - Delete a category
async fn delete_category(
    State(state): State<AppState>,
    _auth: AuthGym,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    TestCategoryService::delete(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
