//! Route definitions for the gymgrade API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod age_coefficients;
mod auth;
mod evaluation_standards;
mod gyms;
mod health;
mod members;
mod physical_records;
mod public_physical_records;
mod test_categories;

#[cfg(test)]
mod auth_guard_tests;

pub use age_coefficients::age_coefficient_routes;
pub use auth::auth_routes;
pub use evaluation_standards::evaluation_standard_routes;
pub use gyms::gym_routes;
pub use members::member_routes;
pub use physical_records::physical_record_routes;
pub use public_physical_records::public_physical_record_routes;
pub use test_categories::test_category_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api/v1", api_routes())
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { "Gymgrade API v1" }))
        .nest("/auth", auth::auth_routes())
        .nest("/gyms", gyms::gym_routes())
        .nest("/members", members::member_routes())
        .nest("/test-categories", test_categories::test_category_routes())
        .nest(
            "/evaluation-standards",
            evaluation_standards::evaluation_standard_routes(),
        )
        .nest("/age-coefficients", age_coefficients::age_coefficient_routes())
        .nest("/physical-records", physical_records::physical_record_routes())
        .nest(
            "/public-physical-records",
            public_physical_records::public_physical_record_routes(),
        )
}
