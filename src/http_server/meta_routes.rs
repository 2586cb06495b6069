//! Meta HTTP Routes
//!
//! Welcome message, liveness check, and a database connectivity probe.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use super::server::AppState;
use crate::error::ApiResult;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Create the meta routes
pub fn meta_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/api/health", get(health_handler))
        .route("/api/db-test", get(db_test_handler))
        .with_state(state)
}

/// Static welcome message
async fn home_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the pgbridge API. Use /api/items to access the API.".to_string(),
    })
}

/// Liveness check, no database involved
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "API is running".to_string(),
    })
}

/// Round-trip `SELECT 1` through the pool
async fn db_test_handler(State(state): State<Arc<AppState>>) -> ApiResult<Json<MessageResponse>> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.pool)
        .await?;

    Ok(Json(MessageResponse {
        message: "Database connection successful".to_string(),
    }))
}
