// src/api/handlers/system_handler.rs
use crate::api::dto::common::ApiResponse;
use crate::api::AppState;
use crate::error::AppResult;
use axum::{extract::State, routing::get, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct HealthStatus {
    pub status: String,
    pub database: String,
    pub version: String,
    pub timestamp: chrono::DateTime<Utc>,
}

pub async fn health_check_handler(
    State(app_state): State<AppState>,
) -> AppResult<ApiResponse<HealthStatus>> {
    let database = match app_state.db.ping().await {
        Ok(()) => "up".to_string(),
        Err(_) => "down".to_string(),
    };

    let status = if database == "up" { "healthy" } else { "degraded" };

    Ok(ApiResponse::success(
        "Health check",
        HealthStatus {
            status: status.to_string(),
            database,
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
        },
    ))
}

// --- Router Setup ---

pub fn system_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check_handler))
        .with_state(app_state)
}
