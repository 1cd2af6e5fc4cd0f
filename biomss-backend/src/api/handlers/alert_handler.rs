// src/api/handlers/alert_handler.rs
use crate::api::dto::alert_dto::{AlertDto, AlertFilterDto, CreateAlertDto, UpdateAlertDto};
use crate::api::dto::common::ApiResponse;
use crate::api::dto::PaginatedResponse;
use crate::api::handlers::UuidPath;
use crate::api::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use tracing::info;

pub async fn create_alert_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateAlertDto>,
) -> AppResult<impl IntoResponse> {
    user.require_it_staff()?;

    info!(user_id = %user.user_id(), title = %payload.title, "Creating alert");

    let alert = app_state
        .alert_service
        .create_alert(&user.claims, payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        ApiResponse::success("Alert created successfully", alert),
    ))
}

pub async fn get_alert_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<ApiResponse<AlertDto>> {
    let alert = app_state.alert_service.get_alert(&user.claims, id).await?;
    Ok(ApiResponse::success("Alert retrieved", alert))
}

pub async fn list_alerts_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Query(filter): Query<AlertFilterDto>,
) -> AppResult<ApiResponse<PaginatedResponse<AlertDto>>> {
    let alerts = app_state
        .alert_service
        .list_alerts(&user.claims, &filter)
        .await?;

    Ok(ApiResponse::success("Alerts retrieved", alerts))
}

pub async fn update_alert_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
    Json(payload): Json<UpdateAlertDto>,
) -> AppResult<ApiResponse<AlertDto>> {
    user.require_it_staff()?;

    let alert = app_state
        .alert_service
        .update_alert(&user.claims, id, payload)
        .await?;

    Ok(ApiResponse::success("Alert updated successfully", alert))
}

pub async fn delete_alert_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<ApiResponse<()>> {
    user.require_admin()?;

    app_state
        .alert_service
        .delete_alert(&user.claims, id)
        .await?;

    Ok(ApiResponse::success_message("Alert deleted successfully"))
}

// --- Router Setup ---

pub fn alert_router(app_state: AppState) -> Router {
    Router::new()
        .route("/alerts", get(list_alerts_handler).post(create_alert_handler))
        .route(
            "/alerts/{id}",
            get(get_alert_handler)
                .patch(update_alert_handler)
                .delete(delete_alert_handler),
        )
        .with_state(app_state)
}
