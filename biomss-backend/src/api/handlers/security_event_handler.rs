// src/api/handlers/security_event_handler.rs
use crate::api::dto::common::ApiResponse;
use crate::api::dto::security_event_dto::{
    CreateSecurityEventDto, SecurityEventDto, SecurityEventFilterDto, UpdateSecurityEventDto,
};
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

pub async fn create_event_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateSecurityEventDto>,
) -> AppResult<impl IntoResponse> {
    user.require_security_staff()?;

    info!(user_id = %user.user_id(), "Logging security event");

    let event = app_state
        .security_event_service
        .create_event(&user.claims, payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        ApiResponse::success("Security event logged successfully", event),
    ))
}

pub async fn get_event_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<ApiResponse<SecurityEventDto>> {
    user.require_security_staff()?;

    let event = app_state.security_event_service.get_event(id).await?;
    Ok(ApiResponse::success("Security event retrieved", event))
}

pub async fn list_events_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Query(filter): Query<SecurityEventFilterDto>,
) -> AppResult<ApiResponse<PaginatedResponse<SecurityEventDto>>> {
    user.require_security_staff()?;

    let events = app_state
        .security_event_service
        .list_events(&filter)
        .await?;

    Ok(ApiResponse::success("Security events retrieved", events))
}

pub async fn update_event_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
    Json(payload): Json<UpdateSecurityEventDto>,
) -> AppResult<ApiResponse<SecurityEventDto>> {
    user.require_security_staff()?;

    let event = app_state
        .security_event_service
        .update_event(&user.claims, id, payload)
        .await?;

    Ok(ApiResponse::success(
        "Security event updated successfully",
        event,
    ))
}

pub async fn delete_event_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<ApiResponse<()>> {
    user.require_admin()?;

    app_state
        .security_event_service
        .delete_event(&user.claims, id)
        .await?;

    Ok(ApiResponse::success_message(
        "Security event deleted successfully",
    ))
}

// --- Router Setup ---

pub fn security_event_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/security-events",
            get(list_events_handler).post(create_event_handler),
        )
        .route(
            "/security-events/{id}",
            get(get_event_handler)
                .patch(update_event_handler)
                .delete(delete_event_handler),
        )
        .with_state(app_state)
}
