// src/api/handlers/monitored_system_handler.rs
use crate::api::dto::common::ApiResponse;
use crate::api::dto::monitored_system_dto::{
    CreateMonitoredSystemDto, MonitoredSystemDto, MonitoredSystemFilterDto,
    UpdateMonitoredSystemDto,
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

// システム監視の閲覧・操作はITスタッフ専用

pub async fn add_system_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateMonitoredSystemDto>,
) -> AppResult<impl IntoResponse> {
    user.require_it_staff()?;

    let system = app_state
        .monitored_system_service
        .add_system(&user.claims, payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        ApiResponse::success("System added to monitoring", system),
    ))
}

pub async fn get_system_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<ApiResponse<MonitoredSystemDto>> {
    user.require_it_staff()?;

    let system = app_state.monitored_system_service.get_system(id).await?;
    Ok(ApiResponse::success("System retrieved", system))
}

pub async fn list_systems_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Query(filter): Query<MonitoredSystemFilterDto>,
) -> AppResult<ApiResponse<PaginatedResponse<MonitoredSystemDto>>> {
    user.require_it_staff()?;

    let systems = app_state
        .monitored_system_service
        .list_systems(&filter)
        .await?;

    Ok(ApiResponse::success("Systems retrieved", systems))
}

pub async fn update_system_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
    Json(payload): Json<UpdateMonitoredSystemDto>,
) -> AppResult<ApiResponse<MonitoredSystemDto>> {
    user.require_it_staff()?;

    let system = app_state
        .monitored_system_service
        .update_system(&user.claims, id, payload)
        .await?;

    Ok(ApiResponse::success("System updated successfully", system))
}

pub async fn remove_system_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<ApiResponse<()>> {
    user.require_admin()?;

    app_state
        .monitored_system_service
        .remove_system(&user.claims, id)
        .await?;

    Ok(ApiResponse::success_message("System removed from monitoring"))
}

// --- Router Setup ---

pub fn monitored_system_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/systems",
            get(list_systems_handler).post(add_system_handler),
        )
        .route(
            "/systems/{id}",
            get(get_system_handler)
                .patch(update_system_handler)
                .delete(remove_system_handler),
        )
        .with_state(app_state)
}
