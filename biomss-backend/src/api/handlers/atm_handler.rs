// src/api/handlers/atm_handler.rs
use crate::api::dto::atm_dto::{AtmDto, AtmFilterDto, CreateAtmDto, UpdateAtmDto};
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

pub async fn register_atm_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateAtmDto>,
) -> AppResult<impl IntoResponse> {
    user.require_it_staff()?;

    let atm = app_state
        .atm_service
        .register_atm(&user.claims, payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        ApiResponse::success("ATM registered successfully", atm),
    ))
}

pub async fn get_atm_handler(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<ApiResponse<AtmDto>> {
    let atm = app_state.atm_service.get_atm(id).await?;
    Ok(ApiResponse::success("ATM retrieved", atm))
}

pub async fn list_atms_handler(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    Query(filter): Query<AtmFilterDto>,
) -> AppResult<ApiResponse<PaginatedResponse<AtmDto>>> {
    let atms = app_state.atm_service.list_atms(&filter).await?;
    Ok(ApiResponse::success("ATMs retrieved", atms))
}

pub async fn update_atm_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
    Json(payload): Json<UpdateAtmDto>,
) -> AppResult<ApiResponse<AtmDto>> {
    user.require_it_staff()?;

    let atm = app_state
        .atm_service
        .update_atm(&user.claims, id, payload)
        .await?;

    Ok(ApiResponse::success("ATM updated successfully", atm))
}

pub async fn delete_atm_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<ApiResponse<()>> {
    user.require_admin()?;

    app_state.atm_service.delete_atm(&user.claims, id).await?;

    Ok(ApiResponse::success_message("ATM deleted successfully"))
}

// --- Router Setup ---

pub fn atm_router(app_state: AppState) -> Router {
    Router::new()
        .route("/atms", get(list_atms_handler).post(register_atm_handler))
        .route(
            "/atms/{id}",
            get(get_atm_handler)
                .patch(update_atm_handler)
                .delete(delete_atm_handler),
        )
        .with_state(app_state)
}
