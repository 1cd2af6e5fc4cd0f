// src/api/handlers/pos_terminal_handler.rs
use crate::api::dto::common::ApiResponse;
use crate::api::dto::pos_terminal_dto::{
    CreatePosTerminalDto, PosTerminalDto, PosTerminalFilterDto, UpdatePosTerminalDto,
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

pub async fn register_terminal_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreatePosTerminalDto>,
) -> AppResult<impl IntoResponse> {
    user.require_it_staff()?;

    let terminal = app_state
        .pos_terminal_service
        .register_terminal(&user.claims, payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        ApiResponse::success("POS terminal registered successfully", terminal),
    ))
}

pub async fn get_terminal_handler(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<ApiResponse<PosTerminalDto>> {
    let terminal = app_state.pos_terminal_service.get_terminal(id).await?;
    Ok(ApiResponse::success("POS terminal retrieved", terminal))
}

pub async fn list_terminals_handler(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    Query(filter): Query<PosTerminalFilterDto>,
) -> AppResult<ApiResponse<PaginatedResponse<PosTerminalDto>>> {
    let terminals = app_state
        .pos_terminal_service
        .list_terminals(&filter)
        .await?;

    Ok(ApiResponse::success("POS terminals retrieved", terminals))
}

pub async fn update_terminal_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
    Json(payload): Json<UpdatePosTerminalDto>,
) -> AppResult<ApiResponse<PosTerminalDto>> {
    user.require_it_staff()?;

    let terminal = app_state
        .pos_terminal_service
        .update_terminal(&user.claims, id, payload)
        .await?;

    Ok(ApiResponse::success(
        "POS terminal updated successfully",
        terminal,
    ))
}

pub async fn delete_terminal_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<ApiResponse<()>> {
    user.require_admin()?;

    app_state
        .pos_terminal_service
        .delete_terminal(&user.claims, id)
        .await?;

    Ok(ApiResponse::success_message(
        "POS terminal deleted successfully",
    ))
}

// --- Router Setup ---

pub fn pos_terminal_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/pos-terminals",
            get(list_terminals_handler).post(register_terminal_handler),
        )
        .route(
            "/pos-terminals/{id}",
            get(get_terminal_handler)
                .patch(update_terminal_handler)
                .delete(delete_terminal_handler),
        )
        .with_state(app_state)
}
