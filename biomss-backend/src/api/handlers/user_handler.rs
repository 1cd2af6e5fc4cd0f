// src/api/handlers/user_handler.rs
use crate::api::dto::common::ApiResponse;
use crate::api::dto::user_dto::{CreateUserDto, UpdateUserDto, UserDto, UserFilterDto};
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

// ユーザー管理はすべて管理者専用

pub async fn create_user_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateUserDto>,
) -> AppResult<impl IntoResponse> {
    user.require_admin()?;

    info!(admin_id = %user.user_id(), username = %payload.username, "Creating user");

    let created = app_state
        .user_service
        .create_user(&user.claims, payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        ApiResponse::success("User created successfully", created),
    ))
}

pub async fn get_user_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<ApiResponse<UserDto>> {
    user.require_admin()?;

    let found = app_state.user_service.get_user(id).await?;
    Ok(ApiResponse::success("User retrieved", found))
}

pub async fn list_users_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Query(filter): Query<UserFilterDto>,
) -> AppResult<ApiResponse<PaginatedResponse<UserDto>>> {
    user.require_admin()?;

    let users = app_state.user_service.list_users(&filter).await?;
    Ok(ApiResponse::success("Users retrieved", users))
}

pub async fn update_user_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
    Json(payload): Json<UpdateUserDto>,
) -> AppResult<ApiResponse<UserDto>> {
    user.require_admin()?;

    let updated = app_state
        .user_service
        .update_user(&user.claims, id, payload)
        .await?;

    Ok(ApiResponse::success("User updated successfully", updated))
}

pub async fn delete_user_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<ApiResponse<()>> {
    user.require_admin()?;

    app_state
        .user_service
        .delete_user(&user.claims, id)
        .await?;

    Ok(ApiResponse::success_message("User deleted successfully"))
}

// --- Router Setup ---

pub fn user_router(app_state: AppState) -> Router {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route(
            "/users/{id}",
            get(get_user_handler)
                .patch(update_user_handler)
                .delete(delete_user_handler),
        )
        .with_state(app_state)
}
