// src/api/handlers/auth_handler.rs
use crate::api::dto::auth_dto::{SigninDto, SigninResponseDto};
use crate::api::dto::common::ApiResponse;
use crate::api::dto::user_dto::UserDto;
use crate::api::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use axum::{
    extract::{Json, State},
    routing::{get, post},
    Router,
};
use tracing::info;

pub async fn signin_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<SigninDto>,
) -> AppResult<ApiResponse<SigninResponseDto>> {
    info!(identifier = %payload.identifier, "Signin attempt");

    let response = app_state.auth_service.signin(payload).await?;

    Ok(ApiResponse::success("Signed in successfully", response))
}

pub async fn me_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<ApiResponse<UserDto>> {
    let current = app_state.auth_service.current_user(user.user_id()).await?;
    Ok(ApiResponse::success("Current user", current))
}

pub async fn signout_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<ApiResponse<()>> {
    app_state.auth_service.signout(&user.claims).await;
    Ok(ApiResponse::success_message("Signed out successfully"))
}

// --- Router Setup ---

pub fn auth_router(app_state: AppState) -> Router {
    Router::new()
        .route("/auth/signin", post(signin_handler))
        .route("/auth/me", get(me_handler))
        .route("/auth/signout", post(signout_handler))
        .with_state(app_state)
}
