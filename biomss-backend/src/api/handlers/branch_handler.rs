// src/api/handlers/branch_handler.rs
use crate::api::dto::branch_dto::{BranchDto, BranchFilterDto, CreateBranchDto, UpdateBranchDto};
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

pub async fn create_branch_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateBranchDto>,
) -> AppResult<impl IntoResponse> {
    user.require_admin()?;

    let branch = app_state
        .branch_service
        .create_branch(&user.claims, payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        ApiResponse::success("Branch created successfully", branch),
    ))
}

pub async fn get_branch_handler(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<ApiResponse<BranchDto>> {
    let branch = app_state.branch_service.get_branch(id).await?;
    Ok(ApiResponse::success("Branch retrieved", branch))
}

pub async fn list_branches_handler(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    Query(filter): Query<BranchFilterDto>,
) -> AppResult<ApiResponse<PaginatedResponse<BranchDto>>> {
    let branches = app_state.branch_service.list_branches(&filter).await?;
    Ok(ApiResponse::success("Branches retrieved", branches))
}

pub async fn update_branch_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
    Json(payload): Json<UpdateBranchDto>,
) -> AppResult<ApiResponse<BranchDto>> {
    user.require_admin()?;

    let branch = app_state
        .branch_service
        .update_branch(&user.claims, id, payload)
        .await?;

    Ok(ApiResponse::success("Branch updated successfully", branch))
}

pub async fn delete_branch_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<ApiResponse<()>> {
    user.require_admin()?;

    app_state
        .branch_service
        .delete_branch(&user.claims, id)
        .await?;

    Ok(ApiResponse::success_message("Branch deleted successfully"))
}

// --- Router Setup ---

pub fn branch_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/branches",
            get(list_branches_handler).post(create_branch_handler),
        )
        .route(
            "/branches/{id}",
            get(get_branch_handler)
                .patch(update_branch_handler)
                .delete(delete_branch_handler),
        )
        .with_state(app_state)
}
