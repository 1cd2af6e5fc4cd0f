// src/api/handlers/audit_log_handler.rs
use crate::api::dto::audit_log_dto::{AuditLogDto, AuditLogFilterDto};
use crate::api::dto::common::ApiResponse;
use crate::api::dto::PaginatedResponse;
use crate::api::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use axum::{
    extract::{Query, State},
    routing::{delete, get},
    Router,
};
use serde::Deserialize;

// 監査ログは追記専用。読み取りと保持期間管理だけを公開する

pub async fn list_audit_logs_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Query(filter): Query<AuditLogFilterDto>,
) -> AppResult<ApiResponse<PaginatedResponse<AuditLogDto>>> {
    user.require_admin()?;

    let logs = app_state.audit_log_service.list_logs(&filter).await?;
    Ok(ApiResponse::success("Audit logs retrieved", logs))
}

#[derive(Deserialize)]
pub struct CleanupQuery {
    pub days_to_keep: Option<i64>,
}

pub async fn cleanup_audit_logs_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Query(query): Query<CleanupQuery>,
) -> AppResult<ApiResponse<serde_json::Value>> {
    user.require_admin()?;

    let days_to_keep = query.days_to_keep.unwrap_or(90).max(1);
    let deleted = app_state
        .audit_log_service
        .cleanup_old_logs(days_to_keep)
        .await?;

    Ok(ApiResponse::success(
        "Old audit logs deleted",
        serde_json::json!({ "deleted_count": deleted, "days_kept": days_to_keep }),
    ))
}

// --- Router Setup ---

pub fn audit_log_router(app_state: AppState) -> Router {
    Router::new()
        .route("/audit-logs", get(list_audit_logs_handler))
        .route("/audit-logs/cleanup", delete(cleanup_audit_logs_handler))
        .with_state(app_state)
}
