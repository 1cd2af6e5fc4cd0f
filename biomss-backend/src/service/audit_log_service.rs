// src/service/audit_log_service.rs
use crate::api::dto::audit_log_dto::{AuditLogDto, AuditLogFilterDto};
use crate::api::dto::PaginatedResponse;
use crate::domain::audit_log_model::{AuditAction, AuditLogBuilder};
use crate::error::AppResult;
use crate::log_with_context;
use crate::repository::audit_log_repository::AuditLogRepository;
use chrono::{Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

// 監査ログ記録のためのパラメータ構造体
pub struct LogActionParams {
    pub user_id: Option<Uuid>,
    pub action: AuditAction,
    pub resource_type: &'static str,
    pub resource_id: Option<Uuid>,
    pub description: String,
    pub details: Option<serde_json::Value>,
}

pub struct AuditLogService {
    audit_log_repo: Arc<AuditLogRepository>,
}

impl AuditLogService {
    pub fn new(audit_log_repo: Arc<AuditLogRepository>) -> Self {
        Self { audit_log_repo }
    }

    /// 監査ログを記録する
    ///
    /// 業務操作を巻き込まないよう、失敗はログに残すだけでエラーにしない。
    /// 呼び出し側は戻り値を無視してよい。
    pub async fn log_action(&self, params: LogActionParams) {
        let mut builder = AuditLogBuilder::new(
            params.user_id,
            params.action,
            params.resource_type,
            params.description,
        );

        if let Some(id) = params.resource_id {
            builder = builder.resource_id(id);
        }
        if let Some(details) = params.details {
            builder = builder.details(details);
        }

        if let Err(e) = self.audit_log_repo.create(builder.build()).await {
            log_with_context!(
                tracing::Level::ERROR,
                "Failed to record audit log",
                "error" => &e.to_string(),
                "resource_type" => params.resource_type,
                "resource_id" => params.resource_id
            );
        }
    }

    // 監査ログを取得（管理者のみ、ハンドラー側でチェック）
    pub async fn list_logs(
        &self,
        filter: &AuditLogFilterDto,
    ) -> AppResult<PaginatedResponse<AuditLogDto>> {
        let (logs, total) = self.audit_log_repo.find_with_filter(filter).await?;

        let page = filter.page.unwrap_or(1).max(1);
        let per_page = filter.per_page.unwrap_or(50).clamp(1, 200);

        Ok(PaginatedResponse::new(
            logs.into_iter().map(AuditLogDto::from).collect(),
            page,
            per_page,
            total,
        ))
    }

    // 古いログの削除（デフォルトは90日以上前のログ）
    pub async fn cleanup_old_logs(&self, days_to_keep: i64) -> AppResult<u64> {
        let cutoff_date = Utc::now() - Duration::days(days_to_keep);

        let deleted_count = self.audit_log_repo.delete_old_logs(cutoff_date).await?;

        log_with_context!(
            tracing::Level::INFO,
            "Old audit logs cleaned up",
            "deleted_count" => deleted_count,
            "days_kept" => days_to_keep
        );

        Ok(deleted_count)
    }
}
