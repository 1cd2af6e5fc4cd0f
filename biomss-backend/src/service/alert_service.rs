// src/service/alert_service.rs
use crate::api::dto::alert_dto::{AlertDto, AlertFilterDto, CreateAlertDto, UpdateAlertDto};
use crate::api::dto::PaginatedResponse;
use crate::db::DbPool;
use crate::domain::alert_model::ActiveModel as AlertActiveModel;
use crate::domain::alert_status::AlertStatus;
use crate::domain::audit_log_model::AuditAction;
use crate::domain::lifecycle::{on_alert_transition, AlertSideEffects};
use crate::domain::user_model::UserClaims;
use crate::domain::visibility::AlertScope;
use crate::error::{AppError, AppResult};
use crate::repository::alert_repository::AlertRepository;
use crate::service::audit_log_service::{AuditLogService, LogActionParams};
use crate::with_transaction;
use chrono::Utc;
use sea_orm::Set;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

pub struct AlertService {
    db: DbPool,
    repo: Arc<AlertRepository>,
    audit_log_service: Arc<AuditLogService>,
}

impl AlertService {
    pub fn new(db: DbPool, audit_log_service: Arc<AuditLogService>) -> Self {
        Self {
            repo: Arc::new(AlertRepository::new(db.clone())),
            db,
            audit_log_service,
        }
    }

    fn scope_for(actor: &UserClaims) -> AlertScope {
        AlertScope::for_actor(Some(actor.role), actor.branch_id)
    }

    pub async fn create_alert(
        &self,
        actor: &UserClaims,
        payload: CreateAlertDto,
    ) -> AppResult<AlertDto> {
        payload.validate()?;

        let alert = self.repo.create(&payload).await?;

        info!(alert_id = %alert.id, alert_type = %alert.alert_type, "Alert created");

        self.audit_log_service
            .log_action(LogActionParams {
                user_id: Some(actor.user_id),
                action: AuditAction::Create,
                resource_type: "alert",
                resource_id: Some(alert.id),
                description: format!("Created alert '{}'", alert.title),
                details: Some(serde_json::json!({ "alert_type": alert.alert_type.clone() })),
            })
            .await;

        Ok(alert.into())
    }

    pub async fn get_alert(&self, actor: &UserClaims, id: Uuid) -> AppResult<AlertDto> {
        let alert = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Alert with id {} not found", id)))?;

        if !Self::scope_for(actor).permits(alert.branch_id) {
            return Err(AppError::NotFound(format!("Alert with id {} not found", id)));
        }

        Ok(alert.into())
    }

    pub async fn list_alerts(
        &self,
        actor: &UserClaims,
        filter: &AlertFilterDto,
    ) -> AppResult<PaginatedResponse<AlertDto>> {
        let scope = Self::scope_for(actor);
        let (alerts, total) = self.repo.find_with_scope(&scope, filter).await?;

        let page = filter.page.unwrap_or(1).max(1);
        let per_page = filter.per_page.unwrap_or(20).clamp(1, 100);

        Ok(PaginatedResponse::new(
            alerts.into_iter().map(AlertDto::from).collect(),
            page,
            per_page,
            total,
        ))
    }

    /// アラートを更新する
    ///
    /// 初回のACKNOWLEDGEDで確認者・確認時刻を、初回のRESOLVEDで解決時刻を
    /// ステータスと同一トランザクションで記録する。
    pub async fn update_alert(
        &self,
        actor: &UserClaims,
        id: Uuid,
        payload: UpdateAlertDto,
    ) -> AppResult<AlertDto> {
        payload.validate()?;

        let new_status = match &payload.status {
            Some(raw) => Some(AlertStatus::from_str(raw).ok_or_else(|| {
                AppError::ValidationError(format!(
                    "Invalid alert status: '{}'. Valid statuses are: {}",
                    raw,
                    AlertStatus::all()
                        .iter()
                        .map(|s| s.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })?),
            None => None,
        };

        let now = Utc::now();
        let actor_id = actor.user_id;

        let updated = with_transaction!(&self.db, |txn| async move {
            let alert = AlertRepository::find_by_id_in_txn(txn, id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Alert with id {} not found", id)))?;

            let effects = match new_status {
                Some(status) => on_alert_transition(&alert.timestamps(), status, actor_id, now),
                None => AlertSideEffects::default(),
            };

            let mut active: AlertActiveModel = alert.into();

            if let Some(message) = payload.message {
                active.message = Set(message);
            }
            if let Some(status) = new_status {
                active.status = Set(status.as_str().to_string());
            }

            if let Some(acknowledged_by) = effects.acknowledged_by {
                active.acknowledged_by = Set(Some(acknowledged_by));
            }
            if let Some(acknowledged_at) = effects.acknowledged_at {
                active.acknowledged_at = Set(Some(acknowledged_at));
            }
            if let Some(resolved_at) = effects.resolved_at {
                active.resolved_at = Set(Some(resolved_at));
            }

            let updated = AlertRepository::update(txn, active).await?;
            Ok(updated)
        })?;

        self.audit_log_service
            .log_action(LogActionParams {
                user_id: Some(actor_id),
                action: AuditAction::Update,
                resource_type: "alert",
                resource_id: Some(updated.id),
                description: format!("Updated alert '{}'", updated.title),
                details: Some(serde_json::json!({ "status": updated.status.clone() })),
            })
            .await;

        Ok(updated.into())
    }

    pub async fn delete_alert(&self, actor: &UserClaims, id: Uuid) -> AppResult<()> {
        let alert = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Alert with id {} not found", id)))?;

        self.repo.delete_by_id(id).await?;

        self.audit_log_service
            .log_action(LogActionParams {
                user_id: Some(actor.user_id),
                action: AuditAction::Delete,
                resource_type: "alert",
                resource_id: Some(id),
                description: format!("Deleted alert '{}'", alert.title),
                details: None,
            })
            .await;

        Ok(())
    }
}
