// src/service/security_event_service.rs
use crate::api::dto::security_event_dto::{
    CreateSecurityEventDto, SecurityEventDto, SecurityEventFilterDto, UpdateSecurityEventDto,
};
use crate::api::dto::PaginatedResponse;
use crate::db::DbPool;
use crate::domain::audit_log_model::AuditAction;
use crate::domain::lifecycle::on_security_event_transition;
use crate::domain::security_event_model::ActiveModel as SecurityEventActiveModel;
use crate::domain::security_event_status::SecurityEventStatus;
use crate::domain::user_model::UserClaims;
use crate::error::{AppError, AppResult};
use crate::repository::security_event_repository::SecurityEventRepository;
use crate::service::audit_log_service::{AuditLogService, LogActionParams};
use crate::with_transaction;
use chrono::Utc;
use sea_orm::Set;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

pub struct SecurityEventService {
    db: DbPool,
    repo: Arc<SecurityEventRepository>,
    audit_log_service: Arc<AuditLogService>,
}

impl SecurityEventService {
    pub fn new(db: DbPool, audit_log_service: Arc<AuditLogService>) -> Self {
        Self {
            repo: Arc::new(SecurityEventRepository::new(db.clone())),
            db,
            audit_log_service,
        }
    }

    pub async fn create_event(
        &self,
        actor: &UserClaims,
        payload: CreateSecurityEventDto,
    ) -> AppResult<SecurityEventDto> {
        payload.validate()?;

        let event = self.repo.create(&payload).await?;

        info!(
            event_id = %event.id,
            event_type = %event.event_type,
            severity = %event.severity,
            "Security event logged"
        );

        self.audit_log_service
            .log_action(LogActionParams {
                user_id: Some(actor.user_id),
                action: AuditAction::Create,
                resource_type: "security_event",
                resource_id: Some(event.id),
                description: format!("Logged {} security event", event.event_type),
                details: Some(serde_json::json!({ "severity": event.severity.clone() })),
            })
            .await;

        Ok(event.into())
    }

    pub async fn get_event(&self, id: Uuid) -> AppResult<SecurityEventDto> {
        let event = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Security event with id {} not found", id))
            })?;

        Ok(event.into())
    }

    pub async fn list_events(
        &self,
        filter: &SecurityEventFilterDto,
    ) -> AppResult<PaginatedResponse<SecurityEventDto>> {
        let (events, total) = self.repo.find_with_filter(filter).await?;

        let page = filter.page.unwrap_or(1).max(1);
        let per_page = filter.per_page.unwrap_or(20).clamp(1, 100);

        Ok(PaginatedResponse::new(
            events.into_iter().map(SecurityEventDto::from).collect(),
            page,
            per_page,
            total,
        ))
    }

    /// セキュリティイベントを更新する
    ///
    /// 初回のRESOLVED到達でのみ `resolved_at` を記録する。
    pub async fn update_event(
        &self,
        actor: &UserClaims,
        id: Uuid,
        payload: UpdateSecurityEventDto,
    ) -> AppResult<SecurityEventDto> {
        payload.validate()?;

        let new_status = match &payload.status {
            Some(raw) => Some(SecurityEventStatus::from_str(raw).ok_or_else(|| {
                AppError::ValidationError(format!(
                    "Invalid security event status: '{}'. Valid statuses are: {}",
                    raw,
                    SecurityEventStatus::all()
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
            let event = SecurityEventRepository::find_by_id_in_txn(txn, id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Security event with id {} not found", id))
                })?;

            let resolved_at = match new_status {
                Some(status) => on_security_event_transition(event.resolved_at, status, now),
                None => None,
            };

            let mut active: SecurityEventActiveModel = event.into();

            if let Some(event_type) = payload.event_type {
                active.event_type = Set(event_type.as_str().to_string());
            }
            if let Some(severity) = payload.severity {
                active.severity = Set(severity.as_str().to_string());
            }
            if let Some(description) = payload.description {
                active.description = Set(description);
            }
            if let Some(affected_system) = payload.affected_system {
                active.affected_system = Set(Some(affected_system));
            }
            if let Some(action_taken) = payload.action_taken {
                active.action_taken = Set(Some(action_taken));
            }
            if let Some(assigned_to) = payload.assigned_to {
                active.assigned_to = Set(Some(assigned_to));
            }
            if let Some(status) = new_status {
                active.status = Set(status.as_str().to_string());
            }
            if let Some(resolved_at) = resolved_at {
                active.resolved_at = Set(Some(resolved_at));
            }

            let updated = SecurityEventRepository::update(txn, active).await?;
            Ok(updated)
        })?;

        self.audit_log_service
            .log_action(LogActionParams {
                user_id: Some(actor_id),
                action: AuditAction::Update,
                resource_type: "security_event",
                resource_id: Some(updated.id),
                description: format!("Updated {} security event", updated.event_type),
                details: Some(serde_json::json!({ "status": updated.status.clone() })),
            })
            .await;

        Ok(updated.into())
    }

    pub async fn delete_event(&self, actor: &UserClaims, id: Uuid) -> AppResult<()> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Security event with id {} not found", id))
            })?;

        self.repo.delete_by_id(id).await?;

        self.audit_log_service
            .log_action(LogActionParams {
                user_id: Some(actor.user_id),
                action: AuditAction::Delete,
                resource_type: "security_event",
                resource_id: Some(id),
                description: "Deleted security event".to_string(),
                details: None,
            })
            .await;

        Ok(())
    }
}
