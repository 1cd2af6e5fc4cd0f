// src/service/monitored_system_service.rs
use crate::api::dto::monitored_system_dto::{
    CreateMonitoredSystemDto, MonitoredSystemDto, MonitoredSystemFilterDto,
    UpdateMonitoredSystemDto,
};
use crate::api::dto::PaginatedResponse;
use crate::domain::audit_log_model::AuditAction;
use crate::domain::user_model::UserClaims;
use crate::error::{AppError, AppResult};
use crate::repository::monitored_system_repository::MonitoredSystemRepository;
use crate::service::audit_log_service::{AuditLogService, LogActionParams};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

pub struct MonitoredSystemService {
    repo: Arc<MonitoredSystemRepository>,
    audit_log_service: Arc<AuditLogService>,
}

impl MonitoredSystemService {
    pub fn new(
        repo: Arc<MonitoredSystemRepository>,
        audit_log_service: Arc<AuditLogService>,
    ) -> Self {
        Self {
            repo,
            audit_log_service,
        }
    }

    pub async fn add_system(
        &self,
        actor: &UserClaims,
        payload: CreateMonitoredSystemDto,
    ) -> AppResult<MonitoredSystemDto> {
        payload.validate()?;

        let system = self.repo.create(&payload).await?;

        info!(
            system_id = %system.id,
            system_name = %system.system_name,
            system_type = %system.system_type,
            "System added to monitoring"
        );

        self.audit_log_service
            .log_action(LogActionParams {
                user_id: Some(actor.user_id),
                action: AuditAction::Create,
                resource_type: "monitored_system",
                resource_id: Some(system.id),
                description: format!("Added system {} to monitoring", system.system_name),
                details: None,
            })
            .await;

        Ok(system.into())
    }

    pub async fn get_system(&self, id: Uuid) -> AppResult<MonitoredSystemDto> {
        let system = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("System with id {} not found", id)))?;

        Ok(system.into())
    }

    pub async fn list_systems(
        &self,
        filter: &MonitoredSystemFilterDto,
    ) -> AppResult<PaginatedResponse<MonitoredSystemDto>> {
        let (systems, total) = self.repo.find_with_filter(filter).await?;

        let page = filter.page.unwrap_or(1).max(1);
        let per_page = filter.per_page.unwrap_or(20).clamp(1, 100);

        Ok(PaginatedResponse::new(
            systems.into_iter().map(MonitoredSystemDto::from).collect(),
            page,
            per_page,
            total,
        ))
    }

    pub async fn update_system(
        &self,
        actor: &UserClaims,
        id: Uuid,
        payload: UpdateMonitoredSystemDto,
    ) -> AppResult<MonitoredSystemDto> {
        payload.validate()?;

        let updated = self
            .repo
            .update(id, &payload)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("System with id {} not found", id)))?;

        self.audit_log_service
            .log_action(LogActionParams {
                user_id: Some(actor.user_id),
                action: AuditAction::Update,
                resource_type: "monitored_system",
                resource_id: Some(updated.id),
                description: format!("Updated monitored system {}", updated.system_name),
                details: Some(serde_json::json!({ "status": updated.status.clone() })),
            })
            .await;

        Ok(updated.into())
    }

    pub async fn remove_system(&self, actor: &UserClaims, id: Uuid) -> AppResult<()> {
        let system = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("System with id {} not found", id)))?;

        self.repo.delete_by_id(id).await?;

        self.audit_log_service
            .log_action(LogActionParams {
                user_id: Some(actor.user_id),
                action: AuditAction::Delete,
                resource_type: "monitored_system",
                resource_id: Some(id),
                description: format!("Removed system {} from monitoring", system.system_name),
                details: None,
            })
            .await;

        Ok(())
    }
}
