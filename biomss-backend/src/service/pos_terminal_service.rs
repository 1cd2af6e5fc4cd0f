// src/service/pos_terminal_service.rs
use crate::api::dto::pos_terminal_dto::{
    CreatePosTerminalDto, PosTerminalDto, PosTerminalFilterDto, UpdatePosTerminalDto,
};
use crate::api::dto::PaginatedResponse;
use crate::domain::audit_log_model::AuditAction;
use crate::domain::user_model::UserClaims;
use crate::error::{AppError, AppResult};
use crate::repository::pos_terminal_repository::PosTerminalRepository;
use crate::service::audit_log_service::{AuditLogService, LogActionParams};
use crate::utils::transaction::is_unique_violation;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

pub struct PosTerminalService {
    repo: Arc<PosTerminalRepository>,
    audit_log_service: Arc<AuditLogService>,
}

impl PosTerminalService {
    pub fn new(
        repo: Arc<PosTerminalRepository>,
        audit_log_service: Arc<AuditLogService>,
    ) -> Self {
        Self {
            repo,
            audit_log_service,
        }
    }

    pub async fn register_terminal(
        &self,
        actor: &UserClaims,
        payload: CreatePosTerminalDto,
    ) -> AppResult<PosTerminalDto> {
        payload.validate()?;

        let terminal = self.repo.create(&payload).await.map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(
                    "A POS terminal with the same ID or serial number already exists".to_string(),
                )
            } else {
                AppError::DbErr(e)
            }
        })?;

        info!(
            pos_id = %terminal.id,
            terminal_id = %terminal.terminal_id,
            "POS terminal registered"
        );

        self.audit_log_service
            .log_action(LogActionParams {
                user_id: Some(actor.user_id),
                action: AuditAction::Create,
                resource_type: "pos_terminal",
                resource_id: Some(terminal.id),
                description: format!("Registered POS terminal {}", terminal.terminal_id),
                details: None,
            })
            .await;

        Ok(terminal.into())
    }

    pub async fn get_terminal(&self, id: Uuid) -> AppResult<PosTerminalDto> {
        let terminal = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("POS terminal with id {} not found", id)))?;

        Ok(terminal.into())
    }

    pub async fn list_terminals(
        &self,
        filter: &PosTerminalFilterDto,
    ) -> AppResult<PaginatedResponse<PosTerminalDto>> {
        let (terminals, total) = self.repo.find_with_filter(filter).await?;

        let page = filter.page.unwrap_or(1).max(1);
        let per_page = filter.per_page.unwrap_or(20).clamp(1, 100);

        Ok(PaginatedResponse::new(
            terminals.into_iter().map(PosTerminalDto::from).collect(),
            page,
            per_page,
            total,
        ))
    }

    pub async fn update_terminal(
        &self,
        actor: &UserClaims,
        id: Uuid,
        payload: UpdatePosTerminalDto,
    ) -> AppResult<PosTerminalDto> {
        payload.validate()?;

        let updated = self
            .repo
            .update(id, &payload)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("POS terminal with id {} not found", id)))?;

        self.audit_log_service
            .log_action(LogActionParams {
                user_id: Some(actor.user_id),
                action: AuditAction::Update,
                resource_type: "pos_terminal",
                resource_id: Some(updated.id),
                description: format!("Updated POS terminal {}", updated.terminal_id),
                details: Some(serde_json::json!({ "status": updated.status.clone() })),
            })
            .await;

        Ok(updated.into())
    }

    pub async fn delete_terminal(&self, actor: &UserClaims, id: Uuid) -> AppResult<()> {
        let terminal = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("POS terminal with id {} not found", id)))?;

        self.repo.delete_by_id(id).await?;

        self.audit_log_service
            .log_action(LogActionParams {
                user_id: Some(actor.user_id),
                action: AuditAction::Delete,
                resource_type: "pos_terminal",
                resource_id: Some(id),
                description: format!("Deleted POS terminal {}", terminal.terminal_id),
                details: None,
            })
            .await;

        Ok(())
    }
}
