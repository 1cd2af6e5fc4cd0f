// src/service/atm_service.rs
use crate::api::dto::atm_dto::{AtmDto, AtmFilterDto, CreateAtmDto, UpdateAtmDto};
use crate::api::dto::PaginatedResponse;
use crate::domain::audit_log_model::AuditAction;
use crate::domain::user_model::UserClaims;
use crate::error::{AppError, AppResult};
use crate::repository::atm_repository::AtmRepository;
use crate::service::audit_log_service::{AuditLogService, LogActionParams};
use crate::utils::transaction::is_unique_violation;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

pub struct AtmService {
    repo: Arc<AtmRepository>,
    audit_log_service: Arc<AuditLogService>,
}

impl AtmService {
    pub fn new(repo: Arc<AtmRepository>, audit_log_service: Arc<AuditLogService>) -> Self {
        Self {
            repo,
            audit_log_service,
        }
    }

    pub async fn register_atm(
        &self,
        actor: &UserClaims,
        payload: CreateAtmDto,
    ) -> AppResult<AtmDto> {
        payload.validate()?;

        // atm_code / serial_number の一意制約違反を409に写し替える
        let atm = self.repo.create(&payload).await.map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(
                    "An ATM with the same code or serial number already exists".to_string(),
                )
            } else {
                AppError::DbErr(e)
            }
        })?;

        info!(atm_id = %atm.id, atm_code = %atm.atm_code, "ATM registered");

        self.audit_log_service
            .log_action(LogActionParams {
                user_id: Some(actor.user_id),
                action: AuditAction::Create,
                resource_type: "atm",
                resource_id: Some(atm.id),
                description: format!("Registered ATM {}", atm.atm_code),
                details: None,
            })
            .await;

        Ok(atm.into())
    }

    pub async fn get_atm(&self, id: Uuid) -> AppResult<AtmDto> {
        let atm = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("ATM with id {} not found", id)))?;

        Ok(atm.into())
    }

    pub async fn list_atms(&self, filter: &AtmFilterDto) -> AppResult<PaginatedResponse<AtmDto>> {
        let (atms, total) = self.repo.find_with_filter(filter).await?;

        let page = filter.page.unwrap_or(1).max(1);
        let per_page = filter.per_page.unwrap_or(20).clamp(1, 100);

        Ok(PaginatedResponse::new(
            atms.into_iter().map(AtmDto::from).collect(),
            page,
            per_page,
            total,
        ))
    }

    pub async fn update_atm(
        &self,
        actor: &UserClaims,
        id: Uuid,
        payload: UpdateAtmDto,
    ) -> AppResult<AtmDto> {
        payload.validate()?;

        let updated = self
            .repo
            .update(id, &payload)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("ATM with id {} not found", id)))?;

        self.audit_log_service
            .log_action(LogActionParams {
                user_id: Some(actor.user_id),
                action: AuditAction::Update,
                resource_type: "atm",
                resource_id: Some(updated.id),
                description: format!("Updated ATM {}", updated.atm_code),
                details: Some(serde_json::json!({ "status": updated.status.clone() })),
            })
            .await;

        Ok(updated.into())
    }

    pub async fn delete_atm(&self, actor: &UserClaims, id: Uuid) -> AppResult<()> {
        let atm = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("ATM with id {} not found", id)))?;

        self.repo.delete_by_id(id).await?;

        self.audit_log_service
            .log_action(LogActionParams {
                user_id: Some(actor.user_id),
                action: AuditAction::Delete,
                resource_type: "atm",
                resource_id: Some(id),
                description: format!("Deleted ATM {}", atm.atm_code),
                details: None,
            })
            .await;

        Ok(())
    }
}
