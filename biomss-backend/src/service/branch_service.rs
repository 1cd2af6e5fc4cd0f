// src/service/branch_service.rs
use crate::api::dto::branch_dto::{BranchDto, BranchFilterDto, CreateBranchDto, UpdateBranchDto};
use crate::api::dto::PaginatedResponse;
use crate::domain::audit_log_model::AuditAction;
use crate::domain::user_model::UserClaims;
use crate::error::{AppError, AppResult};
use crate::repository::branch_repository::BranchRepository;
use crate::service::audit_log_service::{AuditLogService, LogActionParams};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

pub struct BranchService {
    repo: Arc<BranchRepository>,
    audit_log_service: Arc<AuditLogService>,
}

impl BranchService {
    pub fn new(repo: Arc<BranchRepository>, audit_log_service: Arc<AuditLogService>) -> Self {
        Self {
            repo,
            audit_log_service,
        }
    }

    pub async fn create_branch(
        &self,
        actor: &UserClaims,
        payload: CreateBranchDto,
    ) -> AppResult<BranchDto> {
        payload.validate()?;

        if self
            .repo
            .find_by_code(&payload.branch_code)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "Branch code '{}' is already registered",
                payload.branch_code
            )));
        }

        let branch = self.repo.create(&payload).await?;

        info!(branch_id = %branch.id, branch_code = %branch.branch_code, "Branch created");

        self.audit_log_service
            .log_action(LogActionParams {
                user_id: Some(actor.user_id),
                action: AuditAction::Create,
                resource_type: "branch",
                resource_id: Some(branch.id),
                description: format!("Created branch {} ({})", branch.name, branch.branch_code),
                details: None,
            })
            .await;

        Ok(branch.into())
    }

    pub async fn get_branch(&self, id: Uuid) -> AppResult<BranchDto> {
        let branch = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Branch with id {} not found", id)))?;

        Ok(branch.into())
    }

    pub async fn list_branches(
        &self,
        filter: &BranchFilterDto,
    ) -> AppResult<PaginatedResponse<BranchDto>> {
        let (branches, total) = self.repo.find_with_filter(filter).await?;

        let page = filter.page.unwrap_or(1).max(1);
        let per_page = filter.per_page.unwrap_or(20).clamp(1, 100);

        Ok(PaginatedResponse::new(
            branches.into_iter().map(BranchDto::from).collect(),
            page,
            per_page,
            total,
        ))
    }

    pub async fn update_branch(
        &self,
        actor: &UserClaims,
        id: Uuid,
        payload: UpdateBranchDto,
    ) -> AppResult<BranchDto> {
        payload.validate()?;

        let updated = self
            .repo
            .update(id, &payload)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Branch with id {} not found", id)))?;

        self.audit_log_service
            .log_action(LogActionParams {
                user_id: Some(actor.user_id),
                action: AuditAction::Update,
                resource_type: "branch",
                resource_id: Some(updated.id),
                description: format!("Updated branch {}", updated.name),
                details: None,
            })
            .await;

        Ok(updated.into())
    }

    pub async fn delete_branch(&self, actor: &UserClaims, id: Uuid) -> AppResult<()> {
        let branch = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Branch with id {} not found", id)))?;

        self.repo.delete_by_id(id).await?;

        self.audit_log_service
            .log_action(LogActionParams {
                user_id: Some(actor.user_id),
                action: AuditAction::Delete,
                resource_type: "branch",
                resource_id: Some(id),
                description: format!("Deleted branch {} ({})", branch.name, branch.branch_code),
                details: None,
            })
            .await;

        Ok(())
    }
}
