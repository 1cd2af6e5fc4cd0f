// src/service/user_service.rs
use crate::api::dto::user_dto::{CreateUserDto, UpdateUserDto, UserDto, UserFilterDto};
use crate::api::dto::PaginatedResponse;
use crate::domain::audit_log_model::AuditAction;
use crate::domain::user_model::UserClaims;
use crate::error::{AppError, AppResult};
use crate::repository::user_repository::UserRepository;
use crate::service::audit_log_service::{AuditLogService, LogActionParams};
use crate::utils::password::{check_password_strength, hash_password};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

pub struct UserService {
    user_repo: Arc<UserRepository>,
    audit_log_service: Arc<AuditLogService>,
}

impl UserService {
    pub fn new(user_repo: Arc<UserRepository>, audit_log_service: Arc<AuditLogService>) -> Self {
        Self {
            user_repo,
            audit_log_service,
        }
    }

    pub async fn create_user(
        &self,
        actor: &UserClaims,
        payload: CreateUserDto,
    ) -> AppResult<UserDto> {
        payload.validate()?;

        check_password_strength(&payload.password)
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        if self
            .user_repo
            .find_by_username(&payload.username)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "Username '{}' is already taken",
                payload.username
            )));
        }

        if self
            .user_repo
            .find_by_email(&payload.email)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "Email '{}' is already registered",
                payload.email
            )));
        }

        let password_hash = hash_password(&payload.password)
            .map_err(|e| AppError::InternalServerError(e.to_string()))?;

        let user = self.user_repo.create(&payload, password_hash).await?;

        info!(user_id = %user.id, username = %user.username, role = %user.role, "User created");

        self.audit_log_service
            .log_action(LogActionParams {
                user_id: Some(actor.user_id),
                action: AuditAction::Create,
                resource_type: "user",
                resource_id: Some(user.id),
                description: format!("Created user {}", user.username),
                details: Some(serde_json::json!({ "role": user.role.clone() })),
            })
            .await;

        Ok(user.into())
    }

    pub async fn get_user(&self, id: Uuid) -> AppResult<UserDto> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))?;

        Ok(user.into())
    }

    pub async fn list_users(
        &self,
        filter: &UserFilterDto,
    ) -> AppResult<PaginatedResponse<UserDto>> {
        let (users, total) = self.user_repo.find_with_filter(filter).await?;

        let page = filter.page.unwrap_or(1).max(1);
        let per_page = filter.per_page.unwrap_or(20).clamp(1, 100);

        Ok(PaginatedResponse::new(
            users.into_iter().map(UserDto::from).collect(),
            page,
            per_page,
            total,
        ))
    }

    pub async fn update_user(
        &self,
        actor: &UserClaims,
        id: Uuid,
        payload: UpdateUserDto,
    ) -> AppResult<UserDto> {
        payload.validate()?;

        let updated = self
            .user_repo
            .update(id, &payload)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))?;

        self.audit_log_service
            .log_action(LogActionParams {
                user_id: Some(actor.user_id),
                action: AuditAction::Update,
                resource_type: "user",
                resource_id: Some(updated.id),
                description: format!("Updated user {}", updated.username),
                details: None,
            })
            .await;

        Ok(updated.into())
    }

    pub async fn delete_user(&self, actor: &UserClaims, id: Uuid) -> AppResult<()> {
        if actor.user_id == id {
            return Err(AppError::BadRequest(
                "Cannot delete your own account".to_string(),
            ));
        }

        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))?;

        self.user_repo.delete_by_id(id).await?;

        self.audit_log_service
            .log_action(LogActionParams {
                user_id: Some(actor.user_id),
                action: AuditAction::Delete,
                resource_type: "user",
                resource_id: Some(id),
                description: format!("Deleted user {}", user.username),
                details: None,
            })
            .await;

        Ok(())
    }
}
