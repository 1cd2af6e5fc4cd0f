// src/service/auth_service.rs
use crate::api::dto::auth_dto::{SigninDto, SigninResponseDto};
use crate::api::dto::user_dto::UserDto;
use crate::domain::audit_log_model::AuditAction;
use crate::domain::user_model::UserClaims;
use crate::error::{AppError, AppResult};
use crate::repository::user_repository::UserRepository;
use crate::service::audit_log_service::{AuditLogService, LogActionParams};
use crate::utils::jwt::JwtManager;
use crate::utils::password::verify_password;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

pub struct AuthService {
    user_repo: Arc<UserRepository>,
    jwt_manager: Arc<JwtManager>,
    audit_log_service: Arc<AuditLogService>,
}

impl AuthService {
    pub fn new(
        user_repo: Arc<UserRepository>,
        jwt_manager: Arc<JwtManager>,
        audit_log_service: Arc<AuditLogService>,
    ) -> Self {
        Self {
            user_repo,
            jwt_manager,
            audit_log_service,
        }
    }

    /// ユーザー名またはメールアドレスとパスワードでサインイン
    pub async fn signin(&self, payload: SigninDto) -> AppResult<SigninResponseDto> {
        payload.validate()?;

        let user = if payload.identifier.contains('@') {
            self.user_repo.find_by_email(&payload.identifier).await?
        } else {
            self.user_repo.find_by_username(&payload.identifier).await?
        };

        // ユーザーの有無を区別させないため、どちらも同じエラーを返す
        let user = user.ok_or_else(|| {
            AppError::Unauthorized("Invalid credentials".to_string())
        })?;

        if verify_password(&payload.password, &user.password_hash).is_err() {
            warn!(username = %user.username, "Signin failed: bad password");
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        if !user.is_active_staff {
            return Err(AppError::Forbidden("Account is deactivated".to_string()));
        }

        let claims = UserClaims::from_model(&user).ok_or_else(|| {
            AppError::InternalServerError(format!(
                "User {} has an unrecognized role '{}'",
                user.id, user.role
            ))
        })?;

        let access_token = self
            .jwt_manager
            .generate_access_token(claims)
            .map_err(|e| AppError::InternalServerError(format!("Failed to issue token: {}", e)))?;

        info!(user_id = %user.id, username = %user.username, "User signed in");

        self.audit_log_service
            .log_action(LogActionParams {
                user_id: Some(user.id),
                action: AuditAction::Login,
                resource_type: "user",
                resource_id: Some(user.id),
                description: format!("User {} signed in", user.username),
                details: None,
            })
            .await;

        Ok(SigninResponseDto {
            access_token,
            token_type: "Bearer".to_string(),
            user: user.into(),
        })
    }

    /// 現在のユーザー情報を取得
    pub async fn current_user(&self, user_id: Uuid) -> AppResult<UserDto> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(user.into())
    }

    /// サインアウトの監査記録（トークン自体はステートレス）
    pub async fn signout(&self, actor: &UserClaims) {
        self.audit_log_service
            .log_action(LogActionParams {
                user_id: Some(actor.user_id),
                action: AuditAction::Logout,
                resource_type: "user",
                resource_id: Some(actor.user_id),
                description: format!("User {} signed out", actor.username),
                details: None,
            })
            .await;
    }
}
