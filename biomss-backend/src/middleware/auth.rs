// src/middleware/auth.rs

use crate::domain::role::UserRole;
use crate::domain::user_model::UserClaims;
use crate::error::AppError;
use crate::utils::jwt::JwtManager;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

/// JWT認証ミドルウェアの設定
#[derive(Clone)]
pub struct AuthMiddlewareConfig {
    pub jwt_manager: Arc<JwtManager>,
    pub access_token_cookie_name: String,
    pub skip_auth_paths: Vec<String>,
}

impl AuthMiddlewareConfig {
    pub fn new(jwt_manager: Arc<JwtManager>) -> Self {
        Self {
            jwt_manager,
            access_token_cookie_name: "access_token".to_string(),
            skip_auth_paths: vec!["/auth/signin".to_string(), "/health".to_string()],
        }
    }
}

/// 認証済みユーザー情報を格納するエクステンション
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub claims: UserClaims,
}

impl AuthenticatedUser {
    pub fn new(claims: UserClaims) -> Self {
        Self { claims }
    }

    pub fn user_id(&self) -> Uuid {
        self.claims.user_id
    }

    pub fn role(&self) -> UserRole {
        self.claims.role
    }

    pub fn branch_id(&self) -> Option<Uuid> {
        self.claims.branch_id
    }

    /// 管理者かチェック
    pub fn is_admin(&self) -> bool {
        self.claims.is_admin()
    }

    /// 管理者権限を要求
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "Administrator privileges required".to_string(),
            ))
        }
    }

    /// ITスタッフ権限を要求
    pub fn require_it_staff(&self) -> Result<(), AppError> {
        if self.role().is_it_staff() {
            Ok(())
        } else {
            Err(AppError::Forbidden("IT staff privileges required".to_string()))
        }
    }

    /// セキュリティ担当権限を要求
    pub fn require_security_staff(&self) -> Result<(), AppError> {
        if self.role().is_security_staff() {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "Security officer privileges required".to_string(),
            ))
        }
    }
}

// ミドルウェアが差し込んだエクステンションからユーザーを取り出す
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))
    }
}

/// JWT認証ミドルウェア
pub async fn jwt_auth_middleware(
    State(config): State<AuthMiddlewareConfig>,
    headers: HeaderMap,
    cookie_jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    // 認証をスキップするパスかチェック
    if should_skip_auth(&path, &config.skip_auth_paths) {
        return Ok(next.run(request).await);
    }

    let token = extract_token(&headers, &cookie_jar, &config.access_token_cookie_name)
        .ok_or_else(|| AppError::Unauthorized("Missing access token".to_string()))?;

    let claims = config.jwt_manager.verify_access_token(&token).map_err(|e| {
        warn!(path = %path, error = %e, "Access token verification failed");
        AppError::Unauthorized("Invalid or expired access token".to_string())
    })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser::new(claims.user));

    Ok(next.run(request).await)
}

/// Authorizationヘッダー（Bearer）またはCookieからトークンを取り出す
fn extract_token(headers: &HeaderMap, cookie_jar: &CookieJar, cookie_name: &str) -> Option<String> {
    if let Some(auth_header) = headers.get(header::AUTHORIZATION) {
        if let Ok(value) = auth_header.to_str() {
            if let Some(token) = value.strip_prefix("Bearer ") {
                return Some(token.to_string());
            }
        }
    }

    cookie_jar
        .get(cookie_name)
        .map(|cookie| cookie.value().to_string())
}

fn should_skip_auth(path: &str, skip_paths: &[String]) -> bool {
    skip_paths.iter().any(|skip| path == skip)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user(role: UserRole) -> AuthenticatedUser {
        AuthenticatedUser::new(UserClaims {
            user_id: Uuid::new_v4(),
            username: "test.user".to_string(),
            role,
            branch_id: None,
        })
    }

    #[test]
    fn test_role_guards() {
        assert!(test_user(UserRole::Admin).require_admin().is_ok());
        assert!(test_user(UserRole::ItOfficer).require_admin().is_err());

        assert!(test_user(UserRole::SupportTech).require_it_staff().is_ok());
        assert!(test_user(UserRole::Viewer).require_it_staff().is_err());

        assert!(test_user(UserRole::SecurityOfficer)
            .require_security_staff()
            .is_ok());
        assert!(test_user(UserRole::ItOfficer)
            .require_security_staff()
            .is_err());
    }

    #[test]
    fn test_should_skip_auth() {
        let skip = vec!["/auth/signin".to_string(), "/health".to_string()];
        assert!(should_skip_auth("/auth/signin", &skip));
        assert!(should_skip_auth("/health", &skip));
        assert!(!should_skip_auth("/tickets", &skip));
    }
}
