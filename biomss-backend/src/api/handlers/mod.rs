// src/api/handlers/mod.rs
use crate::error::AppError;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use uuid::Uuid;

pub mod alert_handler;
pub mod atm_handler;
pub mod audit_log_handler;
pub mod auth_handler;
pub mod branch_handler;
pub mod monitored_system_handler;
pub mod pos_terminal_handler;
pub mod security_event_handler;
pub mod system_handler;
pub mod ticket_handler;
pub mod user_handler;

/// UUIDパスパラメータの抽出器
///
/// パース失敗をフレームワークの404ではなくバリデーションエラーとして返す。
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(path_str) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::ValidationError("Invalid path parameter".to_string()))?;

        let uuid = Uuid::parse_str(&path_str).map_err(|_| {
            AppError::ValidationError(format!("Invalid UUID format: '{}'", path_str))
        })?;

        Ok(UuidPath(uuid))
    }
}
