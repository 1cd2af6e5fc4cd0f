// src/api/dto/audit_log_dto.rs
use crate::domain::audit_log_model::{self, AuditAction};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- フィルタリング用DTO ---

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct AuditLogFilterDto {
    pub user_id: Option<Uuid>,
    pub action: Option<AuditAction>,
    pub resource_type: Option<String>,
    pub resource_id: Option<Uuid>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

// --- Response DTO ---

#[derive(Serialize, Deserialize, Debug)]
pub struct AuditLogDto {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub action: String,
    pub resource_type: String,
    pub resource_id: Option<Uuid>,
    pub description: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub details: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl From<audit_log_model::Model> for AuditLogDto {
    fn from(model: audit_log_model::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            action: model.action,
            resource_type: model.resource_type,
            resource_id: model.resource_id,
            description: model.description,
            ip_address: model.ip_address,
            user_agent: model.user_agent,
            details: model.details,
            created_at: model.created_at,
        }
    }
}
