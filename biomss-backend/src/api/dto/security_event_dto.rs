// src/api/dto/security_event_dto.rs
use crate::domain::security_event_model;
use crate::domain::security_event_status::{
    SecurityEventStatus, SecurityEventType, SecuritySeverity,
};
use crate::utils::validation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct CreateSecurityEventDto {
    pub event_type: SecurityEventType,
    pub severity: SecuritySeverity,

    #[validate(custom(function = validation::validate_ip_address))]
    pub source_ip: Option<String>,

    #[validate(custom(function = validation::validate_ip_address))]
    pub target_ip: Option<String>,

    pub branch_id: Option<Uuid>,
    pub user_id: Option<Uuid>,

    #[validate(length(
        min = 1,
        max = 5000,
        message = "Description must be between 1 and 5000 characters"
    ))]
    pub description: String,

    #[validate(length(
        max = 255,
        message = "Affected system must not exceed 255 characters"
    ))]
    pub affected_system: Option<String>,

    #[validate(length(max = 5000, message = "Action taken must not exceed 5000 characters"))]
    pub action_taken: Option<String>,

    pub assigned_to: Option<Uuid>,

    // 省略時は現在時刻を検知時刻とする
    pub detected_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct UpdateSecurityEventDto {
    pub event_type: Option<SecurityEventType>,
    pub severity: Option<SecuritySeverity>,
    // 生の文字列で受けてサービス層で検証する
    pub status: Option<String>,

    #[validate(length(
        max = 5000,
        message = "Description must not exceed 5000 characters"
    ))]
    pub description: Option<String>,

    #[validate(length(
        max = 255,
        message = "Affected system must not exceed 255 characters"
    ))]
    pub affected_system: Option<String>,

    #[validate(length(max = 5000, message = "Action taken must not exceed 5000 characters"))]
    pub action_taken: Option<String>,

    pub assigned_to: Option<Uuid>,
}

// --- フィルタリング用DTO ---

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SecurityEventFilterDto {
    pub status: Option<SecurityEventStatus>,
    pub severity: Option<SecuritySeverity>,
    pub event_type: Option<SecurityEventType>,
    pub branch_id: Option<Uuid>,
    pub search: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

// --- Response DTO ---

#[derive(Serialize, Deserialize, Debug)]
pub struct SecurityEventDto {
    pub id: Uuid,
    pub event_type: String,
    pub severity: String,
    pub status: String,
    pub source_ip: Option<String>,
    pub target_ip: Option<String>,
    pub branch_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub description: String,
    pub affected_system: Option<String>,
    pub action_taken: Option<String>,
    pub assigned_to: Option<Uuid>,
    pub detected_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<security_event_model::Model> for SecurityEventDto {
    fn from(model: security_event_model::Model) -> Self {
        Self {
            id: model.id,
            event_type: model.event_type,
            severity: model.severity,
            status: model.status,
            source_ip: model.source_ip,
            target_ip: model.target_ip,
            branch_id: model.branch_id,
            user_id: model.user_id,
            description: model.description,
            affected_system: model.affected_system,
            action_taken: model.action_taken,
            assigned_to: model.assigned_to,
            detected_at: model.detected_at,
            resolved_at: model.resolved_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
