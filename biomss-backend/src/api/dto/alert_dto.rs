// src/api/dto/alert_dto.rs
use crate::domain::alert_model;
use crate::domain::alert_status::{AlertStatus, AlertType};
use crate::utils::validation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct CreateAlertDto {
    pub alert_type: AlertType,

    #[validate(
        length(
            min = 1,
            max = 255,
            message = "Alert title must be between 1 and 255 characters"
        ),
        custom(function = validation::validate_title)
    )]
    pub title: String,

    #[validate(length(
        min = 1,
        max = 5000,
        message = "Alert message must be between 1 and 5000 characters"
    ))]
    pub message: String,

    pub branch_id: Option<Uuid>,
    pub atm_id: Option<Uuid>,
    pub pos_terminal_id: Option<Uuid>,
    pub security_event_id: Option<Uuid>,
}

#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct UpdateAlertDto {
    // 生の文字列で受けてサービス層で検証する
    pub status: Option<String>,

    #[validate(length(
        max = 5000,
        message = "Alert message must not exceed 5000 characters"
    ))]
    pub message: Option<String>,
}

// --- フィルタリング用DTO ---

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct AlertFilterDto {
    pub status: Option<AlertStatus>,
    pub alert_type: Option<AlertType>,
    pub branch_id: Option<Uuid>,
    pub search: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

// --- Response DTO ---

#[derive(Serialize, Deserialize, Debug)]
pub struct AlertDto {
    pub id: Uuid,
    pub alert_type: String,
    pub title: String,
    pub message: String,
    pub status: String,
    pub branch_id: Option<Uuid>,
    pub atm_id: Option<Uuid>,
    pub pos_terminal_id: Option<Uuid>,
    pub security_event_id: Option<Uuid>,
    pub acknowledged_by: Option<Uuid>,
    pub acknowledged_at: Option<DateTime<Utc>>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<alert_model::Model> for AlertDto {
    fn from(model: alert_model::Model) -> Self {
        Self {
            id: model.id,
            alert_type: model.alert_type,
            title: model.title,
            message: model.message,
            status: model.status,
            branch_id: model.branch_id,
            atm_id: model.atm_id,
            pos_terminal_id: model.pos_terminal_id,
            security_event_id: model.security_event_id,
            acknowledged_by: model.acknowledged_by,
            acknowledged_at: model.acknowledged_at,
            resolved_at: model.resolved_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
