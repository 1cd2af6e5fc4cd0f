// src/api/dto/pos_terminal_dto.rs
use crate::domain::pos_terminal_model::{self, PosTerminalStatus};
use crate::utils::validation;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct CreatePosTerminalDto {
    #[validate(
        length(
            min = 1,
            max = 20,
            message = "Terminal ID must be between 1 and 20 characters"
        ),
        custom(function = validation::validate_code)
    )]
    pub terminal_id: String,

    #[validate(length(min = 1, max = 255))]
    pub merchant_name: String,

    #[validate(length(min = 1, max = 50))]
    pub merchant_code: String,

    pub branch_id: Option<Uuid>,

    #[validate(length(min = 1, max = 255))]
    pub location: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(length(min = 1, max = 100))]
    pub serial_number: String,

    pub status: Option<PosTerminalStatus>,
    pub deployment_date: NaiveDate,
    pub is_active: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct UpdatePosTerminalDto {
    #[validate(length(min = 1, max = 255))]
    pub merchant_name: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub merchant_code: Option<String>,

    pub branch_id: Option<Uuid>,

    #[validate(length(min = 1, max = 255))]
    pub location: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    pub status: Option<PosTerminalStatus>,
    pub is_active: Option<bool>,
}

// --- フィルタリング用DTO ---

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct PosTerminalFilterDto {
    pub status: Option<PosTerminalStatus>,
    pub branch_id: Option<Uuid>,
    pub is_active: Option<bool>,
    pub search: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

// --- Response DTO ---

#[derive(Serialize, Deserialize, Debug)]
pub struct PosTerminalDto {
    pub id: Uuid,
    pub terminal_id: String,
    pub merchant_name: String,
    pub merchant_code: String,
    pub branch_id: Option<Uuid>,
    pub location: String,
    pub model: String,
    pub serial_number: String,
    pub status: String,
    pub deployment_date: NaiveDate,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<pos_terminal_model::Model> for PosTerminalDto {
    fn from(model: pos_terminal_model::Model) -> Self {
        Self {
            id: model.id,
            terminal_id: model.terminal_id,
            merchant_name: model.merchant_name,
            merchant_code: model.merchant_code,
            branch_id: model.branch_id,
            location: model.location,
            model: model.model,
            serial_number: model.serial_number,
            status: model.status,
            deployment_date: model.deployment_date,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
