// src/api/dto/atm_dto.rs
use crate::domain::atm_model::{self, AtmStatus};
use crate::utils::validation;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct CreateAtmDto {
    #[validate(
        length(min = 1, max = 20, message = "ATM code must be between 1 and 20 characters"),
        custom(function = validation::validate_code)
    )]
    pub atm_code: String,

    pub branch_id: Uuid,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Location description must be between 1 and 255 characters"
    ))]
    pub location_description: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(length(min = 1, max = 100))]
    pub manufacturer: String,

    #[validate(length(min = 1, max = 100))]
    pub serial_number: String,

    #[validate(custom(function = validation::validate_ip_address))]
    pub ip_address: String,

    pub status: Option<AtmStatus>,

    #[validate(range(min = 0, message = "Cash level cannot be negative"))]
    pub cash_level: Option<i32>,

    #[validate(range(min = 0, message = "Cash capacity cannot be negative"))]
    pub max_cash_capacity: Option<i32>,

    pub installation_date: NaiveDate,
    pub is_active: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct UpdateAtmDto {
    pub branch_id: Option<Uuid>,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Location description must be between 1 and 255 characters"
    ))]
    pub location_description: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub manufacturer: Option<String>,

    #[validate(custom(function = validation::validate_ip_address))]
    pub ip_address: Option<String>,

    pub status: Option<AtmStatus>,

    #[validate(range(min = 0, message = "Cash level cannot be negative"))]
    pub cash_level: Option<i32>,

    #[validate(range(min = 0, message = "Cash capacity cannot be negative"))]
    pub max_cash_capacity: Option<i32>,

    pub is_active: Option<bool>,
}

// --- フィルタリング用DTO ---

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct AtmFilterDto {
    pub status: Option<AtmStatus>,
    pub branch_id: Option<Uuid>,
    pub is_active: Option<bool>,
    pub cash_low: Option<bool>,
    pub search: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

// --- Response DTO ---

#[derive(Serialize, Deserialize, Debug)]
pub struct AtmDto {
    pub id: Uuid,
    pub atm_code: String,
    pub branch_id: Uuid,
    pub location_description: String,
    pub model: String,
    pub manufacturer: String,
    pub serial_number: String,
    pub ip_address: String,
    pub status: String,
    pub cash_level: i32,
    pub max_cash_capacity: i32,
    pub cash_percentage: f64,
    pub installation_date: NaiveDate,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<atm_model::Model> for AtmDto {
    fn from(model: atm_model::Model) -> Self {
        let cash_percentage = model.cash_percentage();
        Self {
            id: model.id,
            atm_code: model.atm_code,
            branch_id: model.branch_id,
            location_description: model.location_description,
            model: model.model,
            manufacturer: model.manufacturer,
            serial_number: model.serial_number,
            ip_address: model.ip_address,
            status: model.status,
            cash_level: model.cash_level,
            max_cash_capacity: model.max_cash_capacity,
            cash_percentage,
            installation_date: model.installation_date,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
