// src/api/dto/monitored_system_dto.rs
use crate::domain::monitored_system_model::{self, SystemStatus, SystemType};
use crate::utils::validation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct CreateMonitoredSystemDto {
    #[validate(length(
        min = 1,
        max = 255,
        message = "System name must be between 1 and 255 characters"
    ))]
    pub system_name: String,

    pub system_type: SystemType,
    pub branch_id: Option<Uuid>,

    #[validate(custom(function = validation::validate_ip_address))]
    pub ip_address: Option<String>,

    #[validate(length(max = 255))]
    pub hostname: Option<String>,

    pub status: Option<SystemStatus>,

    #[validate(length(max = 5000))]
    pub notes: Option<String>,

    pub is_monitored: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct UpdateMonitoredSystemDto {
    #[validate(length(
        min = 1,
        max = 255,
        message = "System name must be between 1 and 255 characters"
    ))]
    pub system_name: Option<String>,

    pub system_type: Option<SystemType>,
    pub branch_id: Option<Uuid>,

    #[validate(custom(function = validation::validate_ip_address))]
    pub ip_address: Option<String>,

    #[validate(length(max = 255))]
    pub hostname: Option<String>,

    pub status: Option<SystemStatus>,

    #[validate(range(min = 0.0, max = 100.0, message = "Usage must be a percentage"))]
    pub cpu_usage: Option<f64>,

    #[validate(range(min = 0.0, max = 100.0, message = "Usage must be a percentage"))]
    pub memory_usage: Option<f64>,

    #[validate(range(min = 0.0, max = 100.0, message = "Usage must be a percentage"))]
    pub disk_usage: Option<f64>,

    #[validate(range(min = 0, message = "Latency cannot be negative"))]
    pub network_latency_ms: Option<i32>,

    #[validate(length(max = 5000))]
    pub notes: Option<String>,

    pub is_monitored: Option<bool>,
}

// --- フィルタリング用DTO ---

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct MonitoredSystemFilterDto {
    pub status: Option<SystemStatus>,
    pub system_type: Option<SystemType>,
    pub branch_id: Option<Uuid>,
    pub is_monitored: Option<bool>,
    pub search: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

// --- Response DTO ---

#[derive(Serialize, Deserialize, Debug)]
pub struct MonitoredSystemDto {
    pub id: Uuid,
    pub system_name: String,
    pub system_type: String,
    pub branch_id: Option<Uuid>,
    pub ip_address: Option<String>,
    pub hostname: Option<String>,
    pub status: String,
    pub cpu_usage: Option<f64>,
    pub memory_usage: Option<f64>,
    pub disk_usage: Option<f64>,
    pub network_latency_ms: Option<i32>,
    pub notes: Option<String>,
    pub is_monitored: bool,
    pub last_check: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<monitored_system_model::Model> for MonitoredSystemDto {
    fn from(model: monitored_system_model::Model) -> Self {
        Self {
            id: model.id,
            system_name: model.system_name,
            system_type: model.system_type,
            branch_id: model.branch_id,
            ip_address: model.ip_address,
            hostname: model.hostname,
            status: model.status,
            cpu_usage: model.cpu_usage,
            memory_usage: model.memory_usage,
            disk_usage: model.disk_usage,
            network_latency_ms: model.network_latency_ms,
            notes: model.notes,
            is_monitored: model.is_monitored,
            last_check: model.last_check,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
