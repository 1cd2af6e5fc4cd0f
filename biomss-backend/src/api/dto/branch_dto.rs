// src/api/dto/branch_dto.rs
use crate::domain::branch_model::{self, BranchStatus, BranchType};
use crate::utils::validation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct CreateBranchDto {
    #[validate(
        length(
            min = 1,
            max = 10,
            message = "Branch code must be between 1 and 10 characters"
        ),
        custom(function = validation::validate_code)
    )]
    pub branch_code: String,

    #[validate(length(
        min = 1,
        max = 200,
        message = "Branch name must be between 1 and 200 characters"
    ))]
    pub name: String,

    pub branch_type: Option<BranchType>,
    pub status: Option<BranchStatus>,

    #[validate(length(min = 1, max = 100))]
    pub region: String,

    #[validate(length(min = 1, max = 100))]
    pub city: String,

    #[validate(length(min = 1, max = 1000))]
    pub address: String,

    #[validate(length(min = 1, max = 15))]
    pub phone_number: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(max = 200))]
    pub manager_name: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct UpdateBranchDto {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Branch name must be between 1 and 200 characters"
    ))]
    pub name: Option<String>,

    pub branch_type: Option<BranchType>,
    pub status: Option<BranchStatus>,

    #[validate(length(min = 1, max = 100))]
    pub region: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub city: Option<String>,

    #[validate(length(min = 1, max = 1000))]
    pub address: Option<String>,

    #[validate(length(min = 1, max = 15))]
    pub phone_number: Option<String>,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[validate(length(max = 200))]
    pub manager_name: Option<String>,
}

// --- フィルタリング用DTO ---

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct BranchFilterDto {
    pub status: Option<BranchStatus>,
    pub branch_type: Option<BranchType>,
    pub region: Option<String>,
    pub search: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

// --- Response DTO ---

#[derive(Serialize, Deserialize, Debug)]
pub struct BranchDto {
    pub id: Uuid,
    pub branch_code: String,
    pub name: String,
    pub branch_type: String,
    pub status: String,
    pub region: String,
    pub city: String,
    pub address: String,
    pub phone_number: String,
    pub email: String,
    pub manager_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<branch_model::Model> for BranchDto {
    fn from(model: branch_model::Model) -> Self {
        Self {
            id: model.id,
            branch_code: model.branch_code,
            name: model.name,
            branch_type: model.branch_type,
            status: model.status,
            region: model.region,
            city: model.city,
            address: model.address,
            phone_number: model.phone_number,
            email: model.email,
            manager_name: model.manager_name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
