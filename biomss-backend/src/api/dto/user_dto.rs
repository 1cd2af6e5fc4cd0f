// src/api/dto/user_dto.rs
use crate::domain::role::UserRole;
use crate::domain::user_model;
use crate::utils::validation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct CreateUserDto {
    #[validate(
        length(
            min = 3,
            max = 30,
            message = "Username must be between 3 and 30 characters"
        ),
        custom(function = validation::validate_username)
    )]
    pub username: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8 to 128 characters"))]
    pub password: String,

    #[validate(length(max = 100))]
    pub first_name: Option<String>,

    #[validate(length(max = 100))]
    pub last_name: Option<String>,

    pub role: UserRole,

    #[validate(length(max = 20))]
    pub employee_id: Option<String>,

    #[validate(length(max = 100))]
    pub department: Option<String>,

    #[validate(length(max = 15))]
    pub phone_number: Option<String>,

    pub branch_id: Option<Uuid>,
    pub is_active_staff: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, Default, Validate)]
pub struct UpdateUserDto {
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[validate(length(max = 100))]
    pub first_name: Option<String>,

    #[validate(length(max = 100))]
    pub last_name: Option<String>,

    pub role: Option<UserRole>,

    #[validate(length(max = 20))]
    pub employee_id: Option<String>,

    #[validate(length(max = 100))]
    pub department: Option<String>,

    #[validate(length(max = 15))]
    pub phone_number: Option<String>,

    pub branch_id: Option<Uuid>,
    pub is_active_staff: Option<bool>,
}

// --- フィルタリング用DTO ---

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct UserFilterDto {
    pub role: Option<UserRole>,
    pub branch_id: Option<Uuid>,
    pub is_active_staff: Option<bool>,
    pub search: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

// --- Response DTO ---

#[derive(Serialize, Deserialize, Debug)]
pub struct UserDto {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: String,
    pub employee_id: Option<String>,
    pub department: Option<String>,
    pub phone_number: Option<String>,
    pub branch_id: Option<Uuid>,
    pub is_active_staff: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// パスワードハッシュはDTOに載せない
impl From<user_model::Model> for UserDto {
    fn from(model: user_model::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            role: model.role,
            employee_id: model.employee_id,
            department: model.department,
            phone_number: model.phone_number,
            branch_id: model.branch_id,
            is_active_staff: model.is_active_staff,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
