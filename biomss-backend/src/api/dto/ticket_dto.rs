// src/api/dto/ticket_dto.rs
use crate::domain::ticket_model;
use crate::domain::ticket_status::{TicketCategory, TicketPriority, TicketStatus};
use crate::utils::validation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct CreateTicketDto {
    #[validate(
        length(
            min = 1,
            max = 255,
            message = "Ticket title must be between 1 and 255 characters"
        ),
        custom(function = validation::validate_title)
    )]
    pub title: String,

    #[validate(length(
        min = 1,
        max = 5000,
        message = "Ticket description must be between 1 and 5000 characters"
    ))]
    pub description: String,

    pub category: TicketCategory,
    pub priority: Option<TicketPriority>,
    pub branch_id: Uuid,
    pub assigned_to: Option<Uuid>,
    pub atm_id: Option<Uuid>,
    pub pos_terminal_id: Option<Uuid>,
}

#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct UpdateTicketDto {
    #[validate(
        length(
            min = 1,
            max = 255,
            message = "Ticket title must be between 1 and 255 characters"
        ),
        custom(function = validation::validate_title)
    )]
    pub title: Option<String>,

    #[validate(length(
        max = 5000,
        message = "Ticket description must not exceed 5000 characters"
    ))]
    pub description: Option<String>,

    pub category: Option<TicketCategory>,
    pub priority: Option<TicketPriority>,
    // 生の文字列で受けてサービス層で検証する。未知の値はValidationError
    pub status: Option<String>,
    pub assigned_to: Option<Uuid>,

    #[validate(length(
        max = 5000,
        message = "Resolution notes must not exceed 5000 characters"
    ))]
    pub resolution_notes: Option<String>,
}

// --- フィルタリング用DTO ---

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct TicketFilterDto {
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
    pub category: Option<TicketCategory>,
    pub branch_id: Option<Uuid>,
    pub assigned_to: Option<Uuid>,
    pub search: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

// --- Response DTO ---

#[derive(Serialize, Deserialize, Debug)]
pub struct TicketDto {
    pub id: Uuid,
    pub ticket_number: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: String,
    pub status: String,
    pub branch_id: Uuid,
    pub created_by: Option<Uuid>,
    pub assigned_to: Option<Uuid>,
    pub atm_id: Option<Uuid>,
    pub pos_terminal_id: Option<Uuid>,
    pub resolution_notes: Option<String>,
    pub resolution_time_seconds: Option<i64>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// SeaORM の Model から TicketDto への変換
impl From<ticket_model::Model> for TicketDto {
    fn from(model: ticket_model::Model) -> Self {
        Self {
            id: model.id,
            ticket_number: model.ticket_number,
            title: model.title,
            description: model.description,
            category: model.category,
            priority: model.priority,
            status: model.status,
            branch_id: model.branch_id,
            created_by: model.created_by,
            assigned_to: model.assigned_to,
            atm_id: model.atm_id,
            pos_terminal_id: model.pos_terminal_id,
            resolution_notes: model.resolution_notes,
            resolution_time_seconds: model.resolution_time_seconds,
            resolved_at: model.resolved_at,
            closed_at: model.closed_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

// --- コメントDTO ---

#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct CreateTicketCommentDto {
    #[validate(length(
        min = 1,
        max = 5000,
        message = "Comment must be between 1 and 5000 characters"
    ))]
    pub comment: String,

    #[serde(default)]
    pub is_internal: bool,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TicketCommentDto {
    pub id: Uuid,
    pub ticket_id: Uuid,
    pub user_id: Option<Uuid>,
    pub comment: String,
    pub is_internal: bool,
    pub created_at: DateTime<Utc>,
}

impl From<crate::domain::ticket_comment_model::Model> for TicketCommentDto {
    fn from(model: crate::domain::ticket_comment_model::Model) -> Self {
        Self {
            id: model.id,
            ticket_id: model.ticket_id,
            user_id: model.user_id,
            comment: model.comment,
            is_internal: model.is_internal,
            created_at: model.created_at,
        }
    }
}

// --- 統計DTO ---

#[derive(Serialize, Deserialize, Debug)]
pub struct TicketStatsDto {
    pub total: u64,
    pub open: u64,
    pub in_progress: u64,
    pub resolved: u64,
    pub critical: u64,
}
