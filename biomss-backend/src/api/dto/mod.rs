// src/api/dto/mod.rs
pub mod alert_dto;
pub mod atm_dto;
pub mod audit_log_dto;
pub mod auth_dto;
pub mod branch_dto;
pub mod common;
pub mod monitored_system_dto;
pub mod pos_terminal_dto;
pub mod security_event_dto;
pub mod ticket_dto;
pub mod user_dto;

// Re-export common response types
pub use common::{PaginatedResponse, PaginationMeta};
