// src/repository/mod.rs
pub mod alert_repository;
pub mod atm_repository;
pub mod audit_log_repository;
pub mod branch_repository;
pub mod monitored_system_repository;
pub mod pos_terminal_repository;
pub mod security_event_repository;
pub mod ticket_comment_repository;
pub mod ticket_repository;
pub mod user_repository;
