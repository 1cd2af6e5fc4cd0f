// src/service/mod.rs
pub mod alert_service;
pub mod atm_service;
pub mod audit_log_service;
pub mod auth_service;
pub mod branch_service;
pub mod monitored_system_service;
pub mod pos_terminal_service;
pub mod security_event_service;
pub mod ticket_service;
pub mod user_service;
