// src/api/mod.rs
use crate::db::DbPool;
use crate::repository::{
    atm_repository::AtmRepository, audit_log_repository::AuditLogRepository,
    branch_repository::BranchRepository, monitored_system_repository::MonitoredSystemRepository,
    pos_terminal_repository::PosTerminalRepository, user_repository::UserRepository,
};
use crate::service::{
    alert_service::AlertService, atm_service::AtmService, audit_log_service::AuditLogService,
    auth_service::AuthService, branch_service::BranchService,
    monitored_system_service::MonitoredSystemService, pos_terminal_service::PosTerminalService,
    security_event_service::SecurityEventService, ticket_service::TicketService,
    user_service::UserService,
};
use crate::utils::jwt::JwtManager;
use std::sync::Arc;

pub mod dto;
pub mod handlers;

/// 統一されたアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub branch_service: Arc<BranchService>,
    pub atm_service: Arc<AtmService>,
    pub pos_terminal_service: Arc<PosTerminalService>,
    pub monitored_system_service: Arc<MonitoredSystemService>,
    pub ticket_service: Arc<TicketService>,
    pub alert_service: Arc<AlertService>,
    pub security_event_service: Arc<SecurityEventService>,
    pub audit_log_service: Arc<AuditLogService>,
    pub jwt_manager: Arc<JwtManager>,
    pub db: DbPool,
}

impl AppState {
    pub fn new(db: DbPool, jwt_manager: Arc<JwtManager>) -> Self {
        let user_repo = Arc::new(UserRepository::new(db.clone()));
        let audit_log_service = Arc::new(AuditLogService::new(Arc::new(AuditLogRepository::new(
            db.clone(),
        ))));

        Self {
            auth_service: Arc::new(AuthService::new(
                user_repo.clone(),
                jwt_manager.clone(),
                audit_log_service.clone(),
            )),
            user_service: Arc::new(UserService::new(user_repo, audit_log_service.clone())),
            branch_service: Arc::new(BranchService::new(
                Arc::new(BranchRepository::new(db.clone())),
                audit_log_service.clone(),
            )),
            atm_service: Arc::new(AtmService::new(
                Arc::new(AtmRepository::new(db.clone())),
                audit_log_service.clone(),
            )),
            pos_terminal_service: Arc::new(PosTerminalService::new(
                Arc::new(PosTerminalRepository::new(db.clone())),
                audit_log_service.clone(),
            )),
            monitored_system_service: Arc::new(MonitoredSystemService::new(
                Arc::new(MonitoredSystemRepository::new(db.clone())),
                audit_log_service.clone(),
            )),
            ticket_service: Arc::new(TicketService::new(db.clone(), audit_log_service.clone())),
            alert_service: Arc::new(AlertService::new(db.clone(), audit_log_service.clone())),
            security_event_service: Arc::new(SecurityEventService::new(
                db.clone(),
                audit_log_service.clone(),
            )),
            audit_log_service,
            jwt_manager,
            db,
        }
    }
}
