// src/domain/audit_log_model.rs
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "audit_logs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(nullable)]
    pub user_id: Option<Uuid>,
    pub action: String,
    pub resource_type: String,
    #[sea_orm(nullable)]
    pub resource_id: Option<Uuid>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(nullable)]
    pub ip_address: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub user_agent: Option<String>,
    #[sea_orm(nullable)]
    pub details: Option<Json>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 監査アクションの定義
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    Login,
    Logout,
    View,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Create => "create",
            AuditAction::Update => "update",
            AuditAction::Delete => "delete",
            AuditAction::Login => "login",
            AuditAction::Logout => "logout",
            AuditAction::View => "view",
        }
    }
}

// 監査ログエントリービルダー
pub struct AuditLogBuilder {
    user_id: Option<Uuid>,
    action: AuditAction,
    resource_type: String,
    resource_id: Option<Uuid>,
    description: String,
    ip_address: Option<String>,
    user_agent: Option<String>,
    details: Option<serde_json::Value>,
}

impl AuditLogBuilder {
    pub fn new(
        user_id: Option<Uuid>,
        action: AuditAction,
        resource_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            action,
            resource_type: resource_type.into(),
            resource_id: None,
            description: description.into(),
            ip_address: None,
            user_agent: None,
            details: None,
        }
    }

    pub fn resource_id(mut self, id: Uuid) -> Self {
        self.resource_id = Some(id);
        self
    }

    pub fn ip_address(mut self, ip: impl Into<String>) -> Self {
        self.ip_address = Some(ip.into());
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn build(self) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(self.user_id),
            action: Set(self.action.as_str().to_string()),
            resource_type: Set(self.resource_type),
            resource_id: Set(self.resource_id),
            description: Set(self.description),
            ip_address: Set(self.ip_address),
            user_agent: Set(self.user_agent),
            details: Set(self.details),
            created_at: Set(Utc::now()),
        }
    }
}
