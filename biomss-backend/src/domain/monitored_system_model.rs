// src/domain/monitored_system_model.rs
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "monitored_systems")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub system_name: String,
    pub system_type: String,
    #[sea_orm(nullable)]
    pub branch_id: Option<Uuid>,
    #[sea_orm(nullable)]
    pub ip_address: Option<String>,
    #[sea_orm(nullable)]
    pub hostname: Option<String>,
    pub status: String,
    #[sea_orm(nullable)]
    pub cpu_usage: Option<f64>,
    #[sea_orm(nullable)]
    pub memory_usage: Option<f64>,
    #[sea_orm(nullable)]
    pub disk_usage: Option<f64>,
    #[sea_orm(nullable)]
    pub network_latency_ms: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub is_monitored: bool,
    pub last_check: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            id: Set(Uuid::new_v4()),
            last_check: Set(Utc::now()),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
            ..ActiveModelTrait::default()
        }
    }

    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if !insert {
            self.updated_at = Set(Utc::now());
        }
        Ok(self)
    }
}

/// 監視対象システムの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemStatus {
    Operational,
    Warning,
    Critical,
    Down,
    Maintenance,
}

impl SystemStatus {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "operational" => Some(Self::Operational),
            "warning" => Some(Self::Warning),
            "critical" => Some(Self::Critical),
            "down" => Some(Self::Down),
            "maintenance" => Some(Self::Maintenance),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Operational => "operational",
            Self::Warning => "warning",
            Self::Critical => "critical",
            Self::Down => "down",
            Self::Maintenance => "maintenance",
        }
    }
}

/// 監視対象システムの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemType {
    Server,
    Network,
    Application,
    Database,
    Firewall,
    Switch,
    Router,
}

impl SystemType {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "server" => Some(Self::Server),
            "network" => Some(Self::Network),
            "application" => Some(Self::Application),
            "database" => Some(Self::Database),
            "firewall" => Some(Self::Firewall),
            "switch" => Some(Self::Switch),
            "router" => Some(Self::Router),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Server => "server",
            Self::Network => "network",
            Self::Application => "application",
            Self::Database => "database",
            Self::Firewall => "firewall",
            Self::Switch => "switch",
            Self::Router => "router",
        }
    }
}
