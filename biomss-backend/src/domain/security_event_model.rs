// src/domain/security_event_model.rs
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "security_events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub event_type: String,
    pub severity: String,
    pub status: String,
    #[sea_orm(nullable)]
    pub source_ip: Option<String>,
    #[sea_orm(nullable)]
    pub target_ip: Option<String>,
    #[sea_orm(nullable)]
    pub branch_id: Option<Uuid>,
    #[sea_orm(nullable)]
    pub user_id: Option<Uuid>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(nullable)]
    pub affected_system: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub action_taken: Option<String>,
    #[sea_orm(nullable)]
    pub assigned_to: Option<Uuid>,
    pub detected_at: DateTime<Utc>,
    #[sea_orm(nullable)]
    pub resolved_at: Option<DateTime<Utc>>,
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
            detected_at: Set(Utc::now()),
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
