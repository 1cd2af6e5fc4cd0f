// src/domain/alert_model.rs
use crate::domain::lifecycle::AlertTimestamps;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "alerts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub alert_type: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub status: String,
    #[sea_orm(nullable)]
    pub branch_id: Option<Uuid>,
    #[sea_orm(nullable)]
    pub atm_id: Option<Uuid>,
    #[sea_orm(nullable)]
    pub pos_terminal_id: Option<Uuid>,
    #[sea_orm(nullable)]
    pub security_event_id: Option<Uuid>,
    #[sea_orm(nullable)]
    pub acknowledged_by: Option<Uuid>,
    #[sea_orm(nullable)]
    pub acknowledged_at: Option<DateTime<Utc>>,
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

impl Model {
    /// 遷移ルールの入力となるタイムスタンプ群を切り出す
    pub fn timestamps(&self) -> AlertTimestamps {
        AlertTimestamps {
            acknowledged_at: self.acknowledged_at,
            resolved_at: self.resolved_at,
        }
    }
}
