// src/domain/ticket_model.rs
use crate::domain::lifecycle::TicketTimestamps;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "support_tickets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// 人間可読な連番。作成時に一度だけ払い出され、以後不変
    pub ticket_number: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category: String,
    pub priority: String,
    pub status: String,
    pub branch_id: Uuid,
    #[sea_orm(nullable)]
    pub created_by: Option<Uuid>,
    #[sea_orm(nullable)]
    pub assigned_to: Option<Uuid>,
    #[sea_orm(nullable)]
    pub atm_id: Option<Uuid>,
    #[sea_orm(nullable)]
    pub pos_terminal_id: Option<Uuid>,
    #[sea_orm(column_type = "Text", nullable)]
    pub resolution_notes: Option<String>,
    #[sea_orm(nullable)]
    pub resolution_time_seconds: Option<i64>,
    #[sea_orm(nullable)]
    pub resolved_at: Option<DateTime<Utc>>,
    #[sea_orm(nullable)]
    pub closed_at: Option<DateTime<Utc>>,
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
    pub fn timestamps(&self) -> TicketTimestamps {
        TicketTimestamps {
            created_at: self.created_at,
            resolved_at: self.resolved_at,
            closed_at: self.closed_at,
        }
    }
}
