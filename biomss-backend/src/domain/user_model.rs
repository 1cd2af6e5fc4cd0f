// src/domain/user_model.rs
use crate::domain::role::UserRole;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[sea_orm(nullable)]
    pub first_name: Option<String>,
    #[sea_orm(nullable)]
    pub last_name: Option<String>,
    pub role: String,
    #[sea_orm(nullable)]
    pub employee_id: Option<String>,
    #[sea_orm(nullable)]
    pub department: Option<String>,
    #[sea_orm(nullable)]
    pub phone_number: Option<String>,
    #[sea_orm(nullable)]
    pub branch_id: Option<Uuid>,
    pub is_active_staff: bool,
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
    /// DB上のロール文字列を解釈する。未知の値は`None`
    pub fn parsed_role(&self) -> Option<UserRole> {
        UserRole::from_str(&self.role)
    }
}

/// JWTに埋め込む認証済みユーザー情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserClaims {
    pub user_id: Uuid,
    pub username: String,
    pub role: UserRole,
    pub branch_id: Option<Uuid>,
}

impl UserClaims {
    pub fn from_model(user: &Model) -> Option<Self> {
        Some(Self {
            user_id: user.id,
            username: user.username.clone(),
            role: user.parsed_role()?,
            branch_id: user.branch_id,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
