// src/domain/atm_model.rs
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "atms")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub atm_code: String,
    pub branch_id: Uuid,
    pub location_description: String,
    pub model: String,
    pub manufacturer: String,
    pub serial_number: String,
    pub ip_address: String,
    pub status: String,
    pub cash_level: i32,
    pub max_cash_capacity: i32,
    pub installation_date: Date,
    pub is_active: bool,
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
    /// 現金残量を容量比（%）で返す
    pub fn cash_percentage(&self) -> f64 {
        if self.max_cash_capacity > 0 {
            (self.cash_level as f64 / self.max_cash_capacity as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// ATMの稼働状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtmStatus {
    Online,
    Offline,
    Maintenance,
    OutOfService,
    CashOut,
}

impl AtmStatus {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "online" => Some(Self::Online),
            "offline" => Some(Self::Offline),
            "maintenance" => Some(Self::Maintenance),
            "out_of_service" => Some(Self::OutOfService),
            "cash_out" => Some(Self::CashOut),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Maintenance => "maintenance",
            Self::OutOfService => "out_of_service",
            Self::CashOut => "cash_out",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cash_percentage() {
        let atm = Model {
            id: Uuid::new_v4(),
            atm_code: "ATM-ACC-01".to_string(),
            branch_id: Uuid::new_v4(),
            location_description: "Accra Mall lobby".to_string(),
            model: "SelfServ 34".to_string(),
            manufacturer: "NCR".to_string(),
            serial_number: "SN-0001".to_string(),
            ip_address: "10.12.4.7".to_string(),
            status: "online".to_string(),
            cash_level: 25000,
            max_cash_capacity: 100000,
            installation_date: "2024-01-15".parse().unwrap(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert!((atm.cash_percentage() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cash_percentage_zero_capacity() {
        let atm = Model {
            id: Uuid::new_v4(),
            atm_code: "ATM-ACC-02".to_string(),
            branch_id: Uuid::new_v4(),
            location_description: "Osu branch".to_string(),
            model: "SelfServ 34".to_string(),
            manufacturer: "NCR".to_string(),
            serial_number: "SN-0002".to_string(),
            ip_address: "10.12.4.8".to_string(),
            status: "online".to_string(),
            cash_level: 0,
            max_cash_capacity: 0,
            installation_date: "2024-01-15".parse().unwrap(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(atm.cash_percentage(), 0.0);
    }
}
