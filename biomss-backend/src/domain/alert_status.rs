// src/domain/alert_status.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// アラートの状態を表すenum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    Active,
    Acknowledged,
    Resolved,
    Dismissed,
}

impl AlertStatus {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "active" => Some(Self::Active),
            "acknowledged" => Some(Self::Acknowledged),
            "resolved" => Some(Self::Resolved),
            "dismissed" => Some(Self::Dismissed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Acknowledged => "acknowledged",
            Self::Resolved => "resolved",
            Self::Dismissed => "dismissed",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Self::Active,
            Self::Acknowledged,
            Self::Resolved,
            Self::Dismissed,
        ]
    }

    /// 対応が必要な状態かチェック
    pub fn needs_attention(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl Default for AlertStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<AlertStatus> for String {
    fn from(status: AlertStatus) -> Self {
        status.as_str().to_string()
    }
}

/// アラートの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    AtmDown,
    AtmCashLow,
    PosOffline,
    NetworkDown,
    SecurityThreat,
    SystemFailure,
    MaintenanceDue,
    Other,
}

impl AlertType {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "atm_down" => Some(Self::AtmDown),
            "atm_cash_low" => Some(Self::AtmCashLow),
            "pos_offline" => Some(Self::PosOffline),
            "network_down" => Some(Self::NetworkDown),
            "security_threat" => Some(Self::SecurityThreat),
            "system_failure" => Some(Self::SystemFailure),
            "maintenance_due" => Some(Self::MaintenanceDue),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AtmDown => "atm_down",
            Self::AtmCashLow => "atm_cash_low",
            Self::PosOffline => "pos_offline",
            Self::NetworkDown => "network_down",
            Self::SecurityThreat => "security_threat",
            Self::SystemFailure => "system_failure",
            Self::MaintenanceDue => "maintenance_due",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!(AlertStatus::from_str("active"), Some(AlertStatus::Active));
        assert_eq!(
            AlertStatus::from_str("ACKNOWLEDGED"),
            Some(AlertStatus::Acknowledged)
        );
        assert_eq!(AlertStatus::from_str("bogus"), None);
    }

    #[test]
    fn test_needs_attention() {
        assert!(AlertStatus::Active.needs_attention());
        assert!(!AlertStatus::Acknowledged.needs_attention());
        assert!(!AlertStatus::Dismissed.needs_attention());
    }

    #[test]
    fn test_alert_type_parse() {
        assert_eq!(AlertType::from_str("atm_down"), Some(AlertType::AtmDown));
        assert_eq!(
            AlertType::from_str("maintenance_due"),
            Some(AlertType::MaintenanceDue)
        );
        assert_eq!(AlertType::from_str("unknown"), None);
    }
}
