// src/domain/ticket_status.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// サポートチケットの状態を表すenum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Pending,
    Resolved,
    Closed,
    Cancelled,
}

impl TicketStatus {
    /// 文字列からTicketStatusに変換
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "open" => Some(Self::Open),
            "in_progress" => Some(Self::InProgress),
            "pending" => Some(Self::Pending),
            "resolved" => Some(Self::Resolved),
            "closed" => Some(Self::Closed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// TicketStatusを文字列として取得
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Pending => "pending",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
            Self::Cancelled => "cancelled",
        }
    }

    /// すべての有効なステータスを取得
    pub fn all() -> Vec<Self> {
        vec![
            Self::Open,
            Self::InProgress,
            Self::Pending,
            Self::Resolved,
            Self::Closed,
            Self::Cancelled,
        ]
    }

    /// 未解決（対応中）の状態かチェック
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Open | Self::InProgress | Self::Pending)
    }

    /// 終了状態かチェック
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Resolved | Self::Closed | Self::Cancelled)
    }

    /// ステータスの表示名を取得
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Pending => "Pending",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl Default for TicketStatus {
    fn default() -> Self {
        Self::Open
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TicketStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| {
            format!(
                "Invalid ticket status: '{}'. Valid statuses are: {}",
                s,
                Self::all()
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
    }
}

impl From<TicketStatus> for String {
    fn from(status: TicketStatus) -> Self {
        status.as_str().to_string()
    }
}

/// チケットの優先度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl TicketPriority {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl Default for TicketPriority {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// チケットのカテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketCategory {
    Atm,
    Pos,
    Network,
    System,
    Security,
    Software,
    Hardware,
    Other,
}

impl TicketCategory {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "atm" => Some(Self::Atm),
            "pos" => Some(Self::Pos),
            "network" => Some(Self::Network),
            "system" => Some(Self::System),
            "security" => Some(Self::Security),
            "software" => Some(Self::Software),
            "hardware" => Some(Self::Hardware),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Atm => "atm",
            Self::Pos => "pos",
            Self::Network => "network",
            Self::System => "system",
            Self::Security => "security",
            Self::Software => "software",
            Self::Hardware => "hardware",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_str() {
        assert_eq!(TicketStatus::from_str("open"), Some(TicketStatus::Open));
        assert_eq!(TicketStatus::from_str("OPEN"), Some(TicketStatus::Open));
        assert_eq!(
            TicketStatus::from_str("in_progress"),
            Some(TicketStatus::InProgress)
        );
        assert_eq!(TicketStatus::from_str("closed"), Some(TicketStatus::Closed));
        assert_eq!(TicketStatus::from_str("invalid"), None);
    }

    #[test]
    fn test_status_checks() {
        assert!(TicketStatus::Open.is_active());
        assert!(TicketStatus::Pending.is_active());
        assert!(!TicketStatus::Resolved.is_active());

        assert!(TicketStatus::Resolved.is_finished());
        assert!(TicketStatus::Closed.is_finished());
        assert!(TicketStatus::Cancelled.is_finished());
        assert!(!TicketStatus::InProgress.is_finished());
    }

    #[test]
    fn test_status_default() {
        assert_eq!(TicketStatus::default(), TicketStatus::Open);
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!(
            TicketPriority::from_str("critical"),
            Some(TicketPriority::Critical)
        );
        assert_eq!(TicketPriority::from_str("urgent"), None);
        assert_eq!(TicketPriority::default(), TicketPriority::Medium);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(TicketCategory::from_str("atm"), Some(TicketCategory::Atm));
        assert_eq!(
            TicketCategory::from_str("hardware"),
            Some(TicketCategory::Hardware)
        );
        assert_eq!(TicketCategory::from_str("unknown"), None);
    }

    #[test]
    fn test_serde() {
        let status = TicketStatus::InProgress;
        let serialized = serde_json::to_string(&status).unwrap();
        assert_eq!(serialized, r#""in_progress""#);

        let deserialized: TicketStatus = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, TicketStatus::InProgress);
    }
}
