// src/domain/security_event_status.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// セキュリティイベントの状態を表すenum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityEventStatus {
    New,
    Investigating,
    Contained,
    Resolved,
    FalsePositive,
}

impl SecurityEventStatus {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "new" => Some(Self::New),
            "investigating" => Some(Self::Investigating),
            "contained" => Some(Self::Contained),
            "resolved" => Some(Self::Resolved),
            "false_positive" => Some(Self::FalsePositive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Investigating => "investigating",
            Self::Contained => "contained",
            Self::Resolved => "resolved",
            Self::FalsePositive => "false_positive",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Self::New,
            Self::Investigating,
            Self::Contained,
            Self::Resolved,
            Self::FalsePositive,
        ]
    }

    /// 調査が終了した状態かチェック
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Resolved | Self::FalsePositive)
    }
}

impl Default for SecurityEventStatus {
    fn default() -> Self {
        Self::New
    }
}

impl fmt::Display for SecurityEventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<SecurityEventStatus> for String {
    fn from(status: SecurityEventStatus) -> Self {
        status.as_str().to_string()
    }
}

/// セキュリティイベントの深刻度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecuritySeverity {
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl SecuritySeverity {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "info" => Some(Self::Info),
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for SecuritySeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// セキュリティイベントの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityEventType {
    LoginFailure,
    UnauthorizedAccess,
    Malware,
    Phishing,
    Ddos,
    DataBreach,
    PolicyViolation,
    SuspiciousActivity,
    Other,
}

impl SecurityEventType {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "login_failure" => Some(Self::LoginFailure),
            "unauthorized_access" => Some(Self::UnauthorizedAccess),
            "malware" => Some(Self::Malware),
            "phishing" => Some(Self::Phishing),
            "ddos" => Some(Self::Ddos),
            "data_breach" => Some(Self::DataBreach),
            "policy_violation" => Some(Self::PolicyViolation),
            "suspicious_activity" => Some(Self::SuspiciousActivity),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoginFailure => "login_failure",
            Self::UnauthorizedAccess => "unauthorized_access",
            Self::Malware => "malware",
            Self::Phishing => "phishing",
            Self::Ddos => "ddos",
            Self::DataBreach => "data_breach",
            Self::PolicyViolation => "policy_violation",
            Self::SuspiciousActivity => "suspicious_activity",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for SecurityEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!(
            SecurityEventStatus::from_str("new"),
            Some(SecurityEventStatus::New)
        );
        assert_eq!(
            SecurityEventStatus::from_str("false_positive"),
            Some(SecurityEventStatus::FalsePositive)
        );
        assert_eq!(SecurityEventStatus::from_str("nope"), None);
    }

    #[test]
    fn test_is_finished() {
        assert!(SecurityEventStatus::Resolved.is_finished());
        assert!(SecurityEventStatus::FalsePositive.is_finished());
        assert!(!SecurityEventStatus::Investigating.is_finished());
        assert!(!SecurityEventStatus::Contained.is_finished());
    }

    #[test]
    fn test_severity_parse() {
        assert_eq!(
            SecuritySeverity::from_str("critical"),
            Some(SecuritySeverity::Critical)
        );
        assert_eq!(SecuritySeverity::from_str("severe"), None);
    }

    #[test]
    fn test_event_type_parse() {
        assert_eq!(
            SecurityEventType::from_str("ddos"),
            Some(SecurityEventType::Ddos)
        );
        assert_eq!(
            SecurityEventType::from_str("data_breach"),
            Some(SecurityEventType::DataBreach)
        );
        assert_eq!(SecurityEventType::from_str("unknown"), None);
    }
}
