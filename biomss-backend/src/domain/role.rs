// src/domain/role.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// スタッフのロールを表すenum
///
/// データベース上は文字列で保持し、境界でこの型に変換する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    ItOfficer,
    SupportTech,
    BranchManager,
    SecurityOfficer,
    Viewer,
}

impl UserRole {
    /// 文字列からUserRoleに変換
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Self::Admin),
            "it_officer" => Some(Self::ItOfficer),
            "support_tech" => Some(Self::SupportTech),
            "branch_manager" => Some(Self::BranchManager),
            "security_officer" => Some(Self::SecurityOfficer),
            "viewer" => Some(Self::Viewer),
            _ => None,
        }
    }

    /// UserRoleを文字列として取得
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::ItOfficer => "it_officer",
            Self::SupportTech => "support_tech",
            Self::BranchManager => "branch_manager",
            Self::SecurityOfficer => "security_officer",
            Self::Viewer => "viewer",
        }
    }

    /// すべての有効なロールを取得
    pub fn all() -> Vec<Self> {
        vec![
            Self::Admin,
            Self::ItOfficer,
            Self::SupportTech,
            Self::BranchManager,
            Self::SecurityOfficer,
            Self::Viewer,
        ]
    }

    /// 管理者かチェック
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// ITスタッフ（資産・アラートの操作が可能）かチェック
    pub fn is_it_staff(&self) -> bool {
        matches!(self, Self::Admin | Self::ItOfficer | Self::SupportTech)
    }

    /// セキュリティイベントの操作が可能かチェック
    pub fn is_security_staff(&self) -> bool {
        matches!(self, Self::Admin | Self::SecurityOfficer)
    }

    /// ロールの表示名を取得
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::ItOfficer => "IT Officer",
            Self::SupportTech => "Support Technician",
            Self::BranchManager => "Branch Manager",
            Self::SecurityOfficer => "Security Officer",
            Self::Viewer => "Viewer",
        }
    }
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Viewer
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| {
            format!(
                "Invalid role: '{}'. Valid roles are: {}",
                s,
                Self::all()
                    .iter()
                    .map(|r| r.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(UserRole::from_str("admin"), Some(UserRole::Admin));
        assert_eq!(UserRole::from_str("ADMIN"), Some(UserRole::Admin));
        assert_eq!(UserRole::from_str("it_officer"), Some(UserRole::ItOfficer));
        assert_eq!(
            UserRole::from_str("branch_manager"),
            Some(UserRole::BranchManager)
        );
        assert_eq!(UserRole::from_str("invalid"), None);
    }

    #[test]
    fn test_staff_checks() {
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::ItOfficer.is_admin());

        assert!(UserRole::Admin.is_it_staff());
        assert!(UserRole::ItOfficer.is_it_staff());
        assert!(UserRole::SupportTech.is_it_staff());
        assert!(!UserRole::BranchManager.is_it_staff());
        assert!(!UserRole::Viewer.is_it_staff());

        assert!(UserRole::SecurityOfficer.is_security_staff());
        assert!(UserRole::Admin.is_security_staff());
        assert!(!UserRole::SupportTech.is_security_staff());
    }

    #[test]
    fn test_default_is_viewer() {
        assert_eq!(UserRole::default(), UserRole::Viewer);
    }

    #[test]
    fn test_serde_roundtrip() {
        let serialized = serde_json::to_string(&UserRole::SecurityOfficer).unwrap();
        assert_eq!(serialized, r#""security_officer""#);

        let deserialized: UserRole = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, UserRole::SecurityOfficer);
    }
}
