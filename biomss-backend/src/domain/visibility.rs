// src/domain/visibility.rs

//! ロールに応じた閲覧範囲の決定
//!
//! アクターのロールから純粋に閲覧スコープを導出し、スコープをSeaORMの
//! 検索条件とインメモリ述語の両方に展開する。チケット・アラートの一覧を
//! 返す経路は必ずこのスコープを通す。
//!
//! ロールが取れない（DB上の文字列が解釈できない）場合は、最も広い範囲
//! ではなく「何も見えない」側に倒す。

use crate::domain::alert_model;
use crate::domain::role::UserRole;
use crate::domain::ticket_model;
use sea_orm::{ColumnTrait, Condition};
use uuid::Uuid;

/// チケット一覧の閲覧スコープ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketScope {
    /// 全件
    All,
    /// 指定支店のチケットのみ
    Branch(Uuid),
    /// 自分に割り当て済み、または未割り当てのチケットのみ
    AssignedOrUnassigned(Uuid),
    /// 何も見えない
    Nothing,
}

impl TicketScope {
    /// アクターのロール・ID・所属支店からスコープを決定
    pub fn for_actor(role: Option<UserRole>, user_id: Uuid, branch_id: Option<Uuid>) -> Self {
        match role {
            Some(UserRole::BranchManager) => match branch_id {
                Some(branch) => Self::Branch(branch),
                // 所属支店が未設定の支店長には何も見せない
                None => Self::Nothing,
            },
            Some(UserRole::ItOfficer) | Some(UserRole::SupportTech) => {
                Self::AssignedOrUnassigned(user_id)
            }
            Some(_) => Self::All,
            None => Self::Nothing,
        }
    }

    /// スコープをチケット検索の条件に展開
    pub fn condition(&self) -> Condition {
        match self {
            Self::All => Condition::all(),
            Self::Branch(branch_id) => {
                Condition::all().add(ticket_model::Column::BranchId.eq(*branch_id))
            }
            Self::AssignedOrUnassigned(user_id) => Condition::any()
                .add(ticket_model::Column::AssignedTo.eq(*user_id))
                .add(ticket_model::Column::AssignedTo.is_null()),
            // 主キーは非NULLなので常に偽になる条件
            Self::Nothing => Condition::all().add(ticket_model::Column::Id.is_null()),
        }
    }

    /// 単一チケットがスコープ内かどうかの述語
    pub fn permits(&self, ticket_branch_id: Uuid, assigned_to: Option<Uuid>) -> bool {
        match self {
            Self::All => true,
            Self::Branch(branch_id) => ticket_branch_id == *branch_id,
            Self::AssignedOrUnassigned(user_id) => {
                assigned_to.is_none() || assigned_to == Some(*user_id)
            }
            Self::Nothing => false,
        }
    }
}

/// アラート一覧の閲覧スコープ
///
/// 支店長は自支店のアラートのみ。他のロールは全件。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertScope {
    All,
    Branch(Uuid),
    Nothing,
}

impl AlertScope {
    pub fn for_actor(role: Option<UserRole>, branch_id: Option<Uuid>) -> Self {
        match role {
            Some(UserRole::BranchManager) => match branch_id {
                Some(branch) => Self::Branch(branch),
                None => Self::Nothing,
            },
            Some(_) => Self::All,
            None => Self::Nothing,
        }
    }

    pub fn condition(&self) -> Condition {
        match self {
            Self::All => Condition::all(),
            Self::Branch(branch_id) => {
                Condition::all().add(alert_model::Column::BranchId.eq(*branch_id))
            }
            Self::Nothing => Condition::all().add(alert_model::Column::Id.is_null()),
        }
    }

    pub fn permits(&self, alert_branch_id: Option<Uuid>) -> bool {
        match self {
            Self::All => true,
            Self::Branch(branch_id) => alert_branch_id == Some(*branch_id),
            Self::Nothing => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_sees_everything() {
        let scope = TicketScope::for_actor(Some(UserRole::Admin), Uuid::new_v4(), None);
        assert_eq!(scope, TicketScope::All);
        assert!(scope.permits(Uuid::new_v4(), None));
        assert!(scope.permits(Uuid::new_v4(), Some(Uuid::new_v4())));
    }

    #[test]
    fn test_branch_manager_limited_to_own_branch() {
        let branch = Uuid::new_v4();
        let other_branch = Uuid::new_v4();
        let scope =
            TicketScope::for_actor(Some(UserRole::BranchManager), Uuid::new_v4(), Some(branch));

        assert_eq!(scope, TicketScope::Branch(branch));
        assert!(scope.permits(branch, None));
        assert!(!scope.permits(other_branch, None));
    }

    #[test]
    fn test_branch_manager_without_branch_sees_nothing() {
        let scope = TicketScope::for_actor(Some(UserRole::BranchManager), Uuid::new_v4(), None);
        assert_eq!(scope, TicketScope::Nothing);
        assert!(!scope.permits(Uuid::new_v4(), None));
    }

    #[test]
    fn test_it_staff_sees_assigned_or_unassigned() {
        let me = Uuid::new_v4();
        let someone_else = Uuid::new_v4();

        for role in [UserRole::ItOfficer, UserRole::SupportTech] {
            let scope = TicketScope::for_actor(Some(role), me, None);
            assert_eq!(scope, TicketScope::AssignedOrUnassigned(me));

            assert!(scope.permits(Uuid::new_v4(), Some(me)));
            assert!(scope.permits(Uuid::new_v4(), None));
            assert!(!scope.permits(Uuid::new_v4(), Some(someone_else)));
        }
    }

    #[test]
    fn test_unlisted_roles_see_everything() {
        for role in [UserRole::SecurityOfficer, UserRole::Viewer] {
            let scope = TicketScope::for_actor(Some(role), Uuid::new_v4(), None);
            assert_eq!(scope, TicketScope::All);
        }
    }

    #[test]
    fn test_absent_role_sees_nothing() {
        let scope = TicketScope::for_actor(None, Uuid::new_v4(), None);
        assert_eq!(scope, TicketScope::Nothing);
        assert!(!scope.permits(Uuid::new_v4(), None));
    }

    #[test]
    fn test_alert_scope() {
        let branch = Uuid::new_v4();

        let scope = AlertScope::for_actor(Some(UserRole::BranchManager), Some(branch));
        assert_eq!(scope, AlertScope::Branch(branch));
        assert!(scope.permits(Some(branch)));
        assert!(!scope.permits(Some(Uuid::new_v4())));
        assert!(!scope.permits(None));

        assert_eq!(
            AlertScope::for_actor(Some(UserRole::ItOfficer), None),
            AlertScope::All
        );
        assert_eq!(AlertScope::for_actor(None, None), AlertScope::Nothing);
    }
}
