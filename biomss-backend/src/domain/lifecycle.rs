// src/domain/lifecycle.rs

//! ステータス遷移に伴うタイムスタンプ・担当者の自動設定ルール
//!
//! チケット・アラート・セキュリティイベントのステータス変更時に適用する
//! フィールド更新を純粋関数として計算する。ルールはすべて「初回のみ」:
//! 対応するタイムスタンプが未設定の場合に限り値を設定し、設定済みの値は
//! 上書きも消去もしない（冪等・前進のみ）。
//!
//! 計算結果はサービス層がステータス変更と同一の更新として永続化する。

use crate::domain::alert_status::AlertStatus;
use crate::domain::security_event_status::SecurityEventStatus;
use crate::domain::ticket_status::TicketStatus;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// チケットの現在のタイムスタンプ群
#[derive(Debug, Clone, Copy)]
pub struct TicketTimestamps {
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
}

/// チケットのステータス遷移で適用するフィールド更新
///
/// `None` のフィールドは変更しない。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketSideEffects {
    pub resolved_at: Option<DateTime<Utc>>,
    pub resolution_time_seconds: Option<i64>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl TicketSideEffects {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// チケットのステータス遷移ルール
///
/// - 初回の RESOLVED 到達で `resolved_at = now`、`resolution_time = now - created_at`
/// - 初回の CLOSED 到達で `closed_at = now`
pub fn on_ticket_transition(
    current: &TicketTimestamps,
    new_status: TicketStatus,
    now: DateTime<Utc>,
) -> TicketSideEffects {
    let mut effects = TicketSideEffects::default();

    if new_status == TicketStatus::Resolved && current.resolved_at.is_none() {
        effects.resolved_at = Some(now);
        effects.resolution_time_seconds = Some((now - current.created_at).num_seconds());
    }

    if new_status == TicketStatus::Closed && current.closed_at.is_none() {
        effects.closed_at = Some(now);
    }

    effects
}

/// アラートの現在のタイムスタンプ群
#[derive(Debug, Clone, Copy)]
pub struct AlertTimestamps {
    pub acknowledged_at: Option<DateTime<Utc>>,
    pub resolved_at: Option<DateTime<Utc>>,
}

/// アラートのステータス遷移で適用するフィールド更新
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertSideEffects {
    pub acknowledged_by: Option<Uuid>,
    pub acknowledged_at: Option<DateTime<Utc>>,
    pub resolved_at: Option<DateTime<Utc>>,
}

/// アラートのステータス遷移ルール
///
/// - 初回の ACKNOWLEDGED 到達で確認者と確認時刻を記録（以後は不変）
/// - 初回の RESOLVED 到達で `resolved_at = now`
pub fn on_alert_transition(
    current: &AlertTimestamps,
    new_status: AlertStatus,
    actor: Uuid,
    now: DateTime<Utc>,
) -> AlertSideEffects {
    let mut effects = AlertSideEffects::default();

    if new_status == AlertStatus::Acknowledged && current.acknowledged_at.is_none() {
        effects.acknowledged_by = Some(actor);
        effects.acknowledged_at = Some(now);
    }

    if new_status == AlertStatus::Resolved && current.resolved_at.is_none() {
        effects.resolved_at = Some(now);
    }

    effects
}

/// セキュリティイベントのステータス遷移ルール
///
/// 初回の RESOLVED 到達時のみ `resolved_at` を返す。
pub fn on_security_event_transition(
    current_resolved_at: Option<DateTime<Utc>>,
    new_status: SecurityEventStatus,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    if new_status == SecurityEventStatus::Resolved && current_resolved_at.is_none() {
        Some(now)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn t0() -> DateTime<Utc> {
        "2026-03-01T08:00:00Z".parse().unwrap()
    }

    fn open_ticket() -> TicketTimestamps {
        TicketTimestamps {
            created_at: t0(),
            resolved_at: None,
            closed_at: None,
        }
    }

    #[test]
    fn test_first_resolve_sets_timestamps() {
        let t1 = t0() + Duration::hours(3);
        let effects = on_ticket_transition(&open_ticket(), TicketStatus::Resolved, t1);

        assert_eq!(effects.resolved_at, Some(t1));
        assert_eq!(effects.resolution_time_seconds, Some(3 * 3600));
        assert_eq!(effects.closed_at, None);
    }

    #[test]
    fn test_second_resolve_is_noop() {
        let t1 = t0() + Duration::hours(3);
        let t2 = t0() + Duration::hours(9);

        let resolved = TicketTimestamps {
            created_at: t0(),
            resolved_at: Some(t1),
            closed_at: None,
        };

        // 再度のRESOLVEDでは resolved_at / resolution_time とも変更なし
        let effects = on_ticket_transition(&resolved, TicketStatus::Resolved, t2);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_first_close_sets_closed_at() {
        let t1 = t0() + Duration::hours(5);
        let effects = on_ticket_transition(&open_ticket(), TicketStatus::Closed, t1);

        assert_eq!(effects.closed_at, Some(t1));
        assert_eq!(effects.resolved_at, None);
        assert_eq!(effects.resolution_time_seconds, None);
    }

    #[test]
    fn test_second_close_is_noop() {
        let closed = TicketTimestamps {
            created_at: t0(),
            resolved_at: None,
            closed_at: Some(t0() + Duration::hours(5)),
        };
        let effects = on_ticket_transition(&closed, TicketStatus::Closed, t0() + Duration::hours(6));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_close_after_resolve_keeps_resolution() {
        let t1 = t0() + Duration::hours(3);
        let t2 = t0() + Duration::hours(4);

        let resolved = TicketTimestamps {
            created_at: t0(),
            resolved_at: Some(t1),
            closed_at: None,
        };

        let effects = on_ticket_transition(&resolved, TicketStatus::Closed, t2);
        assert_eq!(effects.closed_at, Some(t2));
        // resolved_at は既に設定済みなので触らない
        assert_eq!(effects.resolved_at, None);
        assert_eq!(effects.resolution_time_seconds, None);
    }

    #[test]
    fn test_non_terminal_transitions_have_no_effects() {
        for status in [
            TicketStatus::Open,
            TicketStatus::InProgress,
            TicketStatus::Pending,
            TicketStatus::Cancelled,
        ] {
            let effects = on_ticket_transition(&open_ticket(), status, t0() + Duration::hours(1));
            assert!(effects.is_empty(), "unexpected effects for {}", status);
        }
    }

    #[test]
    fn test_reopen_does_not_clear_timestamps() {
        // RESOLVED済みチケットをIN_PROGRESSに戻しても、巻き戻しは発生しない
        let resolved = TicketTimestamps {
            created_at: t0(),
            resolved_at: Some(t0() + Duration::hours(3)),
            closed_at: None,
        };
        let effects =
            on_ticket_transition(&resolved, TicketStatus::InProgress, t0() + Duration::hours(7));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_resolution_time_example() {
        // T0に作成、T1にRESOLVED → resolution_time == T1 - T0。
        // T2に再度RESOLVEDしても変化しない。
        let t1 = t0() + Duration::minutes(90);
        let effects = on_ticket_transition(&open_ticket(), TicketStatus::Resolved, t1);
        assert_eq!(effects.resolution_time_seconds, Some(90 * 60));

        let after_t1 = TicketTimestamps {
            created_at: t0(),
            resolved_at: Some(t1),
            closed_at: None,
        };
        let t2 = t0() + Duration::hours(48);
        let effects = on_ticket_transition(&after_t1, TicketStatus::Resolved, t2);
        assert_eq!(effects.resolution_time_seconds, None);
    }

    #[test]
    fn test_alert_first_acknowledge() {
        let actor = Uuid::new_v4();
        let current = AlertTimestamps {
            acknowledged_at: None,
            resolved_at: None,
        };

        let now = t0();
        let effects = on_alert_transition(&current, AlertStatus::Acknowledged, actor, now);
        assert_eq!(effects.acknowledged_by, Some(actor));
        assert_eq!(effects.acknowledged_at, Some(now));
        assert_eq!(effects.resolved_at, None);
    }

    #[test]
    fn test_alert_second_acknowledge_keeps_first_actor() {
        let first_ack = t0();
        let current = AlertTimestamps {
            acknowledged_at: Some(first_ack),
            resolved_at: None,
        };

        // 別のユーザーが再確認しても、最初の確認者・時刻は保持される
        let other_actor = Uuid::new_v4();
        let effects = on_alert_transition(
            &current,
            AlertStatus::Acknowledged,
            other_actor,
            t0() + Duration::minutes(10),
        );
        assert_eq!(effects.acknowledged_by, None);
        assert_eq!(effects.acknowledged_at, None);
    }

    #[test]
    fn test_alert_resolve_and_dismiss() {
        let actor = Uuid::new_v4();
        let current = AlertTimestamps {
            acknowledged_at: None,
            resolved_at: None,
        };

        let now = t0();
        let effects = on_alert_transition(&current, AlertStatus::Resolved, actor, now);
        assert_eq!(effects.resolved_at, Some(now));
        assert_eq!(effects.acknowledged_at, None);

        // DISMISSEDはタイムスタンプの副作用なし
        let effects = on_alert_transition(&current, AlertStatus::Dismissed, actor, now);
        assert_eq!(effects, AlertSideEffects::default());
    }

    #[test]
    fn test_security_event_resolve_once() {
        let now = t0();
        assert_eq!(
            on_security_event_transition(None, SecurityEventStatus::Resolved, now),
            Some(now)
        );

        // 2回目は変更なし
        assert_eq!(
            on_security_event_transition(
                Some(now),
                SecurityEventStatus::Resolved,
                now + Duration::hours(1)
            ),
            None
        );

        // 非終端ステータスは副作用なし
        assert_eq!(
            on_security_event_transition(None, SecurityEventStatus::Investigating, now),
            None
        );
        assert_eq!(
            on_security_event_transition(None, SecurityEventStatus::FalsePositive, now),
            None
        );
    }
}
