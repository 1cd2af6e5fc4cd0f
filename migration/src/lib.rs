// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// 基盤テーブル
mod m20260601_000001_create_branches_table;
mod m20260601_000002_create_users_table;

// 資産テーブル
mod m20260601_000003_create_atms_table;
mod m20260601_000004_create_pos_terminals_table;
mod m20260601_000005_create_monitored_systems_table;

// チケット関連
mod m20260608_000001_create_ticket_sequences_table;
mod m20260608_000002_create_support_tickets_table;
mod m20260608_000003_create_ticket_comments_table;

// セキュリティ・アラート関連
mod m20260615_000001_create_security_events_table;
mod m20260615_000002_create_alerts_table;

// 監査ログ
mod m20260622_000001_create_audit_logs_table;

// 運用クエリ向けインデックス
mod m20260629_000001_add_operational_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. 基本テーブル作成（依存関係なし）
            Box::new(m20260601_000001_create_branches_table::Migration),
            Box::new(m20260601_000002_create_users_table::Migration),
            // 2. 資産テーブル（branchesに依存）
            Box::new(m20260601_000003_create_atms_table::Migration),
            Box::new(m20260601_000004_create_pos_terminals_table::Migration),
            Box::new(m20260601_000005_create_monitored_systems_table::Migration),
            // 3. チケット採番カウンタとチケット本体
            Box::new(m20260608_000001_create_ticket_sequences_table::Migration),
            Box::new(m20260608_000002_create_support_tickets_table::Migration),
            Box::new(m20260608_000003_create_ticket_comments_table::Migration),
            // 4. セキュリティイベントとアラート
            Box::new(m20260615_000001_create_security_events_table::Migration),
            Box::new(m20260615_000002_create_alerts_table::Migration),
            // 5. 監査ログ
            Box::new(m20260622_000001_create_audit_logs_table::Migration),
            // 6. 運用クエリ向けインデックス
            Box::new(m20260629_000001_add_operational_indexes::Migration),
        ]
    }
}
