use sea_orm_migration::prelude::*;

use crate::m20260608_000002_create_support_tickets_table::SupportTickets;
use crate::m20260615_000002_create_alerts_table::Alerts;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // チケット一覧のロール別フィルタで使う複合インデックス
        manager
            .create_index(
                Index::create()
                    .name("idx_support_tickets_branch_status")
                    .table(SupportTickets::Table)
                    .col(SupportTickets::BranchId)
                    .col(SupportTickets::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_support_tickets_assigned_status")
                    .table(SupportTickets::Table)
                    .col(SupportTickets::AssignedTo)
                    .col(SupportTickets::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_support_tickets_status_priority")
                    .table(SupportTickets::Table)
                    .col(SupportTickets::Status)
                    .col(SupportTickets::Priority)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_alerts_branch_status")
                    .table(Alerts::Table)
                    .col(Alerts::BranchId)
                    .col(Alerts::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_support_tickets_branch_status")
                    .table(SupportTickets::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_support_tickets_assigned_status")
                    .table(SupportTickets::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_support_tickets_status_priority")
                    .table(SupportTickets::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_alerts_branch_status")
                    .table(Alerts::Table)
                    .to_owned(),
            )
            .await
    }
}
