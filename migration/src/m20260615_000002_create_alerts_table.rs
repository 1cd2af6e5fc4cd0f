use sea_orm_migration::prelude::*;

use crate::m20260601_000001_create_branches_table::Branches;
use crate::m20260601_000002_create_users_table::Users;
use crate::m20260601_000003_create_atms_table::Atms;
use crate::m20260601_000004_create_pos_terminals_table::PosTerminals;
use crate::m20260615_000001_create_security_events_table::SecurityEvents;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alerts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Alerts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Alerts::AlertType).string_len(20).not_null())
                    .col(ColumnDef::new(Alerts::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Alerts::Message).text().not_null())
                    .col(
                        ColumnDef::new(Alerts::Status)
                            .string_len(15)
                            .not_null()
                            .default("active"),
                    )
                    .col(ColumnDef::new(Alerts::BranchId).uuid().null())
                    .col(ColumnDef::new(Alerts::AtmId).uuid().null())
                    .col(ColumnDef::new(Alerts::PosTerminalId).uuid().null())
                    .col(ColumnDef::new(Alerts::SecurityEventId).uuid().null())
                    .col(ColumnDef::new(Alerts::AcknowledgedBy).uuid().null())
                    .col(
                        ColumnDef::new(Alerts::AcknowledgedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Alerts::ResolvedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Alerts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Alerts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_alerts_branch_id")
                            .from(Alerts::Table, Alerts::BranchId)
                            .to(Branches::Table, Branches::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_alerts_atm_id")
                            .from(Alerts::Table, Alerts::AtmId)
                            .to(Atms::Table, Atms::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_alerts_pos_terminal_id")
                            .from(Alerts::Table, Alerts::PosTerminalId)
                            .to(PosTerminals::Table, PosTerminals::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_alerts_security_event_id")
                            .from(Alerts::Table, Alerts::SecurityEventId)
                            .to(SecurityEvents::Table, SecurityEvents::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_alerts_acknowledged_by")
                            .from(Alerts::Table, Alerts::AcknowledgedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_alerts_status_type")
                    .table(Alerts::Table)
                    .col(Alerts::Status)
                    .col(Alerts::AlertType)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alerts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Alerts {
    Table,
    Id,
    AlertType,
    Title,
    Message,
    Status,
    BranchId,
    AtmId,
    PosTerminalId,
    SecurityEventId,
    AcknowledgedBy,
    AcknowledgedAt,
    ResolvedAt,
    CreatedAt,
    UpdatedAt,
}
