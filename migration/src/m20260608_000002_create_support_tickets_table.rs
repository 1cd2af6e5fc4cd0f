use sea_orm_migration::prelude::*;

use crate::m20260601_000001_create_branches_table::Branches;
use crate::m20260601_000002_create_users_table::Users;
use crate::m20260601_000003_create_atms_table::Atms;
use crate::m20260601_000004_create_pos_terminals_table::PosTerminals;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SupportTickets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SupportTickets::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SupportTickets::TicketNumber)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(SupportTickets::Title).string_len(255).not_null())
                    .col(ColumnDef::new(SupportTickets::Description).text().not_null())
                    .col(
                        ColumnDef::new(SupportTickets::Category)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SupportTickets::Priority)
                            .string_len(10)
                            .not_null()
                            .default("medium"),
                    )
                    .col(
                        ColumnDef::new(SupportTickets::Status)
                            .string_len(15)
                            .not_null()
                            .default("open"),
                    )
                    .col(ColumnDef::new(SupportTickets::BranchId).uuid().not_null())
                    .col(ColumnDef::new(SupportTickets::CreatedBy).uuid().null())
                    .col(ColumnDef::new(SupportTickets::AssignedTo).uuid().null())
                    .col(ColumnDef::new(SupportTickets::AtmId).uuid().null())
                    .col(ColumnDef::new(SupportTickets::PosTerminalId).uuid().null())
                    .col(ColumnDef::new(SupportTickets::ResolutionNotes).text().null())
                    .col(
                        ColumnDef::new(SupportTickets::ResolutionTimeSeconds)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SupportTickets::ResolvedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SupportTickets::ClosedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SupportTickets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SupportTickets::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_support_tickets_branch_id")
                            .from(SupportTickets::Table, SupportTickets::BranchId)
                            .to(Branches::Table, Branches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_support_tickets_created_by")
                            .from(SupportTickets::Table, SupportTickets::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_support_tickets_assigned_to")
                            .from(SupportTickets::Table, SupportTickets::AssignedTo)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_support_tickets_atm_id")
                            .from(SupportTickets::Table, SupportTickets::AtmId)
                            .to(Atms::Table, Atms::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_support_tickets_pos_terminal_id")
                            .from(SupportTickets::Table, SupportTickets::PosTerminalId)
                            .to(PosTerminals::Table, PosTerminals::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SupportTickets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SupportTickets {
    Table,
    Id,
    TicketNumber,
    Title,
    Description,
    Category,
    Priority,
    Status,
    BranchId,
    CreatedBy,
    AssignedTo,
    AtmId,
    PosTerminalId,
    ResolutionNotes,
    ResolutionTimeSeconds,
    ResolvedAt,
    ClosedAt,
    CreatedAt,
    UpdatedAt,
}
