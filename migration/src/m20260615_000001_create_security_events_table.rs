use sea_orm_migration::prelude::*;

use crate::m20260601_000001_create_branches_table::Branches;
use crate::m20260601_000002_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SecurityEvents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SecurityEvents::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SecurityEvents::EventType)
                            .string_len(30)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SecurityEvents::Severity)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SecurityEvents::Status)
                            .string_len(20)
                            .not_null()
                            .default("new"),
                    )
                    .col(ColumnDef::new(SecurityEvents::SourceIp).string_len(45).null())
                    .col(ColumnDef::new(SecurityEvents::TargetIp).string_len(45).null())
                    .col(ColumnDef::new(SecurityEvents::BranchId).uuid().null())
                    .col(ColumnDef::new(SecurityEvents::UserId).uuid().null())
                    .col(ColumnDef::new(SecurityEvents::Description).text().not_null())
                    .col(
                        ColumnDef::new(SecurityEvents::AffectedSystem)
                            .string_len(255)
                            .null(),
                    )
                    .col(ColumnDef::new(SecurityEvents::ActionTaken).text().null())
                    .col(ColumnDef::new(SecurityEvents::AssignedTo).uuid().null())
                    .col(
                        ColumnDef::new(SecurityEvents::DetectedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SecurityEvents::ResolvedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SecurityEvents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SecurityEvents::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_security_events_branch_id")
                            .from(SecurityEvents::Table, SecurityEvents::BranchId)
                            .to(Branches::Table, Branches::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_security_events_user_id")
                            .from(SecurityEvents::Table, SecurityEvents::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_security_events_assigned_to")
                            .from(SecurityEvents::Table, SecurityEvents::AssignedTo)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_security_events_severity_status")
                    .table(SecurityEvents::Table)
                    .col(SecurityEvents::Severity)
                    .col(SecurityEvents::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SecurityEvents::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SecurityEvents {
    Table,
    Id,
    EventType,
    Severity,
    Status,
    SourceIp,
    TargetIp,
    BranchId,
    UserId,
    Description,
    AffectedSystem,
    ActionTaken,
    AssignedTo,
    DetectedAt,
    ResolvedAt,
    CreatedAt,
    UpdatedAt,
}
