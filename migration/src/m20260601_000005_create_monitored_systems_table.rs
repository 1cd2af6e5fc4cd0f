use sea_orm_migration::prelude::*;

use crate::m20260601_000001_create_branches_table::Branches;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MonitoredSystems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MonitoredSystems::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MonitoredSystems::SystemName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MonitoredSystems::SystemType)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(ColumnDef::new(MonitoredSystems::BranchId).uuid().null())
                    .col(ColumnDef::new(MonitoredSystems::IpAddress).string_len(45).null())
                    .col(ColumnDef::new(MonitoredSystems::Hostname).string_len(255).null())
                    .col(
                        ColumnDef::new(MonitoredSystems::Status)
                            .string_len(15)
                            .not_null()
                            .default("operational"),
                    )
                    .col(ColumnDef::new(MonitoredSystems::CpuUsage).double().null())
                    .col(ColumnDef::new(MonitoredSystems::MemoryUsage).double().null())
                    .col(ColumnDef::new(MonitoredSystems::DiskUsage).double().null())
                    .col(ColumnDef::new(MonitoredSystems::NetworkLatencyMs).integer().null())
                    .col(ColumnDef::new(MonitoredSystems::Notes).text().null())
                    .col(
                        ColumnDef::new(MonitoredSystems::IsMonitored)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(MonitoredSystems::LastCheck)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(MonitoredSystems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(MonitoredSystems::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_monitored_systems_branch_id")
                            .from(MonitoredSystems::Table, MonitoredSystems::BranchId)
                            .to(Branches::Table, Branches::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_monitored_systems_status_type")
                    .table(MonitoredSystems::Table)
                    .col(MonitoredSystems::Status)
                    .col(MonitoredSystems::SystemType)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MonitoredSystems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MonitoredSystems {
    Table,
    Id,
    SystemName,
    SystemType,
    BranchId,
    IpAddress,
    Hostname,
    Status,
    CpuUsage,
    MemoryUsage,
    DiskUsage,
    NetworkLatencyMs,
    Notes,
    IsMonitored,
    LastCheck,
    CreatedAt,
    UpdatedAt,
}
