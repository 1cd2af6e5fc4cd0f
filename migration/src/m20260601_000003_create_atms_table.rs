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
                    .table(Atms::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Atms::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Atms::AtmCode)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Atms::BranchId).uuid().not_null())
                    .col(
                        ColumnDef::new(Atms::LocationDescription)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Atms::Model).string_len(100).not_null())
                    .col(ColumnDef::new(Atms::Manufacturer).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Atms::SerialNumber)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Atms::IpAddress).string_len(45).not_null())
                    .col(
                        ColumnDef::new(Atms::Status)
                            .string_len(20)
                            .not_null()
                            .default("online"),
                    )
                    .col(
                        ColumnDef::new(Atms::CashLevel)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Atms::MaxCashCapacity)
                            .integer()
                            .not_null()
                            .default(100000),
                    )
                    .col(ColumnDef::new(Atms::InstallationDate).date().not_null())
                    .col(
                        ColumnDef::new(Atms::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Atms::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Atms::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_atms_branch_id")
                            .from(Atms::Table, Atms::BranchId)
                            .to(Branches::Table, Branches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_atms_branch_status")
                    .table(Atms::Table)
                    .col(Atms::BranchId)
                    .col(Atms::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Atms::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Atms {
    Table,
    Id,
    AtmCode,
    BranchId,
    LocationDescription,
    Model,
    Manufacturer,
    SerialNumber,
    IpAddress,
    Status,
    CashLevel,
    MaxCashCapacity,
    InstallationDate,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
