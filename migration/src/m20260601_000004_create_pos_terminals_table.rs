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
                    .table(PosTerminals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PosTerminals::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PosTerminals::TerminalId)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(PosTerminals::MerchantName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PosTerminals::MerchantCode)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(PosTerminals::BranchId).uuid().null())
                    .col(ColumnDef::new(PosTerminals::Location).string_len(255).not_null())
                    .col(ColumnDef::new(PosTerminals::Model).string_len(100).not_null())
                    .col(
                        ColumnDef::new(PosTerminals::SerialNumber)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(PosTerminals::Status)
                            .string_len(15)
                            .not_null()
                            .default("active"),
                    )
                    .col(ColumnDef::new(PosTerminals::DeploymentDate).date().not_null())
                    .col(
                        ColumnDef::new(PosTerminals::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(PosTerminals::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(PosTerminals::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pos_terminals_branch_id")
                            .from(PosTerminals::Table, PosTerminals::BranchId)
                            .to(Branches::Table, Branches::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pos_terminals_merchant_code")
                    .table(PosTerminals::Table)
                    .col(PosTerminals::MerchantCode)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PosTerminals::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PosTerminals {
    Table,
    Id,
    TerminalId,
    MerchantName,
    MerchantCode,
    BranchId,
    Location,
    Model,
    SerialNumber,
    Status,
    DeploymentDate,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
