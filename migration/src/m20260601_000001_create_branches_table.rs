use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Branches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Branches::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Branches::BranchCode)
                            .string_len(10)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Branches::Name).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Branches::BranchType)
                            .string_len(10)
                            .not_null()
                            .default("sub"),
                    )
                    .col(
                        ColumnDef::new(Branches::Status)
                            .string_len(15)
                            .not_null()
                            .default("active"),
                    )
                    .col(ColumnDef::new(Branches::Region).string_len(100).not_null())
                    .col(ColumnDef::new(Branches::City).string_len(100).not_null())
                    .col(ColumnDef::new(Branches::Address).text().not_null())
                    .col(
                        ColumnDef::new(Branches::PhoneNumber)
                            .string_len(15)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Branches::Email).string_len(254).not_null())
                    .col(ColumnDef::new(Branches::ManagerName).string_len(200).null())
                    .col(
                        ColumnDef::new(Branches::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Branches::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // 支店コード検索用インデックス
        manager
            .create_index(
                Index::create()
                    .name("idx_branches_status_type")
                    .table(Branches::Table)
                    .col(Branches::Status)
                    .col(Branches::BranchType)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Branches::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Branches {
    Table,
    Id,
    BranchCode,
    Name,
    BranchType,
    Status,
    Region,
    City,
    Address,
    PhoneNumber,
    Email,
    ManagerName,
    CreatedAt,
    UpdatedAt,
}
