use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TicketSequences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TicketSequences::Name)
                            .string_len(50)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TicketSequences::LastValue)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        // 採番カウンタの初期行。チケット番号は常にこの行の更新で払い出す
        manager
            .exec_stmt(
                Query::insert()
                    .into_table(TicketSequences::Table)
                    .columns([TicketSequences::Name, TicketSequences::LastValue])
                    .values_panic([Expr::value("support_tickets"), Expr::value(0i64)])
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TicketSequences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TicketSequences {
    Table,
    Name,
    LastValue,
}
