use sea_orm_migration::prelude::*;

use crate::m20260601_000002_create_users_table::Users;
use crate::m20260608_000002_create_support_tickets_table::SupportTickets;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TicketComments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TicketComments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TicketComments::TicketId).uuid().not_null())
                    .col(ColumnDef::new(TicketComments::UserId).uuid().null())
                    .col(ColumnDef::new(TicketComments::Comment).text().not_null())
                    .col(
                        ColumnDef::new(TicketComments::IsInternal)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(TicketComments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_comments_ticket_id")
                            .from(TicketComments::Table, TicketComments::TicketId)
                            .to(SupportTickets::Table, SupportTickets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_comments_user_id")
                            .from(TicketComments::Table, TicketComments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TicketComments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TicketComments {
    Table,
    Id,
    TicketId,
    UserId,
    Comment,
    IsInternal,
    CreatedAt,
}
