// src/repository/ticket_comment_repository.rs
use crate::domain::ticket_comment_model::{
    self, ActiveModel as CommentActiveModel, Entity as CommentEntity,
};
use sea_orm::{entity::*, query::*, DbConn, DbErr, Order, Set};
use uuid::Uuid;

pub struct TicketCommentRepository {
    db: DbConn,
}

impl TicketCommentRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        ticket_id: Uuid,
        user_id: Uuid,
        comment: String,
        is_internal: bool,
    ) -> Result<ticket_comment_model::Model, DbErr> {
        let mut model = CommentActiveModel::new();
        model.ticket_id = Set(ticket_id);
        model.user_id = Set(Some(user_id));
        model.comment = Set(comment);
        model.is_internal = Set(is_internal);

        model.insert(&self.db).await
    }

    /// チケットのコメントを古い順に取得。`include_internal` が偽なら内部コメントを除外
    pub async fn find_by_ticket(
        &self,
        ticket_id: Uuid,
        include_internal: bool,
    ) -> Result<Vec<ticket_comment_model::Model>, DbErr> {
        let mut conditions =
            Condition::all().add(ticket_comment_model::Column::TicketId.eq(ticket_id));

        if !include_internal {
            conditions = conditions.add(ticket_comment_model::Column::IsInternal.eq(false));
        }

        CommentEntity::find()
            .filter(conditions)
            .order_by(ticket_comment_model::Column::CreatedAt, Order::Asc)
            .all(&self.db)
            .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ticket_comment_model::Model>, DbErr> {
        CommentEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn delete_by_id(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = CommentEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}

impl Clone for TicketCommentRepository {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}
