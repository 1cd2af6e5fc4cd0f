// src/repository/ticket_repository.rs
use crate::api::dto::ticket_dto::{CreateTicketDto, TicketFilterDto};
use crate::domain::ticket_model::{self, ActiveModel as TicketActiveModel, Entity as TicketEntity};
use crate::domain::ticket_number::format_ticket_number;
use crate::domain::ticket_sequence_model::{
    self, Entity as TicketSequenceEntity, TICKET_SEQUENCE_NAME,
};
use crate::domain::visibility::TicketScope;
use sea_orm::{entity::*, query::*, ConnectionTrait, DbConn, DbErr, Order, Set};
use uuid::Uuid;

pub struct TicketRepository {
    db: DbConn,
}

impl TicketRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// 次のチケット番号を払い出す
    ///
    /// カウンタ行を `SELECT ... FOR UPDATE` でロックして読み、加算して
    /// 書き戻す。呼び出し側はチケットのINSERTと同一トランザクション内で
    /// 使うこと。ロックにより並行リクエストはこの行で直列化される。
    pub async fn allocate_ticket_number<C: ConnectionTrait>(conn: &C) -> Result<String, DbErr> {
        let counter = TicketSequenceEntity::find_by_id(TICKET_SEQUENCE_NAME)
            .lock_exclusive()
            .one(conn)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "ticket_sequences row '{}' is missing",
                    TICKET_SEQUENCE_NAME
                ))
            })?;

        let next_value = counter.last_value + 1;

        let mut active: ticket_sequence_model::ActiveModel = counter.into();
        active.last_value = Set(next_value);
        active.update(conn).await?;

        Ok(format_ticket_number(next_value))
    }

    /// 採番済みの番号でチケットを挿入する（採番と同一トランザクション内で呼ぶ）
    pub async fn insert_with_number<C: ConnectionTrait>(
        conn: &C,
        ticket_number: String,
        payload: &CreateTicketDto,
        created_by: Uuid,
    ) -> Result<ticket_model::Model, DbErr> {
        let mut ticket = TicketActiveModel::new();
        ticket.ticket_number = Set(ticket_number);
        ticket.title = Set(payload.title.clone());
        ticket.description = Set(payload.description.clone());
        ticket.category = Set(payload.category.as_str().to_string());
        ticket.priority = Set(payload.priority.unwrap_or_default().as_str().to_string());
        ticket.status = Set(crate::domain::ticket_status::TicketStatus::Open
            .as_str()
            .to_string());
        ticket.branch_id = Set(payload.branch_id);
        ticket.created_by = Set(Some(created_by));
        ticket.assigned_to = Set(payload.assigned_to);
        ticket.atm_id = Set(payload.atm_id);
        ticket.pos_terminal_id = Set(payload.pos_terminal_id);
        ticket.resolution_notes = Set(None);
        ticket.resolution_time_seconds = Set(None);
        ticket.resolved_at = Set(None);
        ticket.closed_at = Set(None);

        ticket.insert(conn).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ticket_model::Model>, DbErr> {
        TicketEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn find_by_id_in_txn<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
    ) -> Result<Option<ticket_model::Model>, DbErr> {
        TicketEntity::find_by_id(id).one(conn).await
    }

    /// 閲覧スコープとフィルタを適用したチケット一覧
    pub async fn find_with_scope(
        &self,
        scope: &TicketScope,
        filter: &TicketFilterDto,
    ) -> Result<(Vec<ticket_model::Model>, u64), DbErr> {
        let mut conditions = Condition::all().add(scope.condition());

        if let Some(status) = &filter.status {
            conditions = conditions.add(ticket_model::Column::Status.eq(status.as_str()));
        }

        if let Some(priority) = &filter.priority {
            conditions = conditions.add(ticket_model::Column::Priority.eq(priority.as_str()));
        }

        if let Some(category) = &filter.category {
            conditions = conditions.add(ticket_model::Column::Category.eq(category.as_str()));
        }

        if let Some(branch_id) = filter.branch_id {
            conditions = conditions.add(ticket_model::Column::BranchId.eq(branch_id));
        }

        if let Some(assigned_to) = filter.assigned_to {
            conditions = conditions.add(ticket_model::Column::AssignedTo.eq(assigned_to));
        }

        // チケット番号・タイトル・本文の部分一致検索
        if let Some(search) = &filter.search {
            conditions = conditions.add(
                Condition::any()
                    .add(ticket_model::Column::TicketNumber.contains(search))
                    .add(ticket_model::Column::Title.contains(search))
                    .add(ticket_model::Column::Description.contains(search)),
            );
        }

        let query = TicketEntity::find()
            .filter(conditions)
            .order_by(ticket_model::Column::CreatedAt, Order::Desc);

        let total_items = query.clone().count(&self.db).await?;

        let per_page = filter.per_page.unwrap_or(20).clamp(1, 100);
        let page = filter.page.unwrap_or(1).max(1);
        let offset = (page - 1) * per_page;

        let tickets = query.limit(per_page).offset(offset).all(&self.db).await?;

        Ok((tickets, total_items))
    }

    pub async fn update<C: ConnectionTrait>(
        conn: &C,
        ticket: TicketActiveModel,
    ) -> Result<ticket_model::Model, DbErr> {
        ticket.update(conn).await
    }

    pub async fn delete_by_id(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = TicketEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        TicketEntity::find().count(&self.db).await
    }

    pub async fn count_by_status(&self, status: &str) -> Result<u64, DbErr> {
        TicketEntity::find()
            .filter(ticket_model::Column::Status.eq(status))
            .count(&self.db)
            .await
    }

    pub async fn count_by_priority(&self, priority: &str) -> Result<u64, DbErr> {
        TicketEntity::find()
            .filter(ticket_model::Column::Priority.eq(priority))
            .count(&self.db)
            .await
    }
}

impl Clone for TicketRepository {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}
