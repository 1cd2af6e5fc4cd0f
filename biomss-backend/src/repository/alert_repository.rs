// src/repository/alert_repository.rs
use crate::api::dto::alert_dto::{AlertFilterDto, CreateAlertDto};
use crate::domain::alert_model::{self, ActiveModel as AlertActiveModel, Entity as AlertEntity};
use crate::domain::visibility::AlertScope;
use sea_orm::{entity::*, query::*, ConnectionTrait, DbConn, DbErr, Order, Set};
use uuid::Uuid;

pub struct AlertRepository {
    db: DbConn,
}

impl AlertRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn create(&self, payload: &CreateAlertDto) -> Result<alert_model::Model, DbErr> {
        let mut alert = AlertActiveModel::new();
        alert.alert_type = Set(payload.alert_type.as_str().to_string());
        alert.title = Set(payload.title.clone());
        alert.message = Set(payload.message.clone());
        alert.status = Set(crate::domain::alert_status::AlertStatus::Active
            .as_str()
            .to_string());
        alert.branch_id = Set(payload.branch_id);
        alert.atm_id = Set(payload.atm_id);
        alert.pos_terminal_id = Set(payload.pos_terminal_id);
        alert.security_event_id = Set(payload.security_event_id);
        alert.acknowledged_by = Set(None);
        alert.acknowledged_at = Set(None);
        alert.resolved_at = Set(None);

        alert.insert(&self.db).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<alert_model::Model>, DbErr> {
        AlertEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn find_by_id_in_txn<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
    ) -> Result<Option<alert_model::Model>, DbErr> {
        AlertEntity::find_by_id(id).one(conn).await
    }

    /// 閲覧スコープとフィルタを適用したアラート一覧
    pub async fn find_with_scope(
        &self,
        scope: &AlertScope,
        filter: &AlertFilterDto,
    ) -> Result<(Vec<alert_model::Model>, u64), DbErr> {
        let mut conditions = Condition::all().add(scope.condition());

        if let Some(status) = &filter.status {
            conditions = conditions.add(alert_model::Column::Status.eq(status.as_str()));
        }

        if let Some(alert_type) = &filter.alert_type {
            conditions = conditions.add(alert_model::Column::AlertType.eq(alert_type.as_str()));
        }

        if let Some(branch_id) = filter.branch_id {
            conditions = conditions.add(alert_model::Column::BranchId.eq(branch_id));
        }

        if let Some(search) = &filter.search {
            conditions = conditions.add(
                Condition::any()
                    .add(alert_model::Column::Title.contains(search))
                    .add(alert_model::Column::Message.contains(search)),
            );
        }

        let query = AlertEntity::find()
            .filter(conditions)
            .order_by(alert_model::Column::CreatedAt, Order::Desc);

        let total_items = query.clone().count(&self.db).await?;

        let per_page = filter.per_page.unwrap_or(20).clamp(1, 100);
        let page = filter.page.unwrap_or(1).max(1);
        let offset = (page - 1) * per_page;

        let alerts = query.limit(per_page).offset(offset).all(&self.db).await?;

        Ok((alerts, total_items))
    }

    pub async fn update<C: ConnectionTrait>(
        conn: &C,
        alert: AlertActiveModel,
    ) -> Result<alert_model::Model, DbErr> {
        alert.update(conn).await
    }

    pub async fn delete_by_id(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = AlertEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }

    pub async fn count_by_status(&self, status: &str) -> Result<u64, DbErr> {
        AlertEntity::find()
            .filter(alert_model::Column::Status.eq(status))
            .count(&self.db)
            .await
    }
}

impl Clone for AlertRepository {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}
