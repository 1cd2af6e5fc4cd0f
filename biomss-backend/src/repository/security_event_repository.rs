// src/repository/security_event_repository.rs
use crate::api::dto::security_event_dto::{CreateSecurityEventDto, SecurityEventFilterDto};
use crate::domain::security_event_model::{
    self, ActiveModel as SecurityEventActiveModel, Entity as SecurityEventEntity,
};
use sea_orm::{entity::*, query::*, ConnectionTrait, DbConn, DbErr, Order, Set};
use uuid::Uuid;

pub struct SecurityEventRepository {
    db: DbConn,
}

impl SecurityEventRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        payload: &CreateSecurityEventDto,
    ) -> Result<security_event_model::Model, DbErr> {
        let mut event = SecurityEventActiveModel::new();
        event.event_type = Set(payload.event_type.as_str().to_string());
        event.severity = Set(payload.severity.as_str().to_string());
        event.status = Set(crate::domain::security_event_status::SecurityEventStatus::New
            .as_str()
            .to_string());
        event.source_ip = Set(payload.source_ip.clone());
        event.target_ip = Set(payload.target_ip.clone());
        event.branch_id = Set(payload.branch_id);
        event.user_id = Set(payload.user_id);
        event.description = Set(payload.description.clone());
        event.affected_system = Set(payload.affected_system.clone());
        event.action_taken = Set(payload.action_taken.clone());
        event.assigned_to = Set(payload.assigned_to);
        if let Some(detected_at) = payload.detected_at {
            event.detected_at = Set(detected_at);
        }
        event.resolved_at = Set(None);

        event.insert(&self.db).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<security_event_model::Model>, DbErr> {
        SecurityEventEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn find_by_id_in_txn<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
    ) -> Result<Option<security_event_model::Model>, DbErr> {
        SecurityEventEntity::find_by_id(id).one(conn).await
    }

    pub async fn find_with_filter(
        &self,
        filter: &SecurityEventFilterDto,
    ) -> Result<(Vec<security_event_model::Model>, u64), DbErr> {
        let mut conditions = Condition::all();

        if let Some(status) = &filter.status {
            conditions = conditions.add(security_event_model::Column::Status.eq(status.as_str()));
        }

        if let Some(severity) = &filter.severity {
            conditions =
                conditions.add(security_event_model::Column::Severity.eq(severity.as_str()));
        }

        if let Some(event_type) = &filter.event_type {
            conditions =
                conditions.add(security_event_model::Column::EventType.eq(event_type.as_str()));
        }

        if let Some(branch_id) = filter.branch_id {
            conditions = conditions.add(security_event_model::Column::BranchId.eq(branch_id));
        }

        if let Some(search) = &filter.search {
            conditions = conditions.add(
                Condition::any()
                    .add(security_event_model::Column::Description.contains(search))
                    .add(security_event_model::Column::AffectedSystem.contains(search)),
            );
        }

        let query = SecurityEventEntity::find()
            .filter(conditions)
            .order_by(security_event_model::Column::DetectedAt, Order::Desc);

        let total_items = query.clone().count(&self.db).await?;

        let per_page = filter.per_page.unwrap_or(20).clamp(1, 100);
        let page = filter.page.unwrap_or(1).max(1);
        let offset = (page - 1) * per_page;

        let events = query.limit(per_page).offset(offset).all(&self.db).await?;

        Ok((events, total_items))
    }

    pub async fn update<C: ConnectionTrait>(
        conn: &C,
        event: SecurityEventActiveModel,
    ) -> Result<security_event_model::Model, DbErr> {
        event.update(conn).await
    }

    pub async fn delete_by_id(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = SecurityEventEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}

impl Clone for SecurityEventRepository {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}
