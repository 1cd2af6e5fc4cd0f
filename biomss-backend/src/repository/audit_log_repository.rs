// src/repository/audit_log_repository.rs
use crate::api::dto::audit_log_dto::AuditLogFilterDto;
use crate::domain::audit_log_model::{
    self, ActiveModel as AuditLogActiveModel, Entity as AuditLogEntity, Model as AuditLogModel,
};
use sea_orm::{entity::*, query::*, DbConn, DbErr, Order};

pub struct AuditLogRepository {
    db: DbConn,
}

impl AuditLogRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    // 監査ログの作成
    pub async fn create(&self, audit_log: AuditLogActiveModel) -> Result<AuditLogModel, DbErr> {
        audit_log.insert(&self.db).await
    }

    // フィルタ付きで監査ログを取得（新しい順）
    pub async fn find_with_filter(
        &self,
        filter: &AuditLogFilterDto,
    ) -> Result<(Vec<AuditLogModel>, u64), DbErr> {
        let mut conditions = Condition::all();

        if let Some(user_id) = filter.user_id {
            conditions = conditions.add(audit_log_model::Column::UserId.eq(user_id));
        }

        if let Some(action) = &filter.action {
            conditions = conditions.add(audit_log_model::Column::Action.eq(action.as_str()));
        }

        if let Some(resource_type) = &filter.resource_type {
            conditions =
                conditions.add(audit_log_model::Column::ResourceType.eq(resource_type.clone()));
        }

        if let Some(resource_id) = filter.resource_id {
            conditions = conditions.add(audit_log_model::Column::ResourceId.eq(resource_id));
        }

        if let Some(from) = filter.from {
            conditions = conditions.add(audit_log_model::Column::CreatedAt.gte(from));
        }

        if let Some(to) = filter.to {
            conditions = conditions.add(audit_log_model::Column::CreatedAt.lte(to));
        }

        let query = AuditLogEntity::find()
            .filter(conditions)
            .order_by(audit_log_model::Column::CreatedAt, Order::Desc);

        let total_items = query.clone().count(&self.db).await?;

        let per_page = filter.per_page.unwrap_or(50).clamp(1, 200);
        let page = filter.page.unwrap_or(1).max(1);
        let offset = (page - 1) * per_page;

        let logs = query.limit(per_page).offset(offset).all(&self.db).await?;

        Ok((logs, total_items))
    }

    // 古いログの削除（保持期間を過ぎたもの）
    pub async fn delete_old_logs(
        &self,
        before_date: chrono::DateTime<chrono::Utc>,
    ) -> Result<u64, DbErr> {
        let result = AuditLogEntity::delete_many()
            .filter(audit_log_model::Column::CreatedAt.lt(before_date))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }
}

impl Clone for AuditLogRepository {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}
