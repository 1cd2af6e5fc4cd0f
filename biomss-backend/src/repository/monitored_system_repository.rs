// src/repository/monitored_system_repository.rs
use crate::api::dto::monitored_system_dto::{
    CreateMonitoredSystemDto, MonitoredSystemFilterDto, UpdateMonitoredSystemDto,
};
use crate::domain::monitored_system_model::{
    self, ActiveModel as SystemActiveModel, Entity as SystemEntity,
};
use chrono::Utc;
use sea_orm::{entity::*, query::*, DbConn, DbErr, Order, Set};
use uuid::Uuid;

pub struct MonitoredSystemRepository {
    db: DbConn,
}

impl MonitoredSystemRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        payload: &CreateMonitoredSystemDto,
    ) -> Result<monitored_system_model::Model, DbErr> {
        let mut system = SystemActiveModel::new();
        system.system_name = Set(payload.system_name.clone());
        system.system_type = Set(payload.system_type.as_str().to_string());
        system.branch_id = Set(payload.branch_id);
        system.ip_address = Set(payload.ip_address.clone());
        system.hostname = Set(payload.hostname.clone());
        system.status = Set(payload
            .status
            .unwrap_or(crate::domain::monitored_system_model::SystemStatus::Operational)
            .as_str()
            .to_string());
        system.cpu_usage = Set(None);
        system.memory_usage = Set(None);
        system.disk_usage = Set(None);
        system.network_latency_ms = Set(None);
        system.notes = Set(payload.notes.clone());
        system.is_monitored = Set(payload.is_monitored.unwrap_or(true));

        system.insert(&self.db).await
    }

    pub async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<monitored_system_model::Model>, DbErr> {
        SystemEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn find_with_filter(
        &self,
        filter: &MonitoredSystemFilterDto,
    ) -> Result<(Vec<monitored_system_model::Model>, u64), DbErr> {
        let mut conditions = Condition::all();

        if let Some(status) = &filter.status {
            conditions = conditions.add(monitored_system_model::Column::Status.eq(status.as_str()));
        }

        if let Some(system_type) = &filter.system_type {
            conditions = conditions
                .add(monitored_system_model::Column::SystemType.eq(system_type.as_str()));
        }

        if let Some(branch_id) = filter.branch_id {
            conditions = conditions.add(monitored_system_model::Column::BranchId.eq(branch_id));
        }

        if let Some(is_monitored) = filter.is_monitored {
            conditions =
                conditions.add(monitored_system_model::Column::IsMonitored.eq(is_monitored));
        }

        if let Some(search) = &filter.search {
            conditions = conditions.add(
                Condition::any()
                    .add(monitored_system_model::Column::SystemName.contains(search))
                    .add(monitored_system_model::Column::Hostname.contains(search))
                    .add(monitored_system_model::Column::IpAddress.contains(search)),
            );
        }

        let query = SystemEntity::find()
            .filter(conditions)
            .order_by(monitored_system_model::Column::LastCheck, Order::Desc);

        let total_items = query.clone().count(&self.db).await?;

        let per_page = filter.per_page.unwrap_or(20).clamp(1, 100);
        let page = filter.page.unwrap_or(1).max(1);
        let offset = (page - 1) * per_page;

        let systems = query.limit(per_page).offset(offset).all(&self.db).await?;

        Ok((systems, total_items))
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: &UpdateMonitoredSystemDto,
    ) -> Result<Option<monitored_system_model::Model>, DbErr> {
        let Some(system) = SystemEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: SystemActiveModel = system.into();

        if let Some(system_name) = &payload.system_name {
            active.system_name = Set(system_name.clone());
        }
        if let Some(system_type) = payload.system_type {
            active.system_type = Set(system_type.as_str().to_string());
        }
        if let Some(branch_id) = payload.branch_id {
            active.branch_id = Set(Some(branch_id));
        }
        if let Some(ip_address) = &payload.ip_address {
            active.ip_address = Set(Some(ip_address.clone()));
        }
        if let Some(hostname) = &payload.hostname {
            active.hostname = Set(Some(hostname.clone()));
        }
        if let Some(status) = payload.status {
            active.status = Set(status.as_str().to_string());
        }
        if let Some(cpu_usage) = payload.cpu_usage {
            active.cpu_usage = Set(Some(cpu_usage));
        }
        if let Some(memory_usage) = payload.memory_usage {
            active.memory_usage = Set(Some(memory_usage));
        }
        if let Some(disk_usage) = payload.disk_usage {
            active.disk_usage = Set(Some(disk_usage));
        }
        if let Some(network_latency_ms) = payload.network_latency_ms {
            active.network_latency_ms = Set(Some(network_latency_ms));
        }
        if let Some(notes) = &payload.notes {
            active.notes = Set(Some(notes.clone()));
        }
        if let Some(is_monitored) = payload.is_monitored {
            active.is_monitored = Set(is_monitored);
        }

        // メトリクス更新を最終チェック時刻として記録
        active.last_check = Set(Utc::now());

        let updated = active.update(&self.db).await?;
        Ok(Some(updated))
    }

    pub async fn delete_by_id(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = SystemEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}

impl Clone for MonitoredSystemRepository {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}
