// src/repository/atm_repository.rs
use crate::api::dto::atm_dto::{AtmFilterDto, CreateAtmDto, UpdateAtmDto};
use crate::domain::atm_model::{self, ActiveModel as AtmActiveModel, Entity as AtmEntity};
use sea_orm::{entity::*, query::*, DbConn, DbErr, Order, Set};
use uuid::Uuid;

// 現金残量の警告しきい値（GHS）
pub const CASH_LOW_THRESHOLD: i32 = 20000;

pub struct AtmRepository {
    db: DbConn,
}

impl AtmRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn create(&self, payload: &CreateAtmDto) -> Result<atm_model::Model, DbErr> {
        let mut atm = AtmActiveModel::new();
        atm.atm_code = Set(payload.atm_code.clone());
        atm.branch_id = Set(payload.branch_id);
        atm.location_description = Set(payload.location_description.clone());
        atm.model = Set(payload.model.clone());
        atm.manufacturer = Set(payload.manufacturer.clone());
        atm.serial_number = Set(payload.serial_number.clone());
        atm.ip_address = Set(payload.ip_address.clone());
        atm.status = Set(payload
            .status
            .unwrap_or(crate::domain::atm_model::AtmStatus::Online)
            .as_str()
            .to_string());
        atm.cash_level = Set(payload.cash_level.unwrap_or(0));
        atm.max_cash_capacity = Set(payload.max_cash_capacity.unwrap_or(100000));
        atm.installation_date = Set(payload.installation_date);
        atm.is_active = Set(payload.is_active.unwrap_or(true));

        atm.insert(&self.db).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<atm_model::Model>, DbErr> {
        AtmEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn find_with_filter(
        &self,
        filter: &AtmFilterDto,
    ) -> Result<(Vec<atm_model::Model>, u64), DbErr> {
        let mut conditions = Condition::all();

        if let Some(status) = &filter.status {
            conditions = conditions.add(atm_model::Column::Status.eq(status.as_str()));
        }

        if let Some(branch_id) = filter.branch_id {
            conditions = conditions.add(atm_model::Column::BranchId.eq(branch_id));
        }

        if let Some(is_active) = filter.is_active {
            conditions = conditions.add(atm_model::Column::IsActive.eq(is_active));
        }

        // 現金残量の少ないATMだけに絞り込む
        if filter.cash_low.unwrap_or(false) {
            conditions = conditions.add(atm_model::Column::CashLevel.lt(CASH_LOW_THRESHOLD));
        }

        if let Some(search) = &filter.search {
            conditions = conditions.add(
                Condition::any()
                    .add(atm_model::Column::AtmCode.contains(search))
                    .add(atm_model::Column::LocationDescription.contains(search))
                    .add(atm_model::Column::SerialNumber.contains(search)),
            );
        }

        let query = AtmEntity::find()
            .filter(conditions)
            .order_by(atm_model::Column::UpdatedAt, Order::Desc);

        let total_items = query.clone().count(&self.db).await?;

        let per_page = filter.per_page.unwrap_or(20).clamp(1, 100);
        let page = filter.page.unwrap_or(1).max(1);
        let offset = (page - 1) * per_page;

        let atms = query.limit(per_page).offset(offset).all(&self.db).await?;

        Ok((atms, total_items))
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: &UpdateAtmDto,
    ) -> Result<Option<atm_model::Model>, DbErr> {
        let Some(atm) = AtmEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: AtmActiveModel = atm.into();

        if let Some(branch_id) = payload.branch_id {
            active.branch_id = Set(branch_id);
        }
        if let Some(location_description) = &payload.location_description {
            active.location_description = Set(location_description.clone());
        }
        if let Some(model) = &payload.model {
            active.model = Set(model.clone());
        }
        if let Some(manufacturer) = &payload.manufacturer {
            active.manufacturer = Set(manufacturer.clone());
        }
        if let Some(ip_address) = &payload.ip_address {
            active.ip_address = Set(ip_address.clone());
        }
        if let Some(status) = payload.status {
            active.status = Set(status.as_str().to_string());
        }
        if let Some(cash_level) = payload.cash_level {
            active.cash_level = Set(cash_level);
        }
        if let Some(max_cash_capacity) = payload.max_cash_capacity {
            active.max_cash_capacity = Set(max_cash_capacity);
        }
        if let Some(is_active) = payload.is_active {
            active.is_active = Set(is_active);
        }

        let updated = active.update(&self.db).await?;
        Ok(Some(updated))
    }

    pub async fn delete_by_id(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = AtmEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }

    pub async fn count_by_status(&self, status: &str) -> Result<u64, DbErr> {
        AtmEntity::find()
            .filter(atm_model::Column::Status.eq(status))
            .count(&self.db)
            .await
    }
}

impl Clone for AtmRepository {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}
