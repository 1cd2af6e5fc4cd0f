// src/repository/pos_terminal_repository.rs
use crate::api::dto::pos_terminal_dto::{
    CreatePosTerminalDto, PosTerminalFilterDto, UpdatePosTerminalDto,
};
use crate::domain::pos_terminal_model::{
    self, ActiveModel as PosActiveModel, Entity as PosEntity,
};
use sea_orm::{entity::*, query::*, DbConn, DbErr, Order, Set};
use uuid::Uuid;

pub struct PosTerminalRepository {
    db: DbConn,
}

impl PosTerminalRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        payload: &CreatePosTerminalDto,
    ) -> Result<pos_terminal_model::Model, DbErr> {
        let mut pos = PosActiveModel::new();
        pos.terminal_id = Set(payload.terminal_id.clone());
        pos.merchant_name = Set(payload.merchant_name.clone());
        pos.merchant_code = Set(payload.merchant_code.clone());
        pos.branch_id = Set(payload.branch_id);
        pos.location = Set(payload.location.clone());
        pos.model = Set(payload.model.clone());
        pos.serial_number = Set(payload.serial_number.clone());
        pos.status = Set(payload
            .status
            .unwrap_or(crate::domain::pos_terminal_model::PosTerminalStatus::Active)
            .as_str()
            .to_string());
        pos.deployment_date = Set(payload.deployment_date);
        pos.is_active = Set(payload.is_active.unwrap_or(true));

        pos.insert(&self.db).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<pos_terminal_model::Model>, DbErr> {
        PosEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn find_with_filter(
        &self,
        filter: &PosTerminalFilterDto,
    ) -> Result<(Vec<pos_terminal_model::Model>, u64), DbErr> {
        let mut conditions = Condition::all();

        if let Some(status) = &filter.status {
            conditions = conditions.add(pos_terminal_model::Column::Status.eq(status.as_str()));
        }

        if let Some(branch_id) = filter.branch_id {
            conditions = conditions.add(pos_terminal_model::Column::BranchId.eq(branch_id));
        }

        if let Some(is_active) = filter.is_active {
            conditions = conditions.add(pos_terminal_model::Column::IsActive.eq(is_active));
        }

        if let Some(search) = &filter.search {
            conditions = conditions.add(
                Condition::any()
                    .add(pos_terminal_model::Column::TerminalId.contains(search))
                    .add(pos_terminal_model::Column::MerchantName.contains(search))
                    .add(pos_terminal_model::Column::MerchantCode.contains(search)),
            );
        }

        let query = PosEntity::find()
            .filter(conditions)
            .order_by(pos_terminal_model::Column::UpdatedAt, Order::Desc);

        let total_items = query.clone().count(&self.db).await?;

        let per_page = filter.per_page.unwrap_or(20).clamp(1, 100);
        let page = filter.page.unwrap_or(1).max(1);
        let offset = (page - 1) * per_page;

        let terminals = query.limit(per_page).offset(offset).all(&self.db).await?;

        Ok((terminals, total_items))
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: &UpdatePosTerminalDto,
    ) -> Result<Option<pos_terminal_model::Model>, DbErr> {
        let Some(pos) = PosEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: PosActiveModel = pos.into();

        if let Some(merchant_name) = &payload.merchant_name {
            active.merchant_name = Set(merchant_name.clone());
        }
        if let Some(merchant_code) = &payload.merchant_code {
            active.merchant_code = Set(merchant_code.clone());
        }
        if let Some(branch_id) = payload.branch_id {
            active.branch_id = Set(Some(branch_id));
        }
        if let Some(location) = &payload.location {
            active.location = Set(location.clone());
        }
        if let Some(model) = &payload.model {
            active.model = Set(model.clone());
        }
        if let Some(status) = payload.status {
            active.status = Set(status.as_str().to_string());
        }
        if let Some(is_active) = payload.is_active {
            active.is_active = Set(is_active);
        }

        let updated = active.update(&self.db).await?;
        Ok(Some(updated))
    }

    pub async fn delete_by_id(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = PosEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}

impl Clone for PosTerminalRepository {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}
