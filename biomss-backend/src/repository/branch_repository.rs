// src/repository/branch_repository.rs
use crate::api::dto::branch_dto::{BranchFilterDto, CreateBranchDto, UpdateBranchDto};
use crate::domain::branch_model::{self, ActiveModel as BranchActiveModel, Entity as BranchEntity};
use sea_orm::{entity::*, query::*, DbConn, DbErr, Order, Set};
use uuid::Uuid;

pub struct BranchRepository {
    db: DbConn,
}

impl BranchRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn create(&self, payload: &CreateBranchDto) -> Result<branch_model::Model, DbErr> {
        let mut branch = BranchActiveModel::new();
        branch.branch_code = Set(payload.branch_code.clone());
        branch.name = Set(payload.name.clone());
        branch.branch_type = Set(payload
            .branch_type
            .unwrap_or(crate::domain::branch_model::BranchType::Sub)
            .as_str()
            .to_string());
        branch.status = Set(payload
            .status
            .unwrap_or(crate::domain::branch_model::BranchStatus::Active)
            .as_str()
            .to_string());
        branch.region = Set(payload.region.clone());
        branch.city = Set(payload.city.clone());
        branch.address = Set(payload.address.clone());
        branch.phone_number = Set(payload.phone_number.clone());
        branch.email = Set(payload.email.clone());
        branch.manager_name = Set(payload.manager_name.clone());

        branch.insert(&self.db).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<branch_model::Model>, DbErr> {
        BranchEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<branch_model::Model>, DbErr> {
        BranchEntity::find()
            .filter(branch_model::Column::BranchCode.eq(code))
            .one(&self.db)
            .await
    }

    pub async fn find_with_filter(
        &self,
        filter: &BranchFilterDto,
    ) -> Result<(Vec<branch_model::Model>, u64), DbErr> {
        let mut conditions = Condition::all();

        if let Some(status) = &filter.status {
            conditions = conditions.add(branch_model::Column::Status.eq(status.as_str()));
        }

        if let Some(branch_type) = &filter.branch_type {
            conditions = conditions.add(branch_model::Column::BranchType.eq(branch_type.as_str()));
        }

        if let Some(region) = &filter.region {
            conditions = conditions.add(branch_model::Column::Region.eq(region.clone()));
        }

        if let Some(search) = &filter.search {
            conditions = conditions.add(
                Condition::any()
                    .add(branch_model::Column::Name.contains(search))
                    .add(branch_model::Column::BranchCode.contains(search))
                    .add(branch_model::Column::City.contains(search))
                    .add(branch_model::Column::Region.contains(search)),
            );
        }

        let query = BranchEntity::find()
            .filter(conditions)
            .order_by(branch_model::Column::Name, Order::Asc);

        let total_items = query.clone().count(&self.db).await?;

        let per_page = filter.per_page.unwrap_or(20).clamp(1, 100);
        let page = filter.page.unwrap_or(1).max(1);
        let offset = (page - 1) * per_page;

        let branches = query.limit(per_page).offset(offset).all(&self.db).await?;

        Ok((branches, total_items))
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: &UpdateBranchDto,
    ) -> Result<Option<branch_model::Model>, DbErr> {
        let Some(branch) = BranchEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: BranchActiveModel = branch.into();

        if let Some(name) = &payload.name {
            active.name = Set(name.clone());
        }
        if let Some(branch_type) = payload.branch_type {
            active.branch_type = Set(branch_type.as_str().to_string());
        }
        if let Some(status) = payload.status {
            active.status = Set(status.as_str().to_string());
        }
        if let Some(region) = &payload.region {
            active.region = Set(region.clone());
        }
        if let Some(city) = &payload.city {
            active.city = Set(city.clone());
        }
        if let Some(address) = &payload.address {
            active.address = Set(address.clone());
        }
        if let Some(phone_number) = &payload.phone_number {
            active.phone_number = Set(phone_number.clone());
        }
        if let Some(email) = &payload.email {
            active.email = Set(email.clone());
        }
        if let Some(manager_name) = &payload.manager_name {
            active.manager_name = Set(Some(manager_name.clone()));
        }

        let updated = active.update(&self.db).await?;
        Ok(Some(updated))
    }

    pub async fn delete_by_id(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = BranchEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}

impl Clone for BranchRepository {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}
