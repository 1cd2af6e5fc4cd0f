// src/repository/user_repository.rs
use crate::api::dto::user_dto::{CreateUserDto, UpdateUserDto, UserFilterDto};
use crate::domain::user_model::{self, ActiveModel as UserActiveModel, Entity as UserEntity};
use sea_orm::{entity::*, query::*, DbConn, DbErr, Order, Set};
use uuid::Uuid;

pub struct UserRepository {
    db: DbConn,
}

impl UserRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        payload: &CreateUserDto,
        password_hash: String,
    ) -> Result<user_model::Model, DbErr> {
        let mut user = UserActiveModel::new();
        user.username = Set(payload.username.clone());
        user.email = Set(payload.email.clone());
        user.password_hash = Set(password_hash);
        user.first_name = Set(payload.first_name.clone());
        user.last_name = Set(payload.last_name.clone());
        user.role = Set(payload.role.as_str().to_string());
        user.employee_id = Set(payload.employee_id.clone());
        user.department = Set(payload.department.clone());
        user.phone_number = Set(payload.phone_number.clone());
        user.branch_id = Set(payload.branch_id);
        user.is_active_staff = Set(payload.is_active_staff.unwrap_or(true));

        user.insert(&self.db).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<user_model::Model>, DbErr> {
        UserEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<user_model::Model>, DbErr> {
        UserEntity::find()
            .filter(user_model::Column::Username.eq(username))
            .one(&self.db)
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<user_model::Model>, DbErr> {
        UserEntity::find()
            .filter(user_model::Column::Email.eq(email))
            .one(&self.db)
            .await
    }

    pub async fn find_with_filter(
        &self,
        filter: &UserFilterDto,
    ) -> Result<(Vec<user_model::Model>, u64), DbErr> {
        let mut conditions = Condition::all();

        if let Some(role) = &filter.role {
            conditions = conditions.add(user_model::Column::Role.eq(role.as_str()));
        }

        if let Some(branch_id) = filter.branch_id {
            conditions = conditions.add(user_model::Column::BranchId.eq(branch_id));
        }

        if let Some(is_active) = filter.is_active_staff {
            conditions = conditions.add(user_model::Column::IsActiveStaff.eq(is_active));
        }

        if let Some(search) = &filter.search {
            conditions = conditions.add(
                Condition::any()
                    .add(user_model::Column::Username.contains(search))
                    .add(user_model::Column::Email.contains(search))
                    .add(user_model::Column::FirstName.contains(search))
                    .add(user_model::Column::LastName.contains(search))
                    .add(user_model::Column::EmployeeId.contains(search)),
            );
        }

        let query = UserEntity::find()
            .filter(conditions)
            .order_by(user_model::Column::CreatedAt, Order::Desc);

        let total_items = query.clone().count(&self.db).await?;

        let per_page = filter.per_page.unwrap_or(20).clamp(1, 100);
        let page = filter.page.unwrap_or(1).max(1);
        let offset = (page - 1) * per_page;

        let users = query.limit(per_page).offset(offset).all(&self.db).await?;

        Ok((users, total_items))
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: &UpdateUserDto,
    ) -> Result<Option<user_model::Model>, DbErr> {
        let Some(user) = UserEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: UserActiveModel = user.into();

        if let Some(email) = &payload.email {
            active.email = Set(email.clone());
        }
        if let Some(first_name) = &payload.first_name {
            active.first_name = Set(Some(first_name.clone()));
        }
        if let Some(last_name) = &payload.last_name {
            active.last_name = Set(Some(last_name.clone()));
        }
        if let Some(role) = &payload.role {
            active.role = Set(role.as_str().to_string());
        }
        if let Some(employee_id) = &payload.employee_id {
            active.employee_id = Set(Some(employee_id.clone()));
        }
        if let Some(department) = &payload.department {
            active.department = Set(Some(department.clone()));
        }
        if let Some(phone_number) = &payload.phone_number {
            active.phone_number = Set(Some(phone_number.clone()));
        }
        if let Some(branch_id) = payload.branch_id {
            active.branch_id = Set(Some(branch_id));
        }
        if let Some(is_active) = payload.is_active_staff {
            active.is_active_staff = Set(is_active);
        }

        let updated = active.update(&self.db).await?;
        Ok(Some(updated))
    }

    pub async fn delete_by_id(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = UserEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}

impl Clone for UserRepository {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}
