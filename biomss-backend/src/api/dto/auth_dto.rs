// src/api/dto/auth_dto.rs
use crate::api::dto::user_dto::UserDto;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct SigninDto {
    #[validate(length(min = 1, message = "Username or email is required"))]
    pub identifier: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SigninResponseDto {
    pub access_token: String,
    pub token_type: String,
    pub user: UserDto,
}
