//! User management DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use pa_core::domain::entities::user::{CreateUser, User};

/// Payload for creating a staff member. The password travels in plaintext
/// here and is hashed before anything is persisted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    pub branch_id: i64,
    pub role_id: i64,
    #[validate(length(min = 1, max = 120))]
    pub full_name: String,
    pub mobile_phone: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(request: CreateUserRequest) -> Self {
        CreateUser {
            email: request.email,
            password: request.password,
            branch_id: request.branch_id,
            role_id: request.role_id,
            full_name: request.full_name,
            mobile_phone: request.mobile_phone,
            start_date: request.start_date,
            end_date: request.end_date,
        }
    }
}

/// User representation returned to clients. The password hash is never
/// serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub branch_id: i64,
    pub role_id: i64,
    pub full_name: String,
    pub mobile_phone: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            branch_id: user.branch_id,
            role_id: user.role_id,
            full_name: user.full_name,
            mobile_phone: user.mobile_phone,
            start_date: user.start_date,
            end_date: user.end_date,
        }
    }
}
