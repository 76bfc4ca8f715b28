//! User management: creation and lookup glue over the repository

use std::sync::Arc;

use pa_shared::types::Pagination;

use crate::domain::entities::user::{CreateUser, User};
use crate::errors::DomainError;
use crate::repositories::UserRepository;
use crate::services::password;

/// Service for managing user records
pub struct UserService<R: UserRepository> {
    user_repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(user_repository: Arc<R>) -> Self {
        Self { user_repository }
    }

    /// Creates a new user, hashing the submitted password exactly once
    ///
    /// No duplicate-email check is performed; whether duplicates are
    /// rejected is up to the storage schema.
    pub async fn create(&self, input: CreateUser) -> Result<User, DomainError> {
        let password_hash = password::hash_password(&input.password)?;
        let record = input.into_record(password_hash);
        self.user_repository.create(record).await
    }

    /// Point lookup by identifier
    pub async fn get(&self, id: i64) -> Result<User, DomainError> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: format!("User {}", id),
            })
    }

    /// Paginated scan of user records, ordered by id
    pub async fn list(&self, pagination: Pagination) -> Result<Vec<User>, DomainError> {
        self.user_repository.list(pagination).await
    }
}
