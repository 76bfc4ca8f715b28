//! User repository trait defining the interface for user data persistence.
//!
//! The trait is async-first and keeps the abstraction boundary between the
//! domain and infrastructure layers: implementations own the actual storage
//! access.

use async_trait::async_trait;

use pa_shared::types::Pagination;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their store-assigned identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given id
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Find a user by their email address
    ///
    /// Email uniqueness is not enforced at this layer; when duplicates
    /// exist, the row with the lowest id is returned.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// List users ordered by id, applying offset/limit pagination
    async fn list(&self, pagination: Pagination) -> Result<Vec<User>, DomainError>;

    /// Persist a new user row and return the stored entity, including the
    /// generated identifier. No duplicate-email check is performed; a
    /// storage constraint violation surfaces as `DomainError::Database`.
    async fn create(&self, new_user: NewUser) -> Result<User, DomainError>;
}
