//! SQLite implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{Row, SqlitePool};

use pa_core::domain::entities::user::{NewUser, User};
use pa_core::errors::DomainError;
use pa_core::repositories::UserRepository;
use pa_shared::types::Pagination;

const USER_COLUMNS: &str = "id, email, password_hash, branch_id, role_id, \
                            full_name, mobile_phone, start_date, end_date";

/// SQLite implementation of UserRepository
pub struct SqliteUserRepository {
    /// Database connection pool
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new SQLite user repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> Result<User, DomainError> {
        Ok(User {
            id: row
                .try_get("id")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get id: {}", e),
                })?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get email: {}", e),
                })?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get password_hash: {}", e),
                })?,
            branch_id: row
                .try_get("branch_id")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get branch_id: {}", e),
                })?,
            role_id: row
                .try_get("role_id")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get role_id: {}", e),
                })?,
            full_name: row
                .try_get("full_name")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get full_name: {}", e),
                })?,
            mobile_phone: row
                .try_get("mobile_phone")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get mobile_phone: {}", e),
                })?,
            start_date: row
                .try_get::<NaiveDate, _>("start_date")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get start_date: {}", e),
                })?,
            end_date: row
                .try_get::<Option<NaiveDate>, _>("end_date")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get end_date: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let query = format!(
            "SELECT {} FROM users WHERE id = ? LIMIT 1",
            USER_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        // No uniqueness constraint on email; the lowest id wins
        let query = format!(
            "SELECT {} FROM users WHERE email = ? ORDER BY id LIMIT 1",
            USER_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn list(&self, pagination: Pagination) -> Result<Vec<User>, DomainError> {
        let query = format!(
            "SELECT {} FROM users ORDER BY id LIMIT ? OFFSET ?",
            USER_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn create(&self, new_user: NewUser) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                email, password_hash, branch_id, role_id,
                full_name, mobile_phone, start_date, end_date
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&new_user.email)
            .bind(&new_user.password_hash)
            .bind(new_user.branch_id)
            .bind(new_user.role_id)
            .bind(&new_user.full_name)
            .bind(&new_user.mobile_phone)
            .bind(new_user.start_date)
            .bind(new_user.end_date)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to create user: {}", e),
            })?;

        Ok(new_user.into_user(result.last_insert_rowid()))
    }
}
