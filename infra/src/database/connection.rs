//! Database connection pool management
//!
//! Connection pooling over SQLite using SQLx. Each request acquires a
//! connection from the pool and releases it when the unit of work ends.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use pa_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Statement creating the users table. Email carries no UNIQUE constraint;
/// duplicate registrations are allowed by the schema.
const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id            INTEGER PRIMARY KEY AUTOINCREMENT,
        email         TEXT NOT NULL,
        password_hash TEXT NOT NULL,
        branch_id     INTEGER NOT NULL,
        role_id       INTEGER NOT NULL,
        full_name     TEXT NOT NULL,
        mobile_phone  TEXT NOT NULL,
        start_date    TEXT NOT NULL,
        end_date      TEXT
    )
"#;

/// SQLite connection pool wrapper
#[derive(Clone)]
pub struct DatabasePool {
    pool: SqlitePool,
}

impl DatabasePool {
    /// Create a new database connection pool
    pub async fn new(config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        tracing::info!(
            "Creating database connection pool with max_connections: {}",
            config.max_connections
        );

        let connect_options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .connect_with(connect_options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create database pool: {}", e);
                InfrastructureError::Database(e)
            })?;

        tracing::info!("Database connection pool created successfully");

        Ok(Self { pool })
    }

    /// Create the schema if it does not exist yet
    pub async fn init_schema(&self) -> Result<(), InfrastructureError> {
        sqlx::query(CREATE_USERS_TABLE).execute(&self.pool).await?;
        tracing::info!("Database schema initialized");
        Ok(())
    }

    /// Get a reference to the underlying SQLx pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Verify the database is reachable
    pub async fn health_check(&self) -> Result<(), InfrastructureError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
