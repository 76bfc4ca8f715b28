//! # Infrastructure Layer
//!
//! Concrete persistence implementations for the Personal API backend:
//! the SQLite connection pool and the SQLite-backed user repository.

pub mod database;

use thiserror::Error;

/// Errors raised while setting up infrastructure services
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
