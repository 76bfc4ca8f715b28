//! Shared utilities and common types for the Personal API backend
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types
//! - Common type definitions (pagination)

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, JwtConfig, ServerConfig};
pub use types::Pagination;
