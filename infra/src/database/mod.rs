//! Database module - SQLite implementations using SQLx

pub mod connection;
pub mod sqlite;

pub use connection::DatabasePool;
pub use sqlite::SqliteUserRepository;
