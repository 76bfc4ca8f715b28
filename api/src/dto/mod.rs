//! Request and response data transfer objects

pub mod auth;
pub mod error;
pub mod user;

pub use auth::{LoginRequest, TokenResponse};
pub use error::ErrorResponse;
pub use user::{CreateUserRequest, UserResponse};
