//! Business services

pub mod auth;
pub mod password;
pub mod token;
pub mod user;

pub use auth::AuthService;
pub use token::TokenService;
pub use user::UserService;
