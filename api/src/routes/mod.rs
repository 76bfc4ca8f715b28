//! Route handlers and shared application state

pub mod auth;
pub mod users;

use std::sync::Arc;

use pa_core::repositories::UserRepository;
use pa_core::services::{AuthService, UserService};

/// Application state holding the shared services
pub struct AppState<R: UserRepository> {
    pub auth_service: Arc<AuthService<R>>,
    pub user_service: Arc<UserService<R>>,
}
