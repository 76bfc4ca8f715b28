//! User management service

mod service;

pub use service::UserService;
