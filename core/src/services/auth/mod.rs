//! Authentication service: the login flow

mod service;

pub use service::AuthService;
