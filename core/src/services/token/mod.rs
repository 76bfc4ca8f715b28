//! JWT token issuance and verification

mod config;
mod service;

pub use config::TokenConfig;
pub use service::TokenService;
