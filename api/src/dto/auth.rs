//! Authentication DTOs

use serde::{Deserialize, Serialize};

use pa_core::domain::value_objects::AuthResponse;

/// Login form, OAuth2 password-grant shaped. Only these two fields are
/// used; `username` is expected to be an email address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl From<AuthResponse> for TokenResponse {
    fn from(response: AuthResponse) -> Self {
        Self {
            access_token: response.access_token,
            token_type: response.token_type,
        }
    }
}
