//! Authentication response value object.

use serde::{Deserialize, Serialize};

/// Response returned after a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed JWT access token
    pub access_token: String,

    /// Token scheme, always `bearer`
    pub token_type: String,
}

impl AuthResponse {
    /// Creates a bearer-token response
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: String::from("bearer"),
        }
    }
}
