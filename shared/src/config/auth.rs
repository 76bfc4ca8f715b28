//! JWT signing configuration

use serde::{Deserialize, Serialize};

/// Built-in development secret, matching the historical default.
const DEFAULT_SECRET_KEY: &str = "f25c25a441c2c51d7c1b6c85d1b7c3f5a0f2b3e4d5c6b7a8";

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key used to sign tokens
    pub secret_key: String,

    /// Signing algorithm identifier (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Access token lifetime in minutes (default: 1440 = 24 hours)
    #[serde(default = "default_duration_minutes")]
    pub access_token_duration_minutes: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret_key: String::from(DEFAULT_SECRET_KEY),
            algorithm: default_algorithm(),
            access_token_duration_minutes: default_duration_minutes(),
        }
    }
}

impl JwtConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret_key =
            std::env::var("SECRET_KEY").unwrap_or_else(|_| DEFAULT_SECRET_KEY.to_string());
        let algorithm = std::env::var("ALGORITHM").unwrap_or_else(|_| default_algorithm());
        let access_token_duration_minutes = std::env::var("ACCESS_TOKEN_DURATION_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_duration_minutes);

        Self {
            secret_key,
            algorithm,
            access_token_duration_minutes,
        }
    }

    /// Create a new JWT configuration with a secret
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            ..Default::default()
        }
    }

    /// Set the access token lifetime in minutes
    pub fn with_duration_minutes(mut self, minutes: i64) -> Self {
        self.access_token_duration_minutes = minutes;
        self
    }

    /// Check if using the built-in secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}

fn default_duration_minutes() -> i64 {
    1440
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.algorithm, "HS256");
        assert_eq!(config.access_token_duration_minutes, 1440);
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("my-secret").with_duration_minutes(30);

        assert_eq!(config.access_token_duration_minutes, 30);
        assert!(!config.is_using_default_secret());
    }
}
