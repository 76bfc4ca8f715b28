//! Token service configuration

use std::str::FromStr;

use jsonwebtoken::Algorithm;

use pa_shared::config::JwtConfig;

use crate::errors::{DomainError, TokenError};

/// Resolved token signing configuration
///
/// Only symmetric (HMAC) algorithms are supported, since the signing
/// material is a shared secret.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Secret used for signing and verification
    pub secret_key: String,

    /// Parsed signing algorithm
    pub algorithm: Algorithm,

    /// Access token lifetime in minutes
    pub duration_minutes: i64,
}

impl TokenConfig {
    /// Resolve the raw [`JwtConfig`] into a validated configuration
    pub fn from_jwt_config(config: &JwtConfig) -> Result<Self, DomainError> {
        let algorithm = Algorithm::from_str(&config.algorithm).map_err(|_| {
            DomainError::Token(TokenError::UnsupportedAlgorithm {
                name: config.algorithm.clone(),
            })
        })?;

        if !matches!(
            algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(DomainError::Token(TokenError::UnsupportedAlgorithm {
                name: config.algorithm.clone(),
            }));
        }

        Ok(Self {
            secret_key: config.secret_key.clone(),
            algorithm,
            duration_minutes: config.access_token_duration_minutes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_resolves_to_hs256() {
        let config = TokenConfig::from_jwt_config(&JwtConfig::default()).unwrap();
        assert_eq!(config.algorithm, Algorithm::HS256);
        assert_eq!(config.duration_minutes, 1440);
    }

    #[test]
    fn test_asymmetric_algorithm_is_rejected() {
        let mut jwt = JwtConfig::default();
        jwt.algorithm = "RS256".to_string();

        let result = TokenConfig::from_jwt_config(&jwt);
        assert!(matches!(
            result,
            Err(DomainError::Token(TokenError::UnsupportedAlgorithm { .. }))
        ));
    }

    #[test]
    fn test_unknown_algorithm_is_rejected() {
        let mut jwt = JwtConfig::default();
        jwt.algorithm = "none".to_string();

        assert!(TokenConfig::from_jwt_config(&jwt).is_err());
    }
}
