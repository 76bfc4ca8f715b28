//! Main authentication service implementation

use std::sync::Arc;

use tracing::debug;

use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainError};
use crate::repositories::UserRepository;
use crate::services::password;
use crate::services::token::TokenService;

/// Authentication service for the login flow
///
/// Login is a single stateless attempt: look the user up by email, verify
/// the submitted password against the stored hash, and issue a signed
/// bearer token. Nothing is persisted.
pub struct AuthService<R: UserRepository> {
    /// User repository for credential lookup
    user_repository: Arc<R>,
    /// Token service for issuing access tokens
    token_service: Arc<TokenService>,
}

impl<R: UserRepository> AuthService<R> {
    /// Create a new authentication service
    pub fn new(user_repository: Arc<R>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Authenticates a username/password pair and issues a bearer token
    ///
    /// # Errors
    ///
    /// * `AuthError::EmailNotFound` - no user registered under the email
    /// * `AuthError::InvalidPassword` - password does not match the hash
    /// * Any other `DomainError` - storage or token issuance fault
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthResponse, DomainError> {
        debug!("Login attempt for {}", username);

        let user = self
            .user_repository
            .find_by_email(username)
            .await?
            .ok_or(AuthError::EmailNotFound)?;

        if !password::verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidPassword.into());
        }

        debug!("Password verified for {}", username);

        let access_token = self.token_service.issue(&user.email)?;
        Ok(AuthResponse::bearer(access_token))
    }
}
