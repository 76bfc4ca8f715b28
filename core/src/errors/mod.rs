//! Domain-specific error types and error handling.
//!
//! Login failures carry their user-facing message in the `#[error]` string;
//! the API layer decides which details of any other failure are exposed.

use thiserror::Error;

/// Authentication errors reported to the caller with these exact messages
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No user is registered under the submitted email
    #[error("El correo no es correcto")]
    EmailNotFound,

    /// The password did not match the stored hash
    #[error("La contraseña no es correcta")]
    InvalidPassword,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Unsupported signing algorithm: {name}")]
    UnsupportedAlgorithm { name: String },
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;
