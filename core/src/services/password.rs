//! Password hashing built on bcrypt.

use bcrypt::DEFAULT_COST;

use crate::errors::DomainError;

/// Hashes a plaintext password with a fresh salt.
///
/// The output differs between calls for the same input; only
/// [`verify_password`] can relate a plaintext to a stored hash.
pub fn hash_password(plaintext: &str) -> Result<String, DomainError> {
    bcrypt::hash(plaintext, DEFAULT_COST).map_err(|e| DomainError::Internal {
        message: format!("Password hashing failed: {}", e),
    })
}

/// Verifies a plaintext password against a stored bcrypt hash.
///
/// A malformed stored hash counts as a mismatch rather than an error.
pub fn verify_password(plaintext: &str, password_hash: &str) -> bool {
    bcrypt::verify(plaintext, password_hash).unwrap_or(false)
}
