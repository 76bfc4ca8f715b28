//! Error response DTO

use serde::{Deserialize, Serialize};

/// Error body in the `{"detail": "<message>"}` shape clients expect
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
