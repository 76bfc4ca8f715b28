//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// Default number of items returned by a list call
pub const DEFAULT_LIMIT: i64 = 100;

/// Upper bound on the number of items a single list call may return
pub const MAX_LIMIT: i64 = 1000;

/// Offset/limit pagination parameters for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Number of items to skip from the start of the scan
    #[serde(default)]
    pub offset: i64,

    /// Maximum number of items to return
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: default_limit(),
        }
    }
}

impl Pagination {
    /// Create pagination parameters with sanitized values
    pub fn new(offset: i64, limit: i64) -> Self {
        Self {
            offset: offset.max(0),
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// Offset for SQL queries
    pub fn offset(&self) -> i64 {
        self.offset.max(0)
    }

    /// Limit for SQL queries
    pub fn limit(&self) -> i64 {
        self.limit.clamp(1, MAX_LIMIT)
    }
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}
