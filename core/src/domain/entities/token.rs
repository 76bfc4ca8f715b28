//! Claims payload for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's email
    pub sub: String,

    /// Expiration timestamp (unix seconds)
    pub exp: i64,
}

impl Claims {
    /// Creates claims for an access token expiring `lifetime_minutes`
    /// from now
    pub fn new(subject: impl Into<String>, lifetime_minutes: i64) -> Self {
        let expiry = Utc::now() + Duration::minutes(lifetime_minutes);
        Self {
            sub: subject.into(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_expiry_is_issue_time_plus_lifetime() {
        let before = Utc::now().timestamp();
        let claims = Claims::new("a@b.com", 60);
        let after = Utc::now().timestamp();

        assert_eq!(claims.sub, "a@b.com");
        assert!(claims.exp >= before + 3600);
        assert!(claims.exp <= after + 3600);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_in_the_past_are_expired() {
        let claims = Claims::new("a@b.com", -5);
        assert!(claims.is_expired());
    }
}
