//! User entity representing a staff member record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A persisted staff member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier
    pub id: i64,

    /// Email address, used as the login identifier
    pub email: String,

    /// bcrypt hash of the password. Never the plaintext.
    pub password_hash: String,

    /// Branch the staff member belongs to
    pub branch_id: i64,

    /// Role identifier
    pub role_id: i64,

    /// Display name
    pub full_name: String,

    /// Mobile phone number
    pub mobile_phone: String,

    /// Date the staff member joined
    pub start_date: NaiveDate,

    /// Date the staff member left, if they have
    pub end_date: Option<NaiveDate>,
}

impl User {
    /// Checks whether the staff member is still active
    pub fn is_active(&self) -> bool {
        self.end_date.is_none()
    }
}

/// Creation payload as submitted by a caller. `password` is the plaintext
/// secret; it is hashed exactly once before anything is persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
    pub branch_id: i64,
    pub role_id: i64,
    pub full_name: String,
    pub mobile_phone: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl CreateUser {
    /// Turns the payload into a row ready for insertion, replacing the
    /// plaintext password with its hash.
    pub fn into_record(self, password_hash: String) -> NewUser {
        NewUser {
            email: self.email,
            password_hash,
            branch_id: self.branch_id,
            role_id: self.role_id,
            full_name: self.full_name,
            mobile_phone: self.mobile_phone,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

/// Row ready for insertion: the password is already hashed and the
/// identifier is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub branch_id: i64,
    pub role_id: i64,
    pub full_name: String,
    pub mobile_phone: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl NewUser {
    /// Builds the persisted entity once the store has assigned an id
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            email: self.email,
            password_hash: self.password_hash,
            branch_id: self.branch_id,
            role_id: self.role_id,
            full_name: self.full_name,
            mobile_phone: self.mobile_phone,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_create_user() -> CreateUser {
        CreateUser {
            email: "a@b.com".to_string(),
            password: "secret123".to_string(),
            branch_id: 1,
            role_id: 2,
            full_name: "Ana Beltrán".to_string(),
            mobile_phone: "600111222".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            end_date: None,
        }
    }

    #[test]
    fn test_into_record_replaces_password_with_hash() {
        let record = sample_create_user().into_record("$2b$12$hash".to_string());

        assert_eq!(record.password_hash, "$2b$12$hash");
        assert_eq!(record.email, "a@b.com");
        assert_eq!(record.branch_id, 1);
    }

    #[test]
    fn test_into_user_carries_fields_through() {
        let user = sample_create_user()
            .into_record("$2b$12$hash".to_string())
            .into_user(42);

        assert_eq!(user.id, 42);
        assert_eq!(user.full_name, "Ana Beltrán");
        assert!(user.is_active());
    }

    #[test]
    fn test_user_with_end_date_is_inactive() {
        let mut create = sample_create_user();
        create.end_date = NaiveDate::from_ymd_opt(2025, 6, 30);

        let user = create.into_record("hash".to_string()).into_user(1);
        assert!(!user.is_active());
    }
}
