//! Mock implementation of UserRepository for testing

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use pa_shared::types::Pagination;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// In-memory user repository for testing
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
    next_id: AtomicI64,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        // Lowest id wins when duplicates exist, matching the SQL ORDER BY
        Ok(users
            .values()
            .filter(|u| u.email == email)
            .min_by_key(|u| u.id)
            .cloned())
    }

    async fn list(&self, pagination: Pagination) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by_key(|u| u.id);
        Ok(all
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit() as usize)
            .collect())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, DomainError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = new_user.into_user(id);

        let mut users = self.users.write().await;
        users.insert(id, user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            password_hash: "$2b$12$hash".to_string(),
            branch_id: 1,
            role_id: 1,
            full_name: "Test User".to_string(),
            mobile_phone: "600000000".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = MockUserRepository::new();

        let first = repo.create(new_user("a@b.com")).await.unwrap();
        let second = repo.create(new_user("c@d.com")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_find_by_email_returns_first_match() {
        let repo = MockUserRepository::new();

        // Duplicate emails are allowed; lookup returns the lowest id
        let first = repo.create(new_user("dup@b.com")).await.unwrap();
        repo.create(new_user("dup@b.com")).await.unwrap();

        let found = repo.find_by_email("dup@b.com").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let repo = MockUserRepository::new();
        assert!(repo.find_by_id(99).await.unwrap().is_none());
        assert!(repo.find_by_email("nouser@b.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_paginates_across_150_users() {
        let repo = MockUserRepository::new();
        for i in 0..150 {
            repo.create(new_user(&format!("user{}@b.com", i)))
                .await
                .unwrap();
        }

        let first_page = repo.list(Pagination::new(0, 100)).await.unwrap();
        let second_page = repo.list(Pagination::new(100, 100)).await.unwrap();

        assert_eq!(first_page.len(), 100);
        assert_eq!(second_page.len(), 50);
        assert_eq!(first_page[0].id, 1);
        assert_eq!(second_page[0].id, 101);
    }
}
