//! User repository trait

use std::collections::HashMap;

use async_trait::async_trait;

use super::User;
use crate::domain::DomainError;

/// Repository trait for User persistence
#[async_trait]
pub trait UserRepository: Send + Sync + std::fmt::Debug {
    /// Insert a new user; the store assigns `id` and `created_at`.
    ///
    /// Uniqueness on `username` must hold even under concurrent inserts,
    /// so implementations back it with a storage-level constraint rather
    /// than a check-then-insert sequence.
    async fn create(&self, username: &str, password_hash: &str) -> Result<User, DomainError>;

    /// Look up a user by username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Look up a user by id
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Batch lookup keyed by id, used to enrich place listings with owner
    /// usernames without issuing one query per row
    async fn find_many_by_ids(&self, ids: &[i64]) -> Result<HashMap<i64, User>, DomainError>;

    /// Number of registered users
    async fn count(&self) -> Result<i64, DomainError>;
}

/// In-memory implementation of UserRepository for testing and development
pub mod in_memory {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    pub struct InMemoryUserRepository {
        users: Mutex<Vec<User>>,
    }

    impl InMemoryUserRepository {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl UserRepository for InMemoryUserRepository {
        async fn create(&self, username: &str, password_hash: &str) -> Result<User, DomainError> {
            // Duplicate check and insert share the lock, mirroring the
            // storage-level uniqueness constraint.
            let mut users = self.users.lock().unwrap();

            if users.iter().any(|u| u.username == username) {
                return Err(DomainError::conflict(format!(
                    "Username '{}' already exists",
                    username
                )));
            }

            let user = User {
                id: users.len() as i64 + 1,
                username: username.to_string(),
                password_hash: password_hash.to_string(),
                created_at: Utc::now(),
            };

            users.push(user.clone());
            Ok(user)
        }

        async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.username == username)
                .cloned())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.id == id)
                .cloned())
        }

        async fn find_many_by_ids(&self, ids: &[i64]) -> Result<HashMap<i64, User>, DomainError> {
            let users = self.users.lock().unwrap();

            Ok(users
                .iter()
                .filter(|u| ids.contains(&u.id))
                .map(|u| (u.id, u.clone()))
                .collect())
        }

        async fn count(&self) -> Result<i64, DomainError> {
            Ok(self.users.lock().unwrap().len() as i64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::in_memory::InMemoryUserRepository;
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_ids() {
        let repo = InMemoryUserRepository::new();

        let alice = repo.create("alice", "hash-a").await.unwrap();
        let bob = repo.create("bob", "hash-b").await.unwrap();

        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let repo = InMemoryUserRepository::new();

        repo.create("alice", "hash-a").await.unwrap();
        let err = repo.create("alice", "hash-b").await.unwrap_err();

        assert!(matches!(err, DomainError::Conflict { .. }));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_lookups() {
        let repo = InMemoryUserRepository::new();
        let alice = repo.create("alice", "hash-a").await.unwrap();

        assert_eq!(
            repo.find_by_username("alice").await.unwrap().unwrap().id,
            alice.id
        );
        assert!(repo.find_by_username("bob").await.unwrap().is_none());
        assert!(repo.find_by_id(alice.id).await.unwrap().is_some());
        assert!(repo.find_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_many_by_ids() {
        let repo = InMemoryUserRepository::new();
        let alice = repo.create("alice", "hash-a").await.unwrap();
        let bob = repo.create("bob", "hash-b").await.unwrap();
        repo.create("carol", "hash-c").await.unwrap();

        let found = repo
            .find_many_by_ids(&[alice.id, bob.id, 99])
            .await
            .unwrap();

        assert_eq!(found.len(), 2);
        assert_eq!(found[&alice.id].username, "alice");
        assert_eq!(found[&bob.id].username, "bob");
    }
}
