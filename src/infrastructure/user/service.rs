//! User service for registration and authentication

use std::sync::Arc;

use crate::domain::user::{validate_password, validate_username, User, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::auth::PasswordHasher;

/// User service composing the repository with the password hasher
#[derive(Debug)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    /// Register a new user
    ///
    /// Uniqueness is enforced by the repository's storage constraint, so
    /// two concurrent registrations of the same name cannot both succeed.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, DomainError> {
        validate_username(username).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_password(password).map_err(|e| DomainError::validation(e.to_string()))?;

        let password_hash = self.hasher.hash(password);
        self.repository.create(username, &password_hash).await
    }

    /// Authenticate with username and password. An unknown username and a
    /// wrong password are indistinguishable to the caller.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, DomainError> {
        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or(DomainError::InvalidCredentials)?;

        if !self.hasher.verify(password, &user.password_hash) {
            return Err(DomainError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Get a user by id
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        self.repository.find_by_id(id).await
    }

    /// Number of registered users
    pub async fn count(&self) -> Result<i64, DomainError> {
        self.repository.count().await
    }
}
