//! User entity

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A registered account
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Store-assigned identifier
    pub id: i64,
    /// Unique login name, 1-50 characters
    pub username: String,
    /// 64-char lowercase hex SHA-256 digest - never exposed in serialization
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Set once at creation, never mutated
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            password_hash: "a".repeat(64),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"username\":\"alice\""));
        assert!(!json.contains("password_hash"));
    }
}
