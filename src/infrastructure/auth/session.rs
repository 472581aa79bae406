//! In-memory session store
//!
//! Process-wide mapping from opaque token to user id. Sessions live for
//! the lifetime of the process and are lost on restart.

use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

/// Shared session map guarded by a mutex; safe to call from any request
/// handler. Tokens are UUIDv4: unguessable and collision-resistant.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, i64>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session for the user and return its opaque token
    pub fn create(&self, user_id: i64) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions.lock().unwrap().insert(token.clone(), user_id);
        token
    }

    /// Resolve a token to the user id it was created for
    pub fn resolve(&self, token: &str) -> Option<i64> {
        self.sessions.lock().unwrap().get(token).copied()
    }

    /// Remove a session. Unknown tokens are ignored.
    pub fn delete(&self, token: &str) {
        self.sessions.lock().unwrap().remove(token);
    }

    /// Number of live sessions, reported by the health endpoint
    pub fn active_count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_create_and_resolve() {
        let store = SessionStore::new();

        let token = store.create(7);
        assert_eq!(store.resolve(&token), Some(7));
        assert_eq!(store.active_count(), 1);
    }

    #[test]
    fn test_unknown_token_resolves_to_none() {
        let store = SessionStore::new();
        assert_eq!(store.resolve("no-such-token"), None);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let store = SessionStore::new();
        let token = store.create(7);

        store.delete(&token);
        assert_eq!(store.resolve(&token), None);

        // Deleting again is a no-op
        store.delete(&token);
        assert_eq!(store.active_count(), 0);
    }

    #[test]
    fn test_tokens_are_unique_per_session() {
        let store = SessionStore::new();

        let first = store.create(1);
        let second = store.create(1);

        assert_ne!(first, second);
        assert_eq!(store.active_count(), 2);
    }

    #[test]
    fn test_concurrent_access() {
        let store = Arc::new(SessionStore::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        let token = store.create(i);
                        assert_eq!(store.resolve(&token), Some(i));
                        store.delete(&token);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.active_count(), 0);
    }
}
