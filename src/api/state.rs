//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::auth::SessionStore;
use crate::infrastructure::place::PlaceService;
use crate::infrastructure::user::UserService;

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub place_service: Arc<PlaceService>,
    pub sessions: Arc<SessionStore>,
    /// Public URL prefix stored photos are served from
    pub photo_public_prefix: String,
}

#[cfg(test)]
impl AppState {
    /// State wired to in-memory implementations for handler tests
    pub(crate) fn for_tests() -> Self {
        use crate::domain::place::InMemoryPlaceRepository;
        use crate::domain::user::{InMemoryUserRepository, UserRepository};
        use crate::infrastructure::auth::Sha256Hasher;
        use crate::infrastructure::photo::InMemoryPhotoStore;

        let user_repository: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());

        let user_service = Arc::new(UserService::new(
            user_repository.clone(),
            Arc::new(Sha256Hasher::new()),
        ));
        let place_service = Arc::new(PlaceService::new(
            Arc::new(InMemoryPlaceRepository::new()),
            user_repository,
            Arc::new(InMemoryPhotoStore::new()),
        ));

        Self {
            user_service,
            place_service,
            sessions: Arc::new(SessionStore::new()),
            photo_public_prefix: "/static".to_string(),
        }
    }
}
