//! Placemark - location sharing API
//!
//! Users register, log in, and share photo-tagged places; places are
//! queryable by owner and by geographic bounding box. PostgreSQL holds
//! users and places, sessions live in process memory, and photos are
//! written to local disk and served as static files.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

use api::state::AppState;
use infrastructure::auth::{SessionStore, Sha256Hasher};
use infrastructure::photo::FsPhotoStore;
use infrastructure::place::{PlaceService, PostgresPlaceRepository};
use infrastructure::storage::migrations::PostgresMigrator;
use infrastructure::user::{PostgresUserRepository, UserService};

/// Create the application state backed by PostgreSQL and local photo
/// storage, running pending migrations first
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.connect_timeout_secs))
        .connect(&config.database.url)
        .await?;

    PostgresMigrator::new(pool.clone()).run().await?;

    let photo_store = FsPhotoStore::new(&config.storage.upload_dir);
    photo_store.ensure_dir().await?;

    let user_repository = Arc::new(PostgresUserRepository::new(pool.clone()));
    let place_repository = Arc::new(PostgresPlaceRepository::new(pool));

    let user_service = Arc::new(UserService::new(
        user_repository.clone(),
        Arc::new(Sha256Hasher::new()),
    ));
    let place_service = Arc::new(PlaceService::new(
        place_repository,
        user_repository,
        Arc::new(photo_store),
    ));

    Ok(AppState {
        user_service,
        place_service,
        sessions: Arc::new(SessionStore::new()),
        photo_public_prefix: config.storage.public_prefix.clone(),
    })
}
