//! Health endpoint
//!
//! This endpoint never fails: storage errors degrade the report to zeroed
//! counters instead of propagating.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::warn;

use super::state::AppState;
use crate::domain::DomainError;

/// Overall service status
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// Backing store connectivity
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
    Connected,
    Disconnected,
}

/// Health report with entity counters
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub database: DatabaseStatus,
    pub users_count: i64,
    pub places_count: i64,
    pub active_sessions: usize,
    pub version: String,
}

/// Best-effort connectivity probe
///
/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let version = env!("CARGO_PKG_VERSION").to_string();

    let counts = async {
        let users = state.user_service.count().await?;
        let places = state.place_service.count().await?;
        Ok::<_, DomainError>((users, places))
    }
    .await;

    let response = match counts {
        Ok((users_count, places_count)) => HealthResponse {
            status: HealthStatus::Healthy,
            database: DatabaseStatus::Connected,
            users_count,
            places_count,
            active_sessions: state.sessions.active_count(),
            version,
        },
        Err(e) => {
            warn!("health check degraded: {}", e);

            HealthResponse {
                status: HealthStatus::Degraded,
                database: DatabaseStatus::Disconnected,
                users_count: 0,
                places_count: 0,
                active_sessions: 0,
                version,
            }
        }
    };

    Json(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{User, UserRepository};
    use crate::infrastructure::auth::Sha256Hasher;
    use crate::infrastructure::user::UserService;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Arc;

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&HealthStatus::Healthy).unwrap(),
            "\"healthy\""
        );
        assert_eq!(
            serde_json::to_string(&HealthStatus::Degraded).unwrap(),
            "\"degraded\""
        );
        assert_eq!(
            serde_json::to_string(&DatabaseStatus::Disconnected).unwrap(),
            "\"disconnected\""
        );
    }

    #[tokio::test]
    async fn test_healthy_report_counts_entities() {
        let state = AppState::for_tests();
        let user = state.user_service.register("alice", "pw1").await.unwrap();
        state.sessions.create(user.id);

        let Json(report) = health_check(State(state)).await;

        assert_eq!(report.status, HealthStatus::Healthy);
        assert_eq!(report.database, DatabaseStatus::Connected);
        assert_eq!(report.users_count, 1);
        assert_eq!(report.places_count, 0);
        assert_eq!(report.active_sessions, 1);
        assert_eq!(report.version, env!("CARGO_PKG_VERSION"));
    }

    /// Repository whose every call fails, standing in for an unreachable
    /// database
    #[derive(Debug)]
    struct UnreachableUserRepository;

    #[async_trait]
    impl UserRepository for UnreachableUserRepository {
        async fn create(&self, _: &str, _: &str) -> Result<User, DomainError> {
            Err(DomainError::storage("connection refused"))
        }

        async fn find_by_username(&self, _: &str) -> Result<Option<User>, DomainError> {
            Err(DomainError::storage("connection refused"))
        }

        async fn find_by_id(&self, _: i64) -> Result<Option<User>, DomainError> {
            Err(DomainError::storage("connection refused"))
        }

        async fn find_many_by_ids(&self, _: &[i64]) -> Result<HashMap<i64, User>, DomainError> {
            Err(DomainError::storage("connection refused"))
        }

        async fn count(&self) -> Result<i64, DomainError> {
            Err(DomainError::storage("connection refused"))
        }
    }

    #[tokio::test]
    async fn test_degraded_report_zeroes_counters() {
        let mut state = AppState::for_tests();
        state.user_service = Arc::new(UserService::new(
            Arc::new(UnreachableUserRepository),
            Arc::new(Sha256Hasher::new()),
        ));
        state.sessions.create(1);

        let Json(report) = health_check(State(state)).await;

        assert_eq!(report.status, HealthStatus::Degraded);
        assert_eq!(report.database, DatabaseStatus::Disconnected);
        assert_eq!(report.users_count, 0);
        assert_eq!(report.places_count, 0);
        assert_eq!(report.active_sessions, 0);
    }
}
