//! Authentication endpoints: register, login, logout, current user

use axum::{extract::State, http::HeaderMap, Form, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::middleware::{extract_session_token, RequireUser};
use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::user::User;

/// Form body shared by register and login
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}

/// Body returned by register and login
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub message: String,
    pub username: String,
    pub user_id: i64,
    pub session_token: String,
}

/// Logout confirmation
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// User response (safe to expose)
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl UserResponse {
    fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            created_at: user.created_at,
        }
    }
}

/// Register a new account and open a session for it
///
/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> Result<Json<SessionResponse>, ApiError> {
    let user = state
        .user_service
        .register(&form.username, &form.password)
        .await?;

    info!(username = %user.username, user_id = user.id, "registered new user");

    let session_token = state.sessions.create(user.id);

    Ok(Json(SessionResponse {
        message: "Registration successful".to_string(),
        username: user.username,
        user_id: user.id,
        session_token,
    }))
}

/// Log in with username and password
///
/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> Result<Json<SessionResponse>, ApiError> {
    let user = state
        .user_service
        .authenticate(&form.username, &form.password)
        .await?;

    let session_token = state.sessions.create(user.id);

    Ok(Json(SessionResponse {
        message: "Login successful".to_string(),
        username: user.username,
        user_id: user.id,
        session_token,
    }))
}

/// End the caller's session, if any. Always succeeds.
///
/// POST /api/logout
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Json<LogoutResponse> {
    if let Some(token) = extract_session_token(&headers) {
        state.sessions.delete(&token);
    }

    Json(LogoutResponse {
        message: "Logged out successfully".to_string(),
    })
}

/// Get the currently authenticated user
///
/// GET /api/users/me
pub async fn current_user(RequireUser(user): RequireUser) -> Json<UserResponse> {
    Json(UserResponse::from_user(&user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    fn credentials(username: &str, password: &str) -> Form<CredentialsForm> {
        Form(CredentialsForm {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    #[tokio::test]
    async fn test_register_returns_live_session() {
        let state = AppState::for_tests();

        let Json(response) = register(State(state.clone()), credentials("alice", "pw1"))
            .await
            .unwrap();

        assert_eq!(response.username, "alice");
        assert_eq!(response.message, "Registration successful");
        assert_eq!(
            state.sessions.resolve(&response.session_token),
            Some(response.user_id)
        );
    }

    #[tokio::test]
    async fn test_register_twice_is_a_client_error() {
        let state = AppState::for_tests();

        register(State(state.clone()), credentials("alice", "pw1"))
            .await
            .unwrap();
        let err = register(State(state), credentials("alice", "pw2"))
            .await
            .unwrap_err();

        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_login_with_wrong_password_fails() {
        let state = AppState::for_tests();

        register(State(state.clone()), credentials("alice", "pw1"))
            .await
            .unwrap();

        let err = login(State(state), credentials("alice", "wrongpw"))
            .await
            .unwrap_err();

        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(
            err.response.error.message,
            "Invalid username or password"
        );
    }

    #[tokio::test]
    async fn test_login_opens_fresh_session() {
        let state = AppState::for_tests();

        let Json(registered) = register(State(state.clone()), credentials("alice", "pw1"))
            .await
            .unwrap();
        let Json(logged_in) = login(State(state.clone()), credentials("alice", "pw1"))
            .await
            .unwrap();

        assert_ne!(registered.session_token, logged_in.session_token);
        assert_eq!(state.sessions.active_count(), 2);
    }

    #[tokio::test]
    async fn test_logout_deletes_session_and_is_idempotent() {
        let state = AppState::for_tests();

        let Json(response) = register(State(state.clone()), credentials("alice", "pw1"))
            .await
            .unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            format!("session_token={}", response.session_token)
                .parse()
                .unwrap(),
        );

        logout(State(state.clone()), headers.clone()).await;
        assert_eq!(state.sessions.resolve(&response.session_token), None);

        // Logging out again, or with no token at all, still succeeds
        let Json(second) = logout(State(state.clone()), headers).await;
        assert_eq!(second.message, "Logged out successfully");
        logout(State(state), HeaderMap::new()).await;
    }
}
