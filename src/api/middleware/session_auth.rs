//! Session authentication extractor

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::user::User;

/// Cookie clients use to carry the session token
pub const SESSION_COOKIE: &str = "session_token";

/// Extractor that requires a valid session
///
/// The token is taken from:
/// - Authorization header: `Bearer <token>`
/// - Cookie: `session_token=<token>`
#[derive(Debug, Clone)]
pub struct RequireUser(pub User);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_session_token(&parts.headers).ok_or_else(|| {
            ApiError::unauthorized(
                "Authentication required. Provide a session token via \
                 'Authorization: Bearer <token>' or the session cookie",
            )
        })?;

        debug!("Resolving session token");

        let user_id = state
            .sessions
            .resolve(&token)
            .ok_or_else(|| ApiError::unauthorized("Session expired or unknown"))?;

        let user = state
            .user_service
            .find_by_id(user_id)
            .await
            .map_err(ApiError::from)?
            .ok_or_else(|| ApiError::unauthorized("User no longer exists"))?;

        Ok(RequireUser(user))
    }
}

/// Extract the session token from request headers, preferring the bearer
/// form over the cookie
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(auth_header) = headers.get(header::AUTHORIZATION) {
        if let Ok(auth_str) = auth_header.to_str() {
            if let Some(token) = auth_str.strip_prefix("Bearer ") {
                let token = token.trim();
                if !token.is_empty() {
                    return Some(token.to_string());
                }
            }
        }
    }

    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;

    for pair in cookies.split(';') {
        if let Some((name, value)) = pair.trim().split_once('=') {
            if name == SESSION_COOKIE && !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }

    None
}
