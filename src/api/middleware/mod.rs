//! Request middleware and extractors

mod session_auth;

pub use session_auth::{extract_session_token, RequireUser, SESSION_COOKIE};
