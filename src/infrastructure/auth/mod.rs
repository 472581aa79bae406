//! Authentication primitives: password digests and the session store

mod password;
mod session;

pub use password::{PasswordHasher, Sha256Hasher};
pub use session::SessionStore;
