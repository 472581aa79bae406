//! User domain: entity, validation, and repository trait

mod entity;
pub mod repository;
mod validation;

pub use entity::User;
pub use repository::{in_memory::InMemoryUserRepository, UserRepository};
pub use validation::{validate_password, validate_username, UserValidationError};
