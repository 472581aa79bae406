//! Password digest utilities
//!
//! Deterministic unsalted SHA-256, hex-encoded. Stored digests are 64
//! lowercase hex characters; registration and verification must agree on
//! this format.

use std::fmt::Debug;

use sha2::{Digest, Sha256};

/// Trait for password digest operations
pub trait PasswordHasher: Send + Sync + Debug {
    /// Digest a plaintext password. Deterministic: equal inputs produce
    /// equal digests.
    fn hash(&self, password: &str) -> String;

    /// Verify a password against a stored digest
    fn verify(&self, password: &str, digest: &str) -> bool;
}

/// SHA-256 based hasher producing 64-char lowercase hex digests
#[derive(Debug, Clone, Default)]
pub struct Sha256Hasher;

impl Sha256Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Sha256Hasher {
    fn hash(&self, password: &str) -> String {
        hex::encode(Sha256::digest(password.as_bytes()))
    }

    fn verify(&self, password: &str, digest: &str) -> bool {
        self.hash(password) == digest
    }
}
