//! Photo storage adapters

mod fs_store;
mod in_memory;

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

pub use fs_store::FsPhotoStore;
pub use in_memory::InMemoryPhotoStore;

/// An uploaded photo: raw bytes plus what the client declared about them
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub content: Vec<u8>,
    /// Declared content type, e.g. `image/jpeg`
    pub content_type: String,
    /// Original filename, if the client sent one
    pub file_name: Option<String>,
}

/// Storage adapter for uploaded photos
///
/// `store` returns a bare storage key; callers combine it with the public
/// path prefix to build a retrieval URL. The adapter never embeds URLs.
#[async_trait]
pub trait PhotoStore: Send + Sync + Debug {
    /// Persist the upload and return its storage key. Fails with
    /// `UnsupportedMediaType` before writing anything if the declared
    /// content type is not an image.
    async fn store(&self, photo: &PhotoUpload) -> Result<String, DomainError>;
}

/// Reject declared content types outside the image media-type prefix
pub(crate) fn ensure_image(content_type: &str) -> Result<(), DomainError> {
    if content_type.starts_with("image/") {
        return Ok(());
    }

    let declared = if content_type.is_empty() {
        "unknown"
    } else {
        content_type
    };

    Err(DomainError::unsupported_media_type(format!(
        "Expected an image upload, got '{}'",
        declared
    )))
}
