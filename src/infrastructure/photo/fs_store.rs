//! Filesystem photo store

use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

use super::{ensure_image, PhotoStore, PhotoUpload};
use crate::domain::DomainError;

/// Photo store writing files under a local directory
#[derive(Debug, Clone)]
pub struct FsPhotoStore {
    root: PathBuf,
}

impl FsPhotoStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the backing directory if it does not exist yet
    pub async fn ensure_dir(&self) -> Result<(), DomainError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to create upload dir: {}", e)))
    }
}

#[async_trait]
impl PhotoStore for FsPhotoStore {
    async fn store(&self, photo: &PhotoUpload) -> Result<String, DomainError> {
        ensure_image(&photo.content_type)?;

        let key = storage_key(photo);
        let path = self.root.join(&key);

        tokio::fs::write(&path, &photo.content)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to write photo: {}", e)))?;

        Ok(key)
    }
}

/// Collision-resistant storage key preserving the upload's extension.
/// Falls back to an extension guessed from the declared content type when
/// the filename has none.
fn storage_key(photo: &PhotoUpload) -> String {
    let ext = photo
        .file_name
        .as_deref()
        .and_then(file_extension)
        .map(str::to_string)
        .or_else(|| {
            mime_guess::get_mime_extensions_str(&photo.content_type)
                .and_then(|exts| exts.first())
                .map(|ext| (*ext).to_string())
        });

    match ext {
        Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
        None => Uuid::new_v4().to_string(),
    }
}

/// Extension of an uploaded filename, if it has a plausible one. The key
/// ends up in URLs and on disk, so anything non-alphanumeric is refused.
fn file_extension(name: &str) -> Option<&str> {
    let (stem, ext) = name.rsplit_once('.')?;

    if stem.is_empty()
        || ext.is_empty()
        || ext.len() > 8
        || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }

    Some(ext)
}
