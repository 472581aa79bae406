//! In-memory photo store for testing and development

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use super::{ensure_image, PhotoStore, PhotoUpload};
use crate::domain::DomainError;

#[derive(Debug, Default)]
pub struct InMemoryPhotoStore {
    photos: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryPhotoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.photos.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.photos.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl PhotoStore for InMemoryPhotoStore {
    async fn store(&self, photo: &PhotoUpload) -> Result<String, DomainError> {
        ensure_image(&photo.content_type)?;

        let key = Uuid::new_v4().to_string();
        self.photos
            .lock()
            .unwrap()
            .insert(key.clone(), photo.content.clone());

        Ok(key)
    }
}
