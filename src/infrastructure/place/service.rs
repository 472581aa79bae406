//! Place service: creation with photo upload and enriched reads

use std::sync::Arc;

use crate::domain::place::{
    validate_latitude, validate_longitude, validate_title, BoundingBox, NewPlace, PageParams,
    Place, PlaceRepository,
};
use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::photo::{PhotoStore, PhotoUpload};

/// A place together with its owner's username
#[derive(Debug, Clone)]
pub struct EnrichedPlace {
    pub place: Place,
    /// None when the owning user row is missing
    pub owner_username: Option<String>,
}

/// Request for creating a place
#[derive(Debug, Clone)]
pub struct CreatePlaceRequest {
    pub title: String,
    pub description: Option<String>,
    pub lat: f64,
    pub lon: f64,
    pub tags: Vec<String>,
    pub photo: PhotoUpload,
}

/// Place service composing the repositories with the photo store
#[derive(Debug)]
pub struct PlaceService {
    places: Arc<dyn PlaceRepository>,
    users: Arc<dyn UserRepository>,
    photos: Arc<dyn PhotoStore>,
}

impl PlaceService {
    pub fn new(
        places: Arc<dyn PlaceRepository>,
        users: Arc<dyn UserRepository>,
        photos: Arc<dyn PhotoStore>,
    ) -> Self {
        Self {
            places,
            users,
            photos,
        }
    }

    /// Create a place owned by `owner`
    ///
    /// Field and media-type validation run before the photo hits disk, and
    /// the photo is stored before the row is written: a rejected upload
    /// persists nothing.
    pub async fn create(
        &self,
        request: CreatePlaceRequest,
        owner: &User,
    ) -> Result<EnrichedPlace, DomainError> {
        validate_title(&request.title).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_latitude(request.lat).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_longitude(request.lon).map_err(|e| DomainError::validation(e.to_string()))?;

        let photo_path = self.photos.store(&request.photo).await?;

        let place = self
            .places
            .create(NewPlace {
                title: request.title,
                description: request.description,
                lat: request.lat,
                lon: request.lon,
                photo_path: Some(photo_path),
                tags: request.tags,
                user_id: owner.id,
            })
            .await?;

        Ok(EnrichedPlace {
            place,
            owner_username: Some(owner.username.clone()),
        })
    }

    /// Paginated listing, newest first
    pub async fn list(&self, page: PageParams) -> Result<Vec<EnrichedPlace>, DomainError> {
        let places = self.places.list(page).await?;
        self.enrich(places).await
    }

    /// All places within the bounding box
    pub async fn find_by_bounding_box(
        &self,
        bbox: BoundingBox,
    ) -> Result<Vec<EnrichedPlace>, DomainError> {
        let places = self.places.find_by_bounding_box(bbox).await?;
        self.enrich(places).await
    }

    /// All places owned by the user, newest first
    pub async fn find_by_user(&self, user_id: i64) -> Result<Vec<EnrichedPlace>, DomainError> {
        let places = self.places.find_by_user(user_id).await?;
        self.enrich(places).await
    }

    /// Number of stored places
    pub async fn count(&self) -> Result<i64, DomainError> {
        self.places.count().await
    }

    /// Attach owner usernames with a single batched lookup, never one
    /// query per row
    async fn enrich(&self, places: Vec<Place>) -> Result<Vec<EnrichedPlace>, DomainError> {
        let mut ids: Vec<i64> = places.iter().map(|p| p.user_id).collect();
        ids.sort_unstable();
        ids.dedup();

        let owners = self.users.find_many_by_ids(&ids).await?;

        Ok(places
            .into_iter()
            .map(|place| {
                let owner_username = owners.get(&place.user_id).map(|u| u.username.clone());
                EnrichedPlace {
                    place,
                    owner_username,
                }
            })
            .collect())
    }
}
