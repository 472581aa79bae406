//! Place repository trait

use async_trait::async_trait;

use super::{BoundingBox, NewPlace, PageParams, Place};
use crate::domain::DomainError;

/// Repository trait for Place persistence
#[async_trait]
pub trait PlaceRepository: Send + Sync + std::fmt::Debug {
    /// Insert a new place; the store assigns `id` and `created_at`
    async fn create(&self, place: NewPlace) -> Result<Place, DomainError>;

    /// Look up a place by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Place>, DomainError>;

    /// Newest first, tie-broken by id descending so adjacent pages never
    /// overlap or skip rows
    async fn list(&self, page: PageParams) -> Result<Vec<Place>, DomainError>;

    /// All places whose coordinates lie within the box's closed ranges
    async fn find_by_bounding_box(&self, bbox: BoundingBox) -> Result<Vec<Place>, DomainError>;

    /// All places owned by the user, newest first
    async fn find_by_user(&self, user_id: i64) -> Result<Vec<Place>, DomainError>;

    /// Number of stored places
    async fn count(&self) -> Result<i64, DomainError>;
}

/// In-memory implementation of PlaceRepository for testing and development
pub mod in_memory {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    pub struct InMemoryPlaceRepository {
        places: Mutex<Vec<Place>>,
    }

    impl InMemoryPlaceRepository {
        pub fn new() -> Self {
            Self::default()
        }
    }

    fn newest_first(places: &mut [Place]) {
        places.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
    }

    #[async_trait]
    impl PlaceRepository for InMemoryPlaceRepository {
        async fn create(&self, place: NewPlace) -> Result<Place, DomainError> {
            let mut places = self.places.lock().unwrap();

            let created = Place {
                id: places.len() as i64 + 1,
                title: place.title,
                description: place.description,
                lat: place.lat,
                lon: place.lon,
                photo_path: place.photo_path,
                tags: place.tags,
                user_id: place.user_id,
                created_at: Utc::now(),
                updated_at: None,
            };

            places.push(created.clone());
            Ok(created)
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Place>, DomainError> {
            Ok(self
                .places
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == id)
                .cloned())
        }

        async fn list(&self, page: PageParams) -> Result<Vec<Place>, DomainError> {
            let mut places: Vec<Place> = self.places.lock().unwrap().clone();
            newest_first(&mut places);

            Ok(places
                .into_iter()
                .skip(page.skip as usize)
                .take(page.limit as usize)
                .collect())
        }

        async fn find_by_bounding_box(
            &self,
            bbox: BoundingBox,
        ) -> Result<Vec<Place>, DomainError> {
            Ok(self
                .places
                .lock()
                .unwrap()
                .iter()
                .filter(|p| bbox.contains(p.lat, p.lon))
                .cloned()
                .collect())
        }

        async fn find_by_user(&self, user_id: i64) -> Result<Vec<Place>, DomainError> {
            let mut places: Vec<Place> = self
                .places
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.user_id == user_id)
                .cloned()
                .collect();
            newest_first(&mut places);

            Ok(places)
        }

        async fn count(&self) -> Result<i64, DomainError> {
            Ok(self.places.lock().unwrap().len() as i64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::in_memory::InMemoryPlaceRepository;
    use super::*;

    fn new_place(title: &str, lat: f64, lon: f64, user_id: i64) -> NewPlace {
        NewPlace {
            title: title.to_string(),
            description: None,
            lat,
            lon,
            photo_path: None,
            tags: Vec::new(),
            user_id,
        }
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let repo = InMemoryPlaceRepository::new();

        for i in 0..3 {
            repo.create(new_place(&format!("place-{}", i), 10.0, 10.0, 1))
                .await
                .unwrap();
        }

        let listed = repo.list(PageParams::default()).await.unwrap();
        let ids: Vec<i64> = listed.iter().map(|p| p.id).collect();

        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_adjacent_pages_neither_skip_nor_duplicate() {
        let repo = InMemoryPlaceRepository::new();

        for i in 0..5 {
            repo.create(new_place(&format!("place-{}", i), 10.0, 10.0, 1))
                .await
                .unwrap();
        }

        let mut seen = Vec::new();
        for skip in [0, 2, 4] {
            let page = repo
                .list(PageParams::new(Some(skip), Some(2)))
                .await
                .unwrap();
            seen.extend(page.into_iter().map(|p| p.id));
        }

        assert_eq!(seen, vec![5, 4, 3, 2, 1]);
    }

    #[tokio::test]
    async fn test_bounding_box_membership() {
        let repo = InMemoryPlaceRepository::new();

        let inside = repo
            .create(new_place("inside", 53.2, 50.15, 1))
            .await
            .unwrap();
        repo.create(new_place("outside", 0.5, 0.5, 1)).await.unwrap();

        let bbox = BoundingBox::new(53.0, 53.5, 49.5, 50.5).unwrap();
        let found = repo.find_by_bounding_box(bbox).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, inside.id);

        let elsewhere = BoundingBox::new(0.0, 1.0, 0.0, 1.0).unwrap();
        let found = repo.find_by_bounding_box(elsewhere).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "outside");
    }

    #[tokio::test]
    async fn test_inverted_bounding_box_yields_empty() {
        let repo = InMemoryPlaceRepository::new();
        repo.create(new_place("somewhere", 53.2, 50.15, 1))
            .await
            .unwrap();

        let inverted = BoundingBox::new(53.5, 53.0, 49.5, 50.5).unwrap();
        assert!(repo.find_by_bounding_box(inverted).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryPlaceRepository::new();
        let created = repo
            .create(new_place("somewhere", 10.0, 10.0, 1))
            .await
            .unwrap();

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.title, "somewhere");
        assert!(repo.find_by_id(created.id + 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_user() {
        let repo = InMemoryPlaceRepository::new();

        repo.create(new_place("mine", 10.0, 10.0, 1)).await.unwrap();
        repo.create(new_place("theirs", 10.0, 10.0, 2))
            .await
            .unwrap();
        repo.create(new_place("also mine", 10.0, 10.0, 1))
            .await
            .unwrap();

        let mine = repo.find_by_user(1).await.unwrap();
        assert_eq!(mine.len(), 2);
        assert_eq!(mine[0].title, "also mine");
        assert_eq!(mine[1].title, "mine");

        assert!(repo.find_by_user(99).await.unwrap().is_empty());
    }
}
