//! PostgreSQL place repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::place::{BoundingBox, NewPlace, PageParams, Place, PlaceRepository};
use crate::domain::DomainError;

const PLACE_COLUMNS: &str =
    "id, title, description, lat, lon, photo_path, tags, user_id, created_at, updated_at";

/// PostgreSQL implementation of PlaceRepository
#[derive(Debug, Clone)]
pub struct PostgresPlaceRepository {
    pool: PgPool,
}

impl PostgresPlaceRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlaceRepository for PostgresPlaceRepository {
    async fn create(&self, place: NewPlace) -> Result<Place, DomainError> {
        let tags = serde_json::to_value(&place.tags)
            .map_err(|e| DomainError::storage(format!("Failed to encode tags: {}", e)))?;

        let row = sqlx::query(&format!(
            r#"
            INSERT INTO places (title, description, lat, lon, photo_path, tags, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            PLACE_COLUMNS
        ))
        .bind(&place.title)
        .bind(&place.description)
        .bind(place.lat)
        .bind(place.lon)
        .bind(&place.photo_path)
        .bind(tags)
        .bind(place.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create place: {}", e)))?;

        row_to_place(&row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Place>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM places WHERE id = $1",
            PLACE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get place: {}", e)))?;

        row.map(|row| row_to_place(&row)).transpose()
    }

    async fn list(&self, page: PageParams) -> Result<Vec<Place>, DomainError> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {}
            FROM places
            ORDER BY created_at DESC, id DESC
            OFFSET $1 LIMIT $2
            "#,
            PLACE_COLUMNS
        ))
        .bind(page.skip as i64)
        .bind(page.limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list places: {}", e)))?;

        rows.iter().map(row_to_place).collect()
    }

    async fn find_by_bounding_box(&self, bbox: BoundingBox) -> Result<Vec<Place>, DomainError> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {}
            FROM places
            WHERE lat >= $1 AND lat <= $2 AND lon >= $3 AND lon <= $4
            "#,
            PLACE_COLUMNS
        ))
        .bind(bbox.min_lat())
        .bind(bbox.max_lat())
        .bind(bbox.min_lon())
        .bind(bbox.max_lon())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to query bounding box: {}", e)))?;

        rows.iter().map(row_to_place).collect()
    }

    async fn find_by_user(&self, user_id: i64) -> Result<Vec<Place>, DomainError> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {}
            FROM places
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
            PLACE_COLUMNS
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list user places: {}", e)))?;

        rows.iter().map(row_to_place).collect()
    }

    async fn count(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM places")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count places: {}", e)))
    }
}

fn row_to_place(row: &sqlx::postgres::PgRow) -> Result<Place, DomainError> {
    let tags: serde_json::Value = row.get("tags");
    let tags: Vec<String> = serde_json::from_value(tags)
        .map_err(|e| DomainError::storage(format!("Invalid tags in database: {}", e)))?;

    Ok(Place {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        lat: row.get("lat"),
        lon: row.get("lon"),
        photo_path: row.get("photo_path"),
        tags,
        user_id: row.get("user_id"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}
