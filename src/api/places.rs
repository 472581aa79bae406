//! Place endpoints: creation with photo upload, listings, and spatial
//! queries

use axum::{
    extract::{multipart::Field, Multipart, Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::place::{BoundingBox, PageParams};
use crate::infrastructure::photo::PhotoUpload;
use crate::infrastructure::place::{CreatePlaceRequest, EnrichedPlace};

/// Username rendered when the owning user row is missing
const UNKNOWN_OWNER: &str = "unknown";

/// Enriched place response
#[derive(Debug, Serialize)]
pub struct PlaceResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub lat: f64,
    pub lon: f64,
    pub tags: Vec<String>,
    pub photo_url: Option<String>,
    pub user_id: i64,
    pub user_username: String,
    pub created_at: DateTime<Utc>,
}

impl PlaceResponse {
    fn from_enriched(enriched: EnrichedPlace, public_prefix: &str) -> Self {
        let EnrichedPlace {
            place,
            owner_username,
        } = enriched;

        Self {
            id: place.id,
            title: place.title,
            description: place.description,
            lat: place.lat,
            lon: place.lon,
            tags: place.tags,
            photo_url: place
                .photo_path
                .as_deref()
                .map(|key| format!("{}/{}", public_prefix, key)),
            user_id: place.user_id,
            user_username: owner_username.unwrap_or_else(|| UNKNOWN_OWNER.to_string()),
            created_at: place.created_at,
        }
    }
}

fn to_responses(places: Vec<EnrichedPlace>, public_prefix: &str) -> Vec<PlaceResponse> {
    places
        .into_iter()
        .map(|enriched| PlaceResponse::from_enriched(enriched, public_prefix))
        .collect()
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct BoundingBoxQuery {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Create a place from a multipart form
///
/// POST /places/
///
/// Fields: `title`, `description?`, `lat`, `lon`, `tags?` (comma
/// separated), `photo` (file). Requires an authenticated session.
pub async fn create_place(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    mut multipart: Multipart,
) -> Result<Json<PlaceResponse>, ApiError> {
    let mut title = None;
    let mut description = None;
    let mut lat = None;
    let mut lon = None;
    let mut tags = Vec::new();
    let mut photo = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to read multipart field: {}", e)))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "title" => title = Some(read_text(field, "title").await?),
            "description" => {
                let text = read_text(field, "description").await?;
                if !text.is_empty() {
                    description = Some(text);
                }
            }
            "lat" => lat = Some(read_f64(field, "lat").await?),
            "lon" => lon = Some(read_f64(field, "lon").await?),
            "tags" => tags = parse_tags(&read_text(field, "tags").await?),
            "photo" => {
                let content_type = field.content_type().unwrap_or_default().to_string();
                let file_name = field.file_name().map(str::to_string);
                let content = field
                    .bytes()
                    .await
                    .map_err(|e| {
                        ApiError::bad_request(format!("Failed to read photo upload: {}", e))
                    })?
                    .to_vec();

                photo = Some(PhotoUpload {
                    content,
                    content_type,
                    file_name,
                });
            }
            _ => {}
        }
    }

    let request = CreatePlaceRequest {
        title: required(title, "title")?,
        description,
        lat: required(lat, "lat")?,
        lon: required(lon, "lon")?,
        tags,
        photo: required(photo, "photo")?,
    };

    let enriched = state.place_service.create(request, &user).await?;

    info!(place_id = enriched.place.id, user_id = user.id, "created place");

    Ok(Json(PlaceResponse::from_enriched(
        enriched,
        &state.photo_public_prefix,
    )))
}

/// Paginated listing, newest first
///
/// GET /places/?skip=&limit=
pub async fn list_places(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<PlaceResponse>>, ApiError> {
    let page = PageParams::new(query.skip, query.limit);
    let places = state.place_service.list(page).await?;

    Ok(Json(to_responses(places, &state.photo_public_prefix)))
}

/// Places within a rectangular area
///
/// GET /places/bbox/?min_lat=&max_lat=&min_lon=&max_lon=
pub async fn places_by_bounding_box(
    State(state): State<AppState>,
    Query(query): Query<BoundingBoxQuery>,
) -> Result<Json<Vec<PlaceResponse>>, ApiError> {
    let bbox = BoundingBox::new(query.min_lat, query.max_lat, query.min_lon, query.max_lon)
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let places = state.place_service.find_by_bounding_box(bbox).await?;

    Ok(Json(to_responses(places, &state.photo_public_prefix)))
}

/// Places owned by one user, newest first
///
/// GET /users/{user_id}/places
pub async fn places_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<PlaceResponse>>, ApiError> {
    let places = state.place_service.find_by_user(user_id).await?;

    Ok(Json(to_responses(places, &state.photo_public_prefix)))
}

async fn read_text(field: Field<'_>, name: &str) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to read field '{}': {}", name, e)))
}

async fn read_f64(field: Field<'_>, name: &str) -> Result<f64, ApiError> {
    let text = read_text(field, name).await?;

    text.trim()
        .parse::<f64>()
        .map_err(|_| ApiError::bad_request(format!("Field '{}' must be a number", name)))
}

fn required<T>(value: Option<T>, name: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::bad_request(format!("Missing required field '{}'", name)))
}

/// Split a comma-separated tags field, preserving order and dropping
/// empty segments
fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
