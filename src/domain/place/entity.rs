//! Place entity and spatial types

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::validation::{validate_latitude, validate_longitude, PlaceValidationError};

/// A shared location with an optional photo
#[derive(Debug, Clone, Serialize)]
pub struct Place {
    /// Store-assigned identifier
    pub id: i64,
    /// 2-200 characters
    pub title: String,
    pub description: Option<String>,
    /// Degrees in [-90, 90]
    pub lat: f64,
    /// Degrees in [-180, 180]
    pub lon: f64,
    /// Key into the photo store; the API layer turns this into a URL
    pub photo_path: Option<String>,
    /// Insertion order preserved, duplicates allowed
    pub tags: Vec<String>,
    /// Owning user
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    /// Set on mutation; no exposed endpoint mutates places today
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields for creating a place; the store assigns `id` and `created_at`
#[derive(Debug, Clone)]
pub struct NewPlace {
    pub title: String,
    pub description: Option<String>,
    pub lat: f64,
    pub lon: f64,
    pub photo_path: Option<String>,
    pub tags: Vec<String>,
    pub user_id: i64,
}

/// A rectangle in latitude/longitude space with closed bounds
///
/// Every bound must lie within the coordinate domain. An inverted box
/// (`min > max` on either axis) is valid and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

impl BoundingBox {
    pub fn new(
        min_lat: f64,
        max_lat: f64,
        min_lon: f64,
        max_lon: f64,
    ) -> Result<Self, PlaceValidationError> {
        validate_latitude(min_lat)?;
        validate_latitude(max_lat)?;
        validate_longitude(min_lon)?;
        validate_longitude(max_lon)?;

        Ok(Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        })
    }

    pub fn min_lat(&self) -> f64 {
        self.min_lat
    }

    pub fn max_lat(&self) -> f64 {
        self.max_lat
    }

    pub fn min_lon(&self) -> f64 {
        self.min_lon
    }

    pub fn max_lon(&self) -> f64 {
        self.max_lon
    }

    /// Closed-range membership test on both axes
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        self.min_lat <= lat && lat <= self.max_lat && self.min_lon <= lon && lon <= self.max_lon
    }
}

/// Default page size for place listings
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

/// Hard cap on requested page sizes
pub const MAX_PAGE_LIMIT: u32 = 500;

/// Pagination window over newest-first listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub skip: u32,
    pub limit: u32,
}

impl PageParams {
    /// Missing values fall back to the defaults; `limit` is clamped to
    /// `MAX_PAGE_LIMIT`.
    pub fn new(skip: Option<u32>, limit: Option<u32>) -> Self {
        Self {
            skip: skip.unwrap_or(0),
            limit: limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT),
        }
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_contains_closed_ranges() {
        let bbox = BoundingBox::new(53.0, 53.5, 49.5, 50.5).unwrap();

        assert!(bbox.contains(53.2, 50.15));
        // Boundary points are inside
        assert!(bbox.contains(53.0, 49.5));
        assert!(bbox.contains(53.5, 50.5));

        assert!(!bbox.contains(52.999, 50.0));
        assert!(!bbox.contains(53.2, 51.0));
    }

    #[test]
    fn test_bounding_box_rejects_out_of_domain_bounds() {
        assert_eq!(
            BoundingBox::new(-100.0, 53.5, 49.5, 50.5),
            Err(PlaceValidationError::LatitudeOutOfRange(-100.0))
        );
        assert_eq!(
            BoundingBox::new(0.0, 1.0, -200.0, 50.5),
            Err(PlaceValidationError::LongitudeOutOfRange(-200.0))
        );
    }

    #[test]
    fn test_inverted_bounding_box_is_valid_but_empty() {
        let bbox = BoundingBox::new(53.5, 53.0, 49.5, 50.5).unwrap();

        assert!(!bbox.contains(53.2, 50.0));
        assert!(!bbox.contains(53.0, 50.0));
    }

    #[test]
    fn test_page_params_defaults_and_clamping() {
        let defaults = PageParams::default();
        assert_eq!(defaults.skip, 0);
        assert_eq!(defaults.limit, DEFAULT_PAGE_LIMIT);

        let page = PageParams::new(Some(10), Some(50));
        assert_eq!(page.skip, 10);
        assert_eq!(page.limit, 50);

        let clamped = PageParams::new(None, Some(10_000));
        assert_eq!(clamped.limit, MAX_PAGE_LIMIT);
    }
}
