//! Place validation utilities

use thiserror::Error;

/// Errors that can occur during place validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlaceValidationError {
    #[error("Title is too short. Minimum length is {0} characters")]
    TitleTooShort(usize),

    #[error("Title exceeds maximum length of {0} characters")]
    TitleTooLong(usize),

    #[error("Latitude {0} is outside the valid range [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("Longitude {0} is outside the valid range [-180, 180]")]
    LongitudeOutOfRange(f64),
}

const MIN_TITLE_LENGTH: usize = 2;
const MAX_TITLE_LENGTH: usize = 200;

/// Validate a place title: 2-200 characters
pub fn validate_title(title: &str) -> Result<(), PlaceValidationError> {
    let len = title.chars().count();

    if len < MIN_TITLE_LENGTH {
        return Err(PlaceValidationError::TitleTooShort(MIN_TITLE_LENGTH));
    }

    if len > MAX_TITLE_LENGTH {
        return Err(PlaceValidationError::TitleTooLong(MAX_TITLE_LENGTH));
    }

    Ok(())
}

/// Validate a latitude value. NaN is rejected along with out-of-range
/// values.
pub fn validate_latitude(lat: f64) -> Result<(), PlaceValidationError> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(PlaceValidationError::LatitudeOutOfRange(lat));
    }

    Ok(())
}

/// Validate a longitude value
pub fn validate_longitude(lon: f64) -> Result<(), PlaceValidationError> {
    if !(-180.0..=180.0).contains(&lon) {
        return Err(PlaceValidationError::LongitudeOutOfRange(lon));
    }

    Ok(())
}
