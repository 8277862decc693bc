use crate::power::error::PowerApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PowerdayError {
    #[error(transparent)]
    PowerApi(#[from] PowerApiError),

    #[error("Coordinates out of range: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("Invalid year range: start {start} is after end {end}")]
    InvalidYearRange { start: i32, end: i32 },

    #[error("Year {0} cannot be expressed as a calendar date")]
    UnrepresentableYear(i32),

    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}
