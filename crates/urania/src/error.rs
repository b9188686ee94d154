use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur while computing a chart
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unsupported date {datetime}: year {year} is outside the supported range {min_year}..={max_year}")]
    UnsupportedDate {
        datetime: DateTime<Utc>,
        year: i32,
        min_year: i32,
        max_year: i32,
    },
    #[error("Unknown body: {name}. Valid bodies: {valid:?}")]
    UnknownBody { name: String, valid: Vec<String> },
    #[error("No coordinates supplied for the chart location")]
    MissingLocation,
    #[error("Invalid location: {message}")]
    InvalidLocation { message: String },
    #[error("Invalid location format: {query}. Expected format: 'City, Country'")]
    InvalidLocationFormat { query: String },
    #[error("Location not found in catalog: {query}")]
    LocationNotFound { query: String },
    #[error("Failed to parse city catalog: {0}")]
    CatalogParse(#[source] serde_json::Error),
    #[error("Failed to serialize chart: {0}")]
    Serialization(#[source] serde_json::Error),
    #[error("Failed to parse stored chart: {0}")]
    ChartParse(#[source] serde_json::Error),
}
