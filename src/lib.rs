//! find-dentist: in-network dentists, nearest first
//!
//! This crate scrapes an insurer's provider directory, geocodes every listed address,
//! measures each one against a home address and reports the results sorted by distance.

pub mod config;
pub mod geo;
pub mod listing;
pub mod output;
pub mod pipeline;
pub mod provider;

use thiserror::Error;

/// Main error type for the dentist search pipeline
#[derive(Debug, Error)]
pub enum DentistError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Geocoding request failed for '{address}': {source}")]
    GeocodeRequest {
        address: String,
        source: reqwest::Error,
    },

    #[error("No geocoding results for '{address}' (status: {status})")]
    GeocodeEmpty { address: String, status: String },

    #[error("No providers could be parsed from the listing page")]
    NoProviders,

    /// Only guards the built-in listing selectors; never raised by page content
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    Missing(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Failed to read .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, DentistError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{load_config, Config};
pub use geo::{haversine_km, Coordinate, Geocoder, GoogleGeocoder};
pub use listing::{parse_providers, HttpListingSource, ListingSource};
pub use output::{print_report, sort_by_proximity, write_report};
pub use pipeline::{find_dentists, find_nearest};
pub use provider::{GeocodedProvider, Provider, RankedProvider};
