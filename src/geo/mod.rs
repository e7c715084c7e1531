//! Geographic helpers: geocoding and distance
//!
//! This module contains:
//! - The [`Geocoder`] trait and its Google-backed implementation
//! - Concurrent, all-or-nothing geocoding of a provider batch
//! - Haversine distance between coordinates

mod distance;
mod geocoder;

pub use distance::{haversine_km, Coordinate, EARTH_RADIUS_KM};
pub use geocoder::{geocode_providers, Geocoder, GoogleGeocoder};
