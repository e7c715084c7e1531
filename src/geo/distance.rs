//! Great-circle distance helpers

use serde::Deserialize;

/// Mean Earth radius used by the haversine formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the globe, in degrees
///
/// Field names follow the geocoding service's `location` object so the type
/// deserializes straight out of a response.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Calculate distance between two coordinates in kilometers
///
/// Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_KM`].
///
/// # Example
///
/// ```
/// use find_dentist::{haversine_km, Coordinate};
///
/// let d = haversine_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
/// assert!((d - 111.19).abs() < 0.01);
/// ```
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
