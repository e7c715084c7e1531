//! Provider records as they move through the pipeline
//!
//! A record starts as a [`Provider`] straight from the listing page, gains a
//! coordinate as a [`GeocodedProvider`] and a distance as a [`RankedProvider`].

use crate::geo::{haversine_km, Coordinate};

/// A dentist scraped from the directory page
#[derive(Debug, Clone, PartialEq)]
pub struct Provider {
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// A provider whose address has been resolved to a coordinate
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedProvider {
    pub provider: Provider,
    pub location: Coordinate,
}

/// A geocoded provider with its distance from home, in kilometres
#[derive(Debug, Clone, PartialEq)]
pub struct RankedProvider {
    pub provider: Provider,
    pub location: Coordinate,
    pub distance_km: f64,
}

impl Provider {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
        }
    }

    pub fn with_location(self, location: Coordinate) -> GeocodedProvider {
        GeocodedProvider {
            provider: self,
            location,
        }
    }
}

impl GeocodedProvider {
    /// Measures this provider against the home location
    pub fn rank_from(self, home: Coordinate) -> RankedProvider {
        let distance_km = haversine_km(self.location, home);
        RankedProvider {
            provider: self.provider,
            location: self.location,
            distance_km,
        }
    }
}
