//! Address geocoding
//!
//! The [`Geocoder`] trait is the seam between the pipeline and the geocoding
//! service; [`GoogleGeocoder`] is the production implementation.

use crate::geo::Coordinate;
use crate::provider::{GeocodedProvider, Provider};
use crate::{DentistError, Result};
use async_trait::async_trait;
use futures::future::try_join_all;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

/// Resolves a free-text address to a coordinate
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<Coordinate>;
}

/// Geocoding service response
#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,

    #[serde(default)]
    status: Option<String>,

    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Coordinate,
}

/// Geocoder backed by the Google Geocoding API (or anything speaking its format)
pub struct GoogleGeocoder {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl GoogleGeocoder {
    /// Creates a geocoder that sends requests to `endpoint` with the given key
    pub fn new(client: Client, endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl Geocoder for GoogleGeocoder {
    /// Returns the first result's location
    ///
    /// A response without results is an error; ambiguous addresses are not
    /// disambiguated.
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Coordinate> {
        let request_error = |source| DentistError::GeocodeRequest {
            address: address.to_string(),
            source,
        };

        let response: GeocodeResponse = self
            .client
            .get(&self.endpoint)
            .query(&[("address", address), ("key", self.api_key.as_str())])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(request_error)?
            .json()
            .await
            .map_err(request_error)?;

        let Some(first) = response.results.into_iter().next() else {
            let status = match (response.status, response.error_message) {
                (Some(status), Some(message)) => format!("{}: {}", status, message),
                (Some(status), None) => status,
                (None, Some(message)) => message,
                (None, None) => "no results".to_string(),
            };
            warn!(address = %address, status = %status, "Address not found by geocoding service");
            return Err(DentistError::GeocodeEmpty {
                address: address.to_string(),
                status,
            });
        };

        let location = first.geometry.location;
        debug!("Geocoded '{}' → ({}, {})", address, location.lat, location.lng);

        Ok(location)
    }
}

/// Geocodes every provider concurrently
///
/// All requests are issued at once and joined; the first failure fails the
/// whole batch and no partial results are returned. Output order matches input.
pub async fn geocode_providers<G>(
    geocoder: &G,
    providers: Vec<Provider>,
) -> Result<Vec<GeocodedProvider>>
where
    G: Geocoder + ?Sized,
{
    debug!("Dispatching {} geocode requests", providers.len());

    try_join_all(providers.into_iter().map(|provider| async move {
        let location = geocoder.geocode(&provider.address).await?;
        Ok::<_, DentistError>(provider.with_location(location))
    }))
    .await
}
