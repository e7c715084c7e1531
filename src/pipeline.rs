//! Search pipeline: fetch → parse → geocode → rank → sort
//!
//! [`find_nearest`] runs the pipeline against any [`ListingSource`] and
//! [`Geocoder`]; [`find_dentists`] wires it to the real HTTP collaborators.

use crate::config::Config;
use crate::geo::{geocode_providers, Geocoder, GoogleGeocoder};
use crate::listing::{build_http_client, parse_providers, HttpListingSource, ListingSource};
use crate::output::sort_by_proximity;
use crate::provider::RankedProvider;
use crate::{DentistError, Result};

/// Runs the whole search and returns providers nearest first
///
/// The home address is geocoded concurrently with the provider batch. Any
/// failure aborts the run before anything is ranked.
pub async fn find_nearest<S, G>(
    source: &S,
    geocoder: &G,
    home_address: &str,
) -> Result<Vec<RankedProvider>>
where
    S: ListingSource + ?Sized,
    G: Geocoder + ?Sized,
{
    let html = source.fetch_listing().await?;
    let providers = parse_providers(&html)?;

    tracing::info!("Geocoding {} providers and home address", providers.len());
    let (home, geocoded) = tokio::try_join!(
        geocoder.geocode(home_address),
        geocode_providers(geocoder, providers)
    )?;

    let mut ranked: Vec<RankedProvider> = geocoded
        .into_iter()
        .map(|provider| provider.rank_from(home))
        .collect();

    sort_by_proximity(&mut ranked);

    if let Some(nearest) = ranked.first() {
        tracing::info!(
            "Ranked {} providers; nearest is {} at {:.2} km",
            ranked.len(),
            nearest.provider.name,
            nearest.distance_km
        );
    }

    Ok(ranked)
}

/// Runs the search against the configured listing page and geocoding service
///
/// # Arguments
///
/// * `config` - The loaded configuration
///
/// # Returns
///
/// * `Ok(Vec<RankedProvider>)` - Providers sorted nearest first
/// * `Err(DentistError)` - Any fetch, parse or geocoding failure
pub async fn find_dentists(config: &Config) -> Result<Vec<RankedProvider>> {
    let client = build_http_client().map_err(DentistError::HttpClient)?;

    let source = HttpListingSource::new(client.clone(), &config.listing_url, &config.cookie);
    let geocoder = GoogleGeocoder::new(client, &config.geocode_url, &config.google_api_key);

    find_nearest(&source, &geocoder, &config.my_address).await
}
