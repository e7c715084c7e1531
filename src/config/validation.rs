use crate::config::types::{Config, COOKIE, GOOGLE_API_KEY, MY_ADDRESS};
use crate::{ConfigError, ConfigResult};
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_required(GOOGLE_API_KEY, &config.google_api_key)?;
    validate_required(COOKIE, &config.cookie)?;
    validate_required(MY_ADDRESS, &config.my_address)?;
    validate_http_url("listing_url", &config.listing_url)?;
    validate_http_url("geocode_url", &config.geocode_url)?;
    Ok(())
}

/// A blank value is as unusable as a missing one
fn validate_required(name: &str, value: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{} cannot be empty", name)));
    }
    Ok(())
}

fn validate_http_url(name: &str, value: &str) -> ConfigResult<()> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", name, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "{} '{}' must use http or https",
            name, value
        )));
    }

    Ok(())
}
