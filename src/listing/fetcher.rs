//! HTTP fetcher for the provider directory
//!
//! This module handles:
//! - Building the shared HTTP client, tolerant of the upstream's malformed headers
//! - The single cookie-authenticated GET for the listing page

use crate::DentistError;
use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, COOKIE};
use reqwest::Client;

/// Source of the raw listing page HTML
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch_listing(&self) -> crate::Result<String>;
}

/// Builds the HTTP client used for every request in a run
///
/// The directory server answers with non-conformant headers, so HTTP/1 response
/// parsing is relaxed: obsolete line folding, whitespace before the colon and
/// invalid header lines are all accepted. There is no request timeout.
///
/// # Example
///
/// ```
/// use find_dentist::listing::build_http_client;
///
/// let client = build_http_client().unwrap();
/// ```
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    let user_agent = format!(
        "{}/{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    Client::builder()
        .user_agent(user_agent)
        .http1_allow_obsolete_multiline_headers_in_responses(true)
        .http1_allow_spaces_after_header_name_in_responses(true)
        .http1_ignore_invalid_headers_in_responses(true)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches the listing page over HTTP with a session cookie
pub struct HttpListingSource {
    client: Client,
    url: String,
    cookie: String,
}

impl HttpListingSource {
    pub fn new(client: Client, url: impl Into<String>, cookie: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            cookie: cookie.into(),
        }
    }
}

#[async_trait]
impl ListingSource for HttpListingSource {
    /// Sends one GET with `Cache-Control: no-cache` and the session cookie
    ///
    /// Transport failures and non-2xx statuses are returned as errors; nothing
    /// is retried.
    async fn fetch_listing(&self) -> crate::Result<String> {
        tracing::info!("Fetching provider listing from {}", self.url);

        let http_error = |source| DentistError::Http {
            url: self.url.clone(),
            source,
        };

        let response = self
            .client
            .get(&self.url)
            .header(CACHE_CONTROL, "no-cache")
            .header(COOKIE, &self.cookie)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(http_error)?;

        let body = response.text().await.map_err(http_error)?;
        tracing::debug!("Listing page is {} bytes", body.len());

        Ok(body)
    }
}
