//! Provider listing: fetching and scraping the insurer's directory
//!
//! This module contains:
//! - The HTTP client setup and the cookie-authenticated page fetch
//! - HTML parsing of the page into provider records

mod fetcher;
mod parser;

pub use fetcher::{build_http_client, HttpListingSource, ListingSource};
pub use parser::{parse_providers, ADDRESS_LABEL, PHONE_LABEL};
