/// Insurer directory page listing in-network dentists
pub const DEFAULT_LISTING_URL: &str = "https://www.hospitalaleman.org.ar/plan-medico/quiero-asociarme/cartillas-online/?ioutput=ajax&tab=4&esp=408&loc=403&q=&plan=111";

/// Google Geocoding API endpoint
pub const DEFAULT_GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Environment variable names
pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
pub const COOKIE: &str = "COOKIE";
pub const MY_ADDRESS: &str = "MY_ADDRESS";
pub const LISTING_URL: &str = "LISTING_URL";
pub const GEOCODE_URL: &str = "GEOCODE_URL";

/// Main configuration structure, read once at startup
#[derive(Clone)]
pub struct Config {
    /// Credential for the geocoding service
    pub google_api_key: String,

    /// Session cookie that gets past the listing page's bot protection
    pub cookie: String,

    /// Free-text home address distances are measured from
    pub my_address: String,

    /// Provider directory page to scrape
    pub listing_url: String,

    /// Geocoding endpoint accepting `address` and `key` query parameters
    pub geocode_url: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Credentials stay out of logs
        f.debug_struct("Config")
            .field("google_api_key", &"<redacted>")
            .field("cookie", &"<redacted>")
            .field("my_address", &self.my_address)
            .field("listing_url", &self.listing_url)
            .field("geocode_url", &self.geocode_url)
            .finish()
    }
}
