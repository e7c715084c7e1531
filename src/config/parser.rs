use crate::config::types::{
    Config, COOKIE, DEFAULT_GEOCODE_URL, DEFAULT_LISTING_URL, GEOCODE_URL, GOOGLE_API_KEY,
    LISTING_URL, MY_ADDRESS,
};
use crate::config::validation::validate;
use crate::{ConfigError, ConfigResult};
use std::collections::HashMap;
use std::path::Path;

impl Config {
    /// Builds a configuration from a key lookup
    ///
    /// The three required values must be present; the URLs fall back to the fixed
    /// defaults. The result is validated before it is returned.
    ///
    /// # Arguments
    ///
    /// * `lookup` - Returns the value for a variable name, or `None` if unset
    ///
    /// # Example
    ///
    /// ```
    /// use find_dentist::Config;
    ///
    /// let config = Config::from_lookup(|key| match key {
    ///     "GOOGLE_API_KEY" => Some("key".to_string()),
    ///     "COOKIE" => Some("session=abc".to_string()),
    ///     "MY_ADDRESS" => Some("Av. Corrientes 1234, CABA".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(config.cookie, "session=abc");
    /// ```
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| lookup(key).ok_or_else(|| ConfigError::Missing(key.to_string()));

        let config = Config {
            google_api_key: required(GOOGLE_API_KEY)?,
            cookie: required(COOKIE)?,
            my_address: required(MY_ADDRESS)?,
            listing_url: lookup(LISTING_URL).unwrap_or_else(|| DEFAULT_LISTING_URL.to_string()),
            geocode_url: lookup(GEOCODE_URL).unwrap_or_else(|| DEFAULT_GEOCODE_URL.to_string()),
        };

        validate(&config)?;

        Ok(config)
    }
}

/// Loads the configuration from the process environment
///
/// Values from a `.env` file in the working directory fill in any variable the
/// process environment does not set.
///
/// # Returns
///
/// * `Ok(Config)` - All required values present and valid
/// * `Err(ConfigError)` - A value is missing or invalid, or `.env` is unreadable
pub fn load_config() -> ConfigResult<Config> {
    load_config_from(Path::new(".env"), |key| std::env::var(key).ok())
}

/// Loads the configuration from an environment lookup backed by a dotenv file
///
/// `env` always wins; the file only supplies variables `env` leaves unset.
///
/// # Arguments
///
/// * `env_file` - Path of the dotenv file; a missing file is treated as empty
/// * `env` - Returns the environment value for a variable name, or `None`
pub fn load_config_from<F>(env_file: &Path, env: F) -> ConfigResult<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let file_vars = read_env_file(env_file)?;

    Config::from_lookup(|key| env(key).or_else(|| file_vars.get(key).cloned()))
}

/// Reads a dotenv-style file into a map without touching the process environment
///
/// A missing file yields an empty map.
pub fn read_env_file(path: &Path) -> ConfigResult<HashMap<String, String>> {
    if !path.exists() {
        return Ok(HashMap::new());
    }

    let mut vars = HashMap::new();
    for item in dotenvy::from_path_iter(path)? {
        let (key, value) = item?;
        vars.insert(key, value);
    }

    tracing::debug!("Read {} entries from {}", vars.len(), path.display());

    Ok(vars)
}
