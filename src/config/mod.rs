//! Configuration module for find-dentist
//!
//! Configuration comes from environment variables, optionally backed by a `.env`
//! file, and is read exactly once at startup.
//!
//! # Example
//!
//! ```no_run
//! use find_dentist::config::load_config;
//!
//! let config = load_config().unwrap();
//! println!("Measuring distances from: {}", config.my_address);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, DEFAULT_GEOCODE_URL, DEFAULT_LISTING_URL};

// Re-export parser functions
pub use parser::{load_config, load_config_from, read_env_file};
