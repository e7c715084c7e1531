//! find-dentist main entry point
//!
//! Takes no arguments. Configuration comes from the environment (see
//! [`find_dentist::config`]); the report goes to stdout and logs go to stderr.

use anyhow::Context;
use find_dentist::config::load_config;
use find_dentist::{find_dentists, print_report};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();

    // Configuration problems must surface before any request goes out
    let config = load_config().context("Failed to load configuration")?;
    tracing::debug!("Configuration: {:?}", config);

    let ranked = match find_dentists(&config).await {
        Ok(ranked) => ranked,
        Err(e) => {
            tracing::error!("Dentist search failed: {}", e);
            return Err(e.into());
        }
    };

    print_report(&ranked).context("Failed to write report")?;

    Ok(())
}

/// Sets up the logging/tracing subscriber
///
/// `RUST_LOG` wins when set; otherwise this crate logs at info and everything
/// else at warn.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("find_dentist=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
