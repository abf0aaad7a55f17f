//! Contact Book - Main entry point
//!
//! Loads configuration, sets up logging and creates an empty address book.
//! Interaction beyond that (CLI, storage, UI) is left to embedding callers,
//! which take the configured page size for `AddressBook::iter_paged`.

use anyhow::Result;
use contact_book::{AddressBook, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so the log level fallback can come from it
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only)
    let (filter, bad_level) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => match EnvFilter::try_new(&config.log_level) {
            Ok(filter) => (filter, None),
            Err(e) => (EnvFilter::new("error"), Some(e)),
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(e) = bad_level {
        error!("Invalid LOG_LEVEL {:?}, using \"error\": {}", config.log_level, e);
    }

    info!("Configuration loaded successfully");

    let book = AddressBook::new();
    info!(
        records = book.len(),
        page_size = config.page_size,
        "Address book ready"
    );

    Ok(())
}
