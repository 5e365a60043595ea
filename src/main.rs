//! Assistant bot - main entry point
//!
//! Interactive command-line assistant for managing an address book of
//! contacts, phone numbers and birthdays.

use abook_assistant::{repl, AddressBook, Config};
use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging is up; failures go to stderr directly.
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only, stdout belongs to the conversation).
    // RUST_LOG wins over the configured level when both are set.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");
    info!("Birthday window: {} days", config.birthday_window_days);

    let mut book = AddressBook::new();
    repl::run(&mut book, &config)?;

    info!("Assistant bot shutdown complete");
    Ok(())
}
