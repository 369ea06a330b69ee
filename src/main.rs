//! Contact Book - Main entry point
//!
//! Loads the address book, runs the interactive assistant on stdin/stdout,
//! and saves the book when the session ends.

use anyhow::Result;
use contact_book::{Config, JsonFileRepository};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only, stdout is the console transcript)
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Using address book at {}", config.book_path.display());
    let repository = JsonFileRepository::new(config.book_path);

    let stdin = io::stdin();
    if let Err(e) = contact_book::session::run(&repository, stdin.lock(), io::stdout()) {
        error!("Session ended with an error: {:#}", e);
        return Err(e);
    }

    info!("Contact book shutdown complete");
    Ok(())
}
