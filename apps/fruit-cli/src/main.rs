//! # Fruit Store CLI Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  main                                                                  │
//! │   ├── init_tracing()                                                   │
//! │   ├── CliConfig::load()        ── Err ──► print, exit 1               │
//! │   ├── Database::new(config)    ── Err ──► print, exit 1               │
//! │   ├── run_session(&db)         ── menu loop until 6 / EOF             │
//! │   └── db.close()               ── always, then "connection closed"    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process;

use fruit_cli::config::CliConfig;
use fruit_cli::{init_tracing, run_session};
use fruit_db::Database;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = match CliConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    };
    info!(url = %config.database.redacted_url(), "Configuration loaded");

    let db = match Database::new(config.database.clone()).await {
        Ok(db) => db,
        Err(e) => {
            error!(error = %e, "Could not connect to database");
            eprintln!("Failed to connect to database: {e}");
            process::exit(1);
        }
    };
    println!("Connected to database");

    let session = run_session(&db, &config).await;

    db.close().await;
    println!("Database connection closed");

    session?;
    Ok(())
}
