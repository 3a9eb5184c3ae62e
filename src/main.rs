//! Seed the `advocates` table with synthetic records.
//!
//! Usage: `seed_advocates [count]` (default 10000)
//!
//! Environment variables:
//! - DATABASE_URL: PostgreSQL connection string (required, may come from `.env`)
//! - RUST_LOG: log filter for diagnostics on stderr (default: warn)

use anyhow::Result;
use log::info;
use seed_advocates::config::{redact_url, Config};
use seed_advocates::writer::PgSink;
use std::io;
use std::process;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    info!("Connecting to {}", redact_url(&config.database_url));
    let sink = PgSink::connect(&config.database_url).await?;

    config
        .seed_options()
        .build()?
        .seed(rand::thread_rng(), sink, io::stdout())
        .await?;

    Ok(())
}
