//! Crochet shop API server
//!
//! Reads its configuration from the YAML file named by `CROCHET_CONFIG`
//! (built-in defaults otherwise) and serves the data file it points to.

use anyhow::{Context, Result};
use crochet::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("crochet=info,tower_http=info")),
        )
        .init();

    let config = ShopConfig::from_env().context("Failed to load configuration")?;

    let store = JsonFileStore::open(&config.data_file)
        .await
        .with_context(|| format!("Failed to open data file {}", config.data_file.display()))?;

    tracing::info!(data_file = %store.path().display(), "Using JSON data file");

    ServerBuilder::new()
        .with_config(config)
        .with_store(store)
        .serve()
        .await
}
