use std::path::PathBuf;

use anyhow::{Context, Result};
use world_info::{WorldInfoConfig, WorldInfoService, telemetry, web};

#[tokio::main]
async fn main() -> Result<()> {
    // Optional first argument: path to a TOML config file
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = WorldInfoConfig::load_from_path(config_path)?;

    telemetry::init(&config.logging)?;
    tracing::info!("Starting world-info v{}", world_info::VERSION);

    let service =
        WorldInfoService::from_config(&config).context("Failed to create upstream clients")?;

    web::run(&config, service).await
}
