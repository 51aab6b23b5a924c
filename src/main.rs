//! Shift pricing HTTP service.
//!
//! Environment:
//! - `PRICING_CONFIG_DIR`: directory holding `pricing.yaml` and `penalties.yaml`
//! - `BIND_ADDR`: listen address
//! - `RUST_LOG`: tracing filter

use std::env;

use shift_pricing::api::{AppState, create_router};
use shift_pricing::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_LOG_LEVEL: &str = "info";

fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(DEFAULT_LOG_LEVEL)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_tracing()?;

    let config_dir = env::var("PRICING_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        validation_mode = ?config.validation_mode(),
        "Loaded pricing configuration"
    );

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(bind_addr = %bind_addr, "Shift pricing service listening");

    axum::serve(listener, create_router(AppState::new(config))).await?;
    Ok(())
}
