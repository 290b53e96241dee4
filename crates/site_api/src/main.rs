//! Binary entrypoint for the portfolio proxy service.

use anyhow::Context;
use site_api::config::ApiConfig;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "site_api=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = ApiConfig::from_env().context("failed to load site_api configuration")?;
    site_api::serve(config).await
}
