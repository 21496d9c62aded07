use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use snsfetch_accounts::AccountResolver;
use snsfetch_api::{build_router, AppState};
use snsfetch_common::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("snsfetch=info".parse()?))
        .init();

    let config = AppConfig::from_env()?;

    let state = Arc::new(AppState::new(AccountResolver::from_config(&config)));
    let app = build_router(state);

    let addr = format!("{}:{}", config.api_host, config.api_port);
    info!("SNS Fetcher API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
