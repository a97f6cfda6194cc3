use std::sync::Arc;

use server::clients::lichess::LichessClient;
use server::config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env();
    tracing::info!(
        endpoint = %config.cloud_eval_url,
        timeout_secs = config.cloud_eval_timeout.as_secs(),
        max_attempts = config.max_attempts,
        "Cloud eval configured"
    );

    let client = Arc::new(LichessClient::new(&config)?);

    let addr = format!("{}:{}", config.host, config.port);
    let app = server::app(config, client);

    tracing::info!("Starting server on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
