//! Customer Support API - Main Entry Point

use customer_support_api::{build_router, ApiConfig, ApiState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = ApiConfig::path_from_env();
    let loaded = ApiConfig::load(&config_path);
    let config = loaded
        .as_ref()
        .cloned()
        .unwrap_or_default()
        .with_env_overrides();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Customer Support API v{}", env!("CARGO_PKG_VERSION"));
    if let Err(e) = loaded {
        tracing::warn!(path = %config_path, error = %e, "Config unavailable, using defaults");
    }

    let app = build_router(ApiState::default(), &config);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Customer Support API listening on {}", config.bind_addr);
    if config.enable_docs {
        tracing::info!("API docs at http://{}/docs", config.bind_addr);
    }

    axum::serve(listener, app).await?;

    Ok(())
}
