//! Usage API - Entry point.

use copilot_client::CopilotClient;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use usage_api::{
    api::{cors_layer, create_router, AppState},
    config::Config,
};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Usage API");

    let client = match CopilotClient::new(
        &config.copilot.messages_url,
        &config.copilot.reports_url,
        config.copilot.timeout,
    ) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create copilot client: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        messages_url = %config.copilot.messages_url,
        reports_url = %config.copilot.reports_url,
        "Upstream sources configured"
    );

    let cors = match cors_layer(&config.cors.allowed_origin) {
        Ok(layer) => layer,
        Err(e) => {
            error!(origin = %config.cors.allowed_origin, "Invalid CORS origin: {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState::new(Arc::new(client), config.usage.max_concurrent_lookups);
    let app = create_router(state, cors);

    // Bind to address
    let addr = SocketAddr::new(config.server.listen_addr, config.server.port);

    info!("Listening on {}", addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Run server
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
