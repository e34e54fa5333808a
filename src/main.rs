//! Payment Token Service - Main Application Entry Point
//!
//! # Startup Flow
//!
//! 1. Initialize logging
//! 2. Load configuration from environment variables
//! 3. Construct the service registry and register configured (service, method) pairs
//! 4. Build HTTP router
//! 5. Start server on configured port

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use payment_token_service::{app, config::Config, registry::ServiceRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Build the registry and register every configured pair.
    // The environment must register everything it considers valid before
    // traffic is served; the service has no discovery mechanism of its own.
    let registry = Arc::new(ServiceRegistry::new());
    for (service_id, method) in config.service_pairs()? {
        registry.register(&service_id, &method);
        tracing::info!("Registered {}/{}", service_id, method);
    }
    tracing::info!("{} service method(s) registered", registry.pair_count());

    // Build HTTP router with routes and middleware
    let app = app(Arc::clone(&registry));

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}
