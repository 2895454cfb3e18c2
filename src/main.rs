//! bazaar-gateway server entry point.
//!
//! Starts the Axum HTTP server exposing the directory endpoints.

use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use bazaar_gateway::api;
use bazaar_gateway::app_state::AppState;
use bazaar_gateway::config::GatewayConfig;
use bazaar_gateway::persistence::FileStore;
use bazaar_gateway::service::DirectoryService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env().map_err(|e| anyhow::anyhow!(e.to_string()))?;
    tracing::info!(addr = %config.listen_addr, data_file = %config.data_file.display(), "starting bazaar-gateway");

    // Open the record store and seed the id allocator
    let record_store = FileStore::new(config.data_file);
    let directory = Arc::new(DirectoryService::open(record_store).await?);

    // Build application state
    let app_state = AppState { directory };

    // Build router
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    #[cfg(feature = "swagger-ui")]
    let app = app.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", <api::ApiDoc as utoipa::OpenApi>::openapi()),
    );

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
