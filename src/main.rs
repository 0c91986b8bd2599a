use cityrisk::config::Config;
use cityrisk::store::ZoneStore;
use cityrisk::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cityrisk=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting CityRisk API server");

    // Load the zone dataset. The service cannot answer anything without it,
    // so a read or parse failure aborts startup.
    let store = ZoneStore::load(&config.dataset_path)?;
    tracing::info!(
        "Loaded {} zones from {}",
        store.len(),
        config.dataset_path.display()
    );

    // Create application state
    let state = Arc::new(AppState { store });

    // Build router with CORS and tracing.
    // Wide-open CORS is a fixed policy for this demo service: the front-end
    // is served from a different port.
    let app = cityrisk::routes::create_router(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
