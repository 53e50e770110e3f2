use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use flight_server::cache::CacheConfig;
use flight_server::carriers::CarrierNames;
use flight_server::catalog::SegmentCatalog;
use flight_server::planner::SearchConfig;
use flight_server::web::{AppState, create_router};

/// Catalog file used when `FLIGHTS_CATALOG` is not set.
const DEFAULT_CATALOG: &str = "data/flights.json";

/// Listen address used when `FLIGHT_SERVER_ADDR` is not set.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let catalog_path =
        std::env::var("FLIGHTS_CATALOG").unwrap_or_else(|_| DEFAULT_CATALOG.to_string());
    let addr: SocketAddr = std::env::var("FLIGHT_SERVER_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
        .expect("FLIGHT_SERVER_ADDR must be a socket address");

    // Load the catalog (fail fast if unreadable)
    let catalog = SegmentCatalog::load(&catalog_path).expect("Failed to load flight catalog");
    info!(
        path = %catalog_path,
        segments = catalog.len(),
        dropped = catalog.dropped(),
        airports = catalog.airports().len(),
        "Loaded flight catalog"
    );

    // Names published in the catalog win over the builtin table
    let carriers = CarrierNames::builtin().with_overrides(catalog.carrier_names());

    let state = AppState::new(
        catalog,
        carriers,
        SearchConfig::default(),
        &CacheConfig::default(),
    );
    let app = create_router(state);

    info!(%addr, "Flight planner listening");
    info!("  GET  /health         - Health check");
    info!("  GET  /airports       - Airports in the catalog");
    info!("  GET  /search         - Search itineraries (JSON)");
    info!("  GET  /search/report  - Search itineraries (text report)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
