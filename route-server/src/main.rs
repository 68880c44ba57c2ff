use std::net::SocketAddr;

use route_server::chargemap::{ChargeMapClient, ChargeMapConfig};
use route_server::directions::{DirectionsClient, DirectionsConfig};
use route_server::planner::PlannerConfig;
use route_server::web::{AppState, create_router};

/// Default listen port.
const DEFAULT_PORT: u16 = 3001;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "route_server=debug,info".into()),
        )
        .init();

    // Get credentials from environment
    let maps_key = std::env::var("GOOGLE_MAPS_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: GOOGLE_MAPS_API_KEY not set. Directions calls will fail.");
        String::new()
    });
    // Open Charge Map works keyless, but a key raises the rate limits.
    let chargemap_key = std::env::var("OPENCHARGEMAP_API_KEY").ok();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    // Create upstream clients
    let directions = DirectionsClient::new(DirectionsConfig::new(maps_key))
        .expect("Failed to create directions client");
    let chargemap = ChargeMapClient::new(ChargeMapConfig::new(chargemap_key))
        .expect("Failed to create charge map client");

    // Build app state
    let state = AppState::new(directions, chargemap, PlannerConfig::default());

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("EV Trip Planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health                              - Health check");
    println!("  POST /api/directions                      - Compute a route");
    println!("  GET  /api/charging-stations               - Stations near a point");
    println!("  POST /api/charging-stations-along-route   - Stations along a route");
    println!("  GET  /api/geocode                         - Address lookup");
    println!("  POST /api/trip-plan                       - Plan a trip with charging stops");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
