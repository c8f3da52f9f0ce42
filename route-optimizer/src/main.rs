use route_optimizer::config::AppConfig;
use route_optimizer::network::Network;
use route_optimizer::planner::default_itineraries;
use route_optimizer::scoring::TransferDb;
use route_optimizer::status::StaticStatus;
use route_optimizer::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;

    // Missing or malformed datasets degrade to empty models
    let network = Network::load(&config.network_path());
    let transfers = TransferDb::load(&config.transfers_path());

    let mut state = AppState::new(network, transfers).with_fallback(default_itineraries());
    if let Some(path) = &config.status_file {
        state = state.with_status(StaticStatus::load(path));
    }

    let static_dir = config.static_dir.to_string_lossy();
    let app = create_router(state, &static_dir);

    let addr = config.bind_addr;
    info!(%addr, "Route optimizer listening");
    info!("  GET  /health               - Health check");
    info!("  GET  /api/network-stations - All stations");
    info!("  GET  /api/network-lines    - All lines");
    info!("  GET  /api/routes           - Find and score routes");
    info!("  POST /score-route          - Score a candidate route");
    info!("  POST /compare              - Rank candidate routes");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
