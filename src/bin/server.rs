//! Visitmap HTTP Server Binary
//!
//! Entry point for the dashboard REST API. It loads the counters dataset,
//! seeds the initial selection, spawns the initial upstream fetches, and
//! starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin visitmap-server
//!
//! # With an external counters dataset and visits service
//! COUNTERS_PATH=/srv/counters.json VISITS_API_BASE=https://visits.internal \
//!   cargo run --bin visitmap-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `VISITS_API_BASE`: Base URL of the visits service
//! - `SUN_API_BASE`: Base URL of the sunrise-sunset service
//! - `MAPBOX_ACCESS_TOKEN`: Map-provider token handed to the frontend
//! - `COUNTERS_PATH`: Counters dataset override file
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use visitmap::config::ServerConfig;
use visitmap::http::{create_router, AppState};
use visitmap::io;
use visitmap::models::{Park, Selection};
use visitmap::services::refresh;
use visitmap::state::DashboardStore;
use visitmap::upstream::{HttpSunApi, HttpVisitsApi, SunApi, VisitsApi};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Visitmap HTTP Server");

    let config = ServerConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;

    // Load the counters dataset (bundled unless overridden)
    let counters = match &config.counters_path {
        Some(path) => io::load_counters_from_path(path)?,
        None => io::load_bundled_counters()?,
    };
    info!(
        "Loaded {} counters (dataset fingerprint {})",
        counters.len(),
        counters.fingerprint()
    );

    // Upstream clients share one connection pool
    let client = reqwest::Client::builder().build()?;
    let visits_api: Arc<dyn VisitsApi> =
        Arc::new(HttpVisitsApi::new(client.clone(), config.visits_api_base.clone()));
    let sun_api: Arc<dyn SunApi> =
        Arc::new(HttpSunApi::new(client, config.sun_api_base.clone()));

    // Seed the initial selection and kick off the first fetches
    let initial = Selection::new(Park::PallasYllastunturi, Utc::now().date_naive(), 12)?;
    let store = DashboardStore::new(initial);
    refresh::spawn_transition(&store, &visits_api, &sun_api, store.begin_initial_fetch());

    let state = AppState::new(
        store,
        Arc::new(counters),
        visits_api,
        sun_api,
        Arc::new(config.clone()),
    );
    let app = create_router(state);

    let addr: SocketAddr = config.bind_addr().parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
