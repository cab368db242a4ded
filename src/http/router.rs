//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/map-config", get(handlers::get_map_config))
        .route("/view", get(handlers::get_view))
        .route("/selection/park", put(handlers::select_park))
        .route("/selection/date", put(handlers::select_date))
        .route("/selection/hour", put(handlers::select_hour));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::io;
    use crate::models::{Park, Selection, SunTimes};
    use crate::state::DashboardStore;
    use crate::upstream::{LocalSunApi, LocalVisitsApi, SunApi, VisitsApi};
    use chrono::NaiveDate;
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let counters = Arc::new(io::load_bundled_counters().unwrap());
        let selection = Selection::new(
            Park::PallasYllastunturi,
            NaiveDate::from_ymd_opt(2019, 11, 24).unwrap(),
            12,
        )
        .unwrap();
        let sun = SunTimes {
            sunrise: "2019-11-24T07:12:04Z".parse().unwrap(),
            sunset: "2019-11-24T14:02:51Z".parse().unwrap(),
        };
        let state = AppState::new(
            DashboardStore::new(selection),
            counters,
            Arc::new(LocalVisitsApi::new()) as Arc<dyn VisitsApi>,
            Arc::new(LocalSunApi::new(sun)) as Arc<dyn SunApi>,
            Arc::new(ServerConfig::default()),
        );
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
