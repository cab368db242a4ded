//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::models::CounterSet;
use crate::state::DashboardStore;
use crate::upstream::{SunApi, VisitsApi};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: DashboardStore,
    pub counters: Arc<CounterSet>,
    pub visits_api: Arc<dyn VisitsApi>,
    pub sun_api: Arc<dyn SunApi>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(
        store: DashboardStore,
        counters: Arc<CounterSet>,
        visits_api: Arc<dyn VisitsApi>,
        sun_api: Arc<dyn SunApi>,
        config: Arc<ServerConfig>,
    ) -> Self {
        Self {
            store,
            counters,
            visits_api,
            sun_api,
            config,
        }
    }
}
