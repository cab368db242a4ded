//! Fire-and-forget fetch orchestration.
//!
//! Each selection transition hands back fetch tickets; this module performs
//! the upstream calls and applies the outcomes through the tickets. In-flight
//! requests are never cancelled when the selection changes again; staleness is
//! handled entirely by the store's generation check. Failures are logged and
//! only clear the loading flag, so there is no retry and no user-visible
//! error.

use std::sync::Arc;

use crate::state::{DashboardStore, SunTicket, Transition, VisitsTicket};
use crate::upstream::{SunApi, VisitsApi};

/// Perform one visits fetch and apply it through the ticket.
pub async fn refresh_visits(
    store: DashboardStore,
    api: Arc<dyn VisitsApi>,
    ticket: VisitsTicket,
) {
    let outcome = api.fetch_snapshot(ticket.date).await;
    store.apply_visits(ticket, outcome);
}

/// Perform one sunrise/sunset fetch for the park's center and apply it.
pub async fn refresh_sun(store: DashboardStore, api: Arc<dyn SunApi>, ticket: SunTicket) {
    let (lat, lng) = ticket.park.center();
    let outcome = api.fetch_sun_times(lat, lng, ticket.date).await;
    store.apply_sun(ticket, outcome);
}

/// Spawn the fetches requested by a transition without awaiting them.
pub fn spawn_transition(
    store: &DashboardStore,
    visits_api: &Arc<dyn VisitsApi>,
    sun_api: &Arc<dyn SunApi>,
    transition: Transition,
) {
    if let Some(ticket) = transition.visits {
        tokio::spawn(refresh_visits(
            store.clone(),
            Arc::clone(visits_api),
            ticket,
        ));
    }
    if let Some(ticket) = transition.sun {
        tokio::spawn(refresh_sun(store.clone(), Arc::clone(sun_api), ticket));
    }
}
