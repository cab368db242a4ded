//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the state
//! store and service layer. Transition handlers spawn the requested upstream
//! fetches fire-and-forget and return the refreshed view immediately; clients
//! observe fetch completion through the loading flags on subsequent
//! `GET /v1/view` calls.

use axum::{extract::State, Json};

use super::dto::{
    DashboardView, HealthResponse, MapConfigResponse, ParkInfo, SelectDateRequest,
    SelectHourRequest, SelectParkRequest,
};
use super::error::AppError;
use super::state::AppState;
use crate::config::MAP_STYLE_URL;
use crate::models::{Park, FINLAND_BOUNDS};
use crate::services::refresh;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint reporting the loaded dataset.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        counters: state.counters.len(),
        dataset_fingerprint: state.counters.fingerprint().to_string(),
    }))
}

/// GET /v1/map-config
///
/// Static map configuration: style, access token, and the park tabs.
pub async fn get_map_config(State(state): State<AppState>) -> HandlerResult<MapConfigResponse> {
    Ok(Json(MapConfigResponse {
        style_url: MAP_STYLE_URL.to_string(),
        access_token: state.config.mapbox_token.clone(),
        finland_bounds: FINLAND_BOUNDS,
        parks: Park::ALL.into_iter().map(ParkInfo::for_park).collect(),
    }))
}

/// GET /v1/view
///
/// The assembled view model for the current state.
pub async fn get_view(State(state): State<AppState>) -> HandlerResult<DashboardView> {
    Ok(Json(state.store.view(&state.counters)))
}

/// PUT /v1/selection/park
///
/// Switch the park tab; refits the view bounds and refetches sun times.
pub async fn select_park(
    State(state): State<AppState>,
    Json(request): Json<SelectParkRequest>,
) -> HandlerResult<DashboardView> {
    let transition = state.store.select_park(request.park);
    refresh::spawn_transition(&state.store, &state.visits_api, &state.sun_api, transition);
    Ok(Json(state.store.view(&state.counters)))
}

/// PUT /v1/selection/date
///
/// Switch the date; refetches the visit snapshot and sun times.
pub async fn select_date(
    State(state): State<AppState>,
    Json(request): Json<SelectDateRequest>,
) -> HandlerResult<DashboardView> {
    let transition = state.store.select_date(request.date);
    refresh::spawn_transition(&state.store, &state.visits_api, &state.sun_api, transition);
    Ok(Json(state.store.view(&state.counters)))
}

/// PUT /v1/selection/hour
///
/// Move the hour slider; pure re-render, no fetch.
pub async fn select_hour(
    State(state): State<AppState>,
    Json(request): Json<SelectHourRequest>,
) -> HandlerResult<DashboardView> {
    state.store.select_hour(request.hour)?;
    Ok(Json(state.store.view(&state.counters)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::io;
    use crate::models::{Selection, SunTimes};
    use crate::state::DashboardStore;
    use crate::upstream::{LocalSunApi, LocalVisitsApi, SunApi, VisitsApi};
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn app_state() -> AppState {
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
        AppState::new(
            DashboardStore::new(selection),
            counters,
            Arc::new(LocalVisitsApi::new()) as Arc<dyn VisitsApi>,
            Arc::new(LocalSunApi::new(sun)) as Arc<dyn SunApi>,
            Arc::new(ServerConfig::default()),
        )
    }

    #[tokio::test]
    async fn test_health_check_reports_dataset() {
        let state = app_state();
        let Json(response) = health_check(State(state.clone())).await.unwrap();
        assert_eq!(response.status, "ok");
        assert_eq!(response.counters, state.counters.len());
        assert_eq!(response.dataset_fingerprint.len(), 64);
    }

    #[tokio::test]
    async fn test_map_config_lists_both_parks() {
        let Json(response) = get_map_config(State(app_state())).await.unwrap();
        assert_eq!(response.parks.len(), 2);
        assert_eq!(response.style_url, MAP_STYLE_URL);
        assert_eq!(response.finland_bounds, FINLAND_BOUNDS);
    }

    #[tokio::test]
    async fn test_select_park_returns_refitted_view() {
        let state = app_state();
        let Json(view) = select_park(
            State(state),
            Json(SelectParkRequest {
                park: Park::Nuuksio,
            }),
        )
        .await
        .unwrap();
        assert_eq!(view.selection.park, Park::Nuuksio);
        assert_eq!(view.fit_bounds, Park::Nuuksio.bounds());
        assert!(view.sun_loading);
    }

    #[tokio::test]
    async fn test_select_date_marks_visits_loading() {
        let state = app_state();
        let Json(view) = select_date(
            State(state),
            Json(SelectDateRequest {
                date: NaiveDate::from_ymd_opt(2019, 11, 25).unwrap(),
            }),
        )
        .await
        .unwrap();
        assert!(view.visits_loading);
        assert_eq!(
            view.selection.date,
            NaiveDate::from_ymd_opt(2019, 11, 25).unwrap()
        );
    }

    #[tokio::test]
    async fn test_select_hour_rejects_out_of_range() {
        let state = app_state();
        let err = select_hour(State(state), Json(SelectHourRequest { hour: 24 }))
            .await
            .unwrap_err();
        match err {
            AppError::BadRequest(msg) => assert!(msg.contains("24")),
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_select_hour_re_renders_without_fetch() {
        let state = app_state();
        let Json(view) = select_hour(State(state.clone()), Json(SelectHourRequest { hour: 3 }))
            .await
            .unwrap();
        assert_eq!(view.selection.hour, 3);
        assert!(!view.visits_loading);
        assert!(!view.sun_loading);
    }
}
