use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::models::{
    BoundingBox, CounterSet, FetchedSnapshot, Park, Selection, SelectionError, SunTimes,
};
use crate::services::markers::{self, MarkerDisplay};
use crate::upstream::UpstreamError;

/// Ticket authorizing one visits fetch. Outcomes are applied back through the
/// ticket; only the latest generation wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitsTicket {
    pub generation: u64,
    pub date: NaiveDate,
}

/// Ticket authorizing one sunrise/sunset fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTicket {
    pub generation: u64,
    pub date: NaiveDate,
    pub park: Park,
}

/// Fetches requested by a selection transition.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transition {
    pub visits: Option<VisitsTicket>,
    pub sun: Option<SunTicket>,
}

#[derive(Debug, Clone)]
struct DashboardState {
    selection: Selection,
    snapshot: Option<FetchedSnapshot>,
    snapshot_date: Option<NaiveDate>,
    sun_times: Option<SunTimes>,
    visits_loading: bool,
    sun_loading: bool,
    visits_generation: u64,
    sun_generation: u64,
}

/// Shared dashboard state. Cloning is cheap and clones observe the same state.
#[derive(Clone)]
pub struct DashboardStore {
    inner: Arc<RwLock<DashboardState>>,
}

impl DashboardStore {
    /// Create a store with the given initial selection and no data loaded.
    pub fn new(initial: Selection) -> Self {
        Self {
            inner: Arc::new(RwLock::new(DashboardState {
                selection: initial,
                snapshot: None,
                snapshot_date: None,
                sun_times: None,
                visits_loading: false,
                sun_loading: false,
                visits_generation: 0,
                sun_generation: 0,
            })),
        }
    }

    pub fn selection(&self) -> Selection {
        self.inner.read().selection
    }

    /// Issue tickets for the current selection without changing it. Used once
    /// at startup to populate the initial view.
    pub fn begin_initial_fetch(&self) -> Transition {
        let mut state = self.inner.write();
        Transition {
            visits: Some(Self::next_visits_ticket(&mut state)),
            sun: Some(Self::next_sun_ticket(&mut state)),
        }
    }

    /// Switch the selected park. The map refits to the park's bounds (via the
    /// view) and sun times are refetched for the new location.
    pub fn select_park(&self, park: Park) -> Transition {
        let mut state = self.inner.write();
        state.selection.park = park;
        Transition {
            visits: None,
            sun: Some(Self::next_sun_ticket(&mut state)),
        }
    }

    /// Switch the selected date. Both the visit snapshot and the sun times
    /// depend on it.
    pub fn select_date(&self, date: NaiveDate) -> Transition {
        let mut state = self.inner.write();
        state.selection.date = date;
        Transition {
            visits: Some(Self::next_visits_ticket(&mut state)),
            sun: Some(Self::next_sun_ticket(&mut state)),
        }
    }

    /// Move the hour slider. Pure re-rendering, no fetch.
    pub fn select_hour(&self, hour: u8) -> Result<Transition, SelectionError> {
        let mut state = self.inner.write();
        let selection = state.selection;
        state.selection = Selection::new(selection.park, selection.date, hour)?;
        Ok(Transition::default())
    }

    /// Apply a visits fetch outcome. Responses for a superseded generation are
    /// discarded entirely, including their error path: the newer request owns
    /// the loading flag.
    pub fn apply_visits(&self, ticket: VisitsTicket, outcome: Result<FetchedSnapshot, UpstreamError>) {
        let mut state = self.inner.write();
        if ticket.generation != state.visits_generation {
            log::debug!(
                "discarding stale visits response for {} (generation {} != {})",
                ticket.date,
                ticket.generation,
                state.visits_generation
            );
            return;
        }
        state.visits_loading = false;
        match outcome {
            Ok(snapshot) => {
                state.snapshot = Some(snapshot);
                state.snapshot_date = Some(ticket.date);
            }
            Err(err) => {
                // Prior snapshot stays in place; worst case is a neutral map.
                log::warn!("visits fetch for {} failed: {}", ticket.date, err);
            }
        }
    }

    /// Apply a sunrise/sunset fetch outcome, with the same staleness rules as
    /// [`apply_visits`](Self::apply_visits).
    pub fn apply_sun(&self, ticket: SunTicket, outcome: Result<SunTimes, UpstreamError>) {
        let mut state = self.inner.write();
        if ticket.generation != state.sun_generation {
            log::debug!(
                "discarding stale sun response for {:?}/{} (generation {} != {})",
                ticket.park,
                ticket.date,
                ticket.generation,
                state.sun_generation
            );
            return;
        }
        state.sun_loading = false;
        match outcome {
            Ok(times) => state.sun_times = Some(times),
            Err(err) => {
                log::warn!(
                    "sun times fetch for {:?}/{} failed: {}",
                    ticket.park,
                    ticket.date,
                    err
                );
            }
        }
    }

    /// Assemble the render model for the current state.
    pub fn view(&self, counters: &CounterSet) -> DashboardView {
        let state = self.inner.read();
        let markers = markers::build_markers(
            counters.counters(),
            state.snapshot.as_ref(),
            state.selection.hour,
        );
        DashboardView {
            selection: state.selection,
            fit_bounds: state.selection.park.bounds(),
            markers,
            sun_times: state.sun_times,
            snapshot_date: state.snapshot_date,
            snapshot_max_visits: state.snapshot.as_ref().map(|s| s.max_visits),
            visits_loading: state.visits_loading,
            sun_loading: state.sun_loading,
        }
    }

    fn next_visits_ticket(state: &mut DashboardState) -> VisitsTicket {
        state.visits_generation += 1;
        state.visits_loading = true;
        VisitsTicket {
            generation: state.visits_generation,
            date: state.selection.date,
        }
    }

    fn next_sun_ticket(state: &mut DashboardState) -> SunTicket {
        state.sun_generation += 1;
        state.sun_loading = true;
        SunTicket {
            generation: state.sun_generation,
            date: state.selection.date,
            park: state.selection.park,
        }
    }
}

/// Everything the frontend needs to render one dashboard frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    pub selection: Selection,
    /// Bounding box the map should fit to for the selected park.
    pub fit_bounds: BoundingBox,
    pub markers: Vec<MarkerDisplay>,
    pub sun_times: Option<SunTimes>,
    /// Date the loaded snapshot belongs to; `None` until the first fetch lands.
    pub snapshot_date: Option<NaiveDate>,
    pub snapshot_max_visits: Option<u64>,
    pub visits_loading: bool,
    pub sun_loading: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BaselineValue, Counter, VisitsByHour};
    use std::collections::HashMap;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, 11, day).unwrap()
    }

    fn store() -> DashboardStore {
        DashboardStore::new(Selection::new(Park::PallasYllastunturi, date(24), 12).unwrap())
    }

    fn counter_set() -> CounterSet {
        let counters = vec![Counter {
            id: "a".to_string(),
            lat: 68.0,
            long: 24.0,
            baseline: BaselineValue { visits: 50 },
        }];
        CounterSet::new(counters, "test".to_string())
    }

    fn snapshot(visits: u64, max_visits: u64) -> FetchedSnapshot {
        let mut data = HashMap::new();
        data.insert("a".to_string(), VisitsByHour(vec![visits; 24]));
        FetchedSnapshot {
            data_by_counters: data,
            max_visits,
        }
    }

    #[test]
    fn test_select_date_issues_both_tickets() {
        let store = store();
        let transition = store.select_date(date(25));
        let visits = transition.visits.unwrap();
        let sun = transition.sun.unwrap();
        assert_eq!(visits.date, date(25));
        assert_eq!(sun.date, date(25));
        assert_eq!(sun.park, Park::PallasYllastunturi);
        assert_eq!(store.selection().date, date(25));

        let view = store.view(&counter_set());
        assert!(view.visits_loading);
        assert!(view.sun_loading);
    }

    #[test]
    fn test_select_park_issues_only_sun_ticket() {
        let store = store();
        let transition = store.select_park(Park::Nuuksio);
        assert!(transition.visits.is_none());
        assert_eq!(transition.sun.unwrap().park, Park::Nuuksio);
        assert_eq!(store.selection().park, Park::Nuuksio);
    }

    #[test]
    fn test_select_hour_is_pure_and_validated() {
        let store = store();
        let transition = store.select_hour(7).unwrap();
        assert!(transition.visits.is_none());
        assert!(transition.sun.is_none());
        assert_eq!(store.selection().hour, 7);

        let err = store.select_hour(24).unwrap_err();
        assert_eq!(err, SelectionError::HourOutOfRange(24));
        // Failed transition leaves the selection untouched
        assert_eq!(store.selection().hour, 7);
    }

    #[test]
    fn test_apply_visits_updates_view() {
        let store = store();
        let ticket = store.select_date(date(25)).visits.unwrap();
        store.apply_visits(ticket, Ok(snapshot(10, 20)));

        let view = store.view(&counter_set());
        assert!(!view.visits_loading);
        assert_eq!(view.snapshot_date, Some(date(25)));
        assert_eq!(view.snapshot_max_visits, Some(20));
        assert_eq!(view.markers[0].visits, 10);
        assert_eq!(view.markers[0].percent, 50.0);
    }

    #[test]
    fn test_stale_visits_response_is_discarded() {
        let store = store();
        let stale = store.select_date(date(25)).visits.unwrap();
        let fresh = store.select_date(date(26)).visits.unwrap();

        store.apply_visits(fresh, Ok(snapshot(5, 10)));
        store.apply_visits(stale, Ok(snapshot(99, 99)));

        let view = store.view(&counter_set());
        assert_eq!(view.snapshot_date, Some(date(26)));
        assert_eq!(view.markers[0].visits, 5);
    }

    #[test]
    fn test_stale_error_does_not_clear_newer_loading_flag() {
        let store = store();
        let stale = store.select_date(date(25)).visits.unwrap();
        let _fresh = store.select_date(date(26)).visits.unwrap();

        store.apply_visits(stale, Err(UpstreamError::Api("boom".to_string())));

        // The newer request is still in flight
        assert!(store.view(&counter_set()).visits_loading);
    }

    #[test]
    fn test_failed_latest_fetch_clears_loading_and_keeps_data() {
        let store = store();
        let first = store.select_date(date(25)).visits.unwrap();
        store.apply_visits(first, Ok(snapshot(10, 20)));

        let second = store.select_date(date(26)).visits.unwrap();
        store.apply_visits(second, Err(UpstreamError::Api("down".to_string())));

        let view = store.view(&counter_set());
        assert!(!view.visits_loading);
        // Prior snapshot (and its date) stay in place
        assert_eq!(view.snapshot_date, Some(date(25)));
        assert_eq!(view.markers[0].visits, 10);
    }

    #[test]
    fn test_apply_sun_staleness() {
        let store = store();
        let stale = store.select_park(Park::Nuuksio).sun.unwrap();
        let fresh = store.select_park(Park::PallasYllastunturi).sun.unwrap();

        let fresh_times = SunTimes {
            sunrise: "2019-11-24T07:12:04Z".parse().unwrap(),
            sunset: "2019-11-24T14:02:51Z".parse().unwrap(),
        };
        let stale_times = SunTimes {
            sunrise: "2019-11-24T09:00:00Z".parse().unwrap(),
            sunset: "2019-11-24T13:00:00Z".parse().unwrap(),
        };
        store.apply_sun(fresh, Ok(fresh_times));
        store.apply_sun(stale, Ok(stale_times));

        assert_eq!(store.view(&counter_set()).sun_times, Some(fresh_times));
    }

    #[test]
    fn test_view_fit_bounds_follows_selected_park() {
        let store = store();
        assert_eq!(
            store.view(&counter_set()).fit_bounds,
            Park::PallasYllastunturi.bounds()
        );
        store.select_park(Park::Nuuksio);
        assert_eq!(store.view(&counter_set()).fit_bounds, Park::Nuuksio.bounds());
    }

    #[test]
    fn test_begin_initial_fetch_targets_current_selection() {
        let store = store();
        let transition = store.begin_initial_fetch();
        assert_eq!(transition.visits.unwrap().date, date(24));
        assert_eq!(transition.sun.unwrap().park, Park::PallasYllastunturi);
    }
}
