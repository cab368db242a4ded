//! In-memory upstream implementations.
//!
//! These back the test suites and local development without network access.
//! Data is stored in memory and both implementations record the requests they
//! served so tests can assert what was fetched.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;

use super::error::{UpstreamError, UpstreamResult};
use super::sun::SunApi;
use super::visits::VisitsApi;
use crate::models::{FetchedSnapshot, SunTimes};

/// In-memory visits source keyed by date.
#[derive(Default)]
pub struct LocalVisitsApi {
    snapshots: RwLock<HashMap<NaiveDate, FetchedSnapshot>>,
    calls: AtomicUsize,
}

impl LocalVisitsApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the snapshot served for a date.
    pub fn insert(&self, date: NaiveDate, snapshot: FetchedSnapshot) {
        self.snapshots.write().insert(date, snapshot);
    }

    /// Number of fetches served (successful or not).
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VisitsApi for LocalVisitsApi {
    async fn fetch_snapshot(&self, date: NaiveDate) -> UpstreamResult<FetchedSnapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.snapshots
            .read()
            .get(&date)
            .cloned()
            .ok_or_else(|| UpstreamError::Status {
                status: 404,
                url: format!("local:/api/visits/{}", date),
            })
    }
}

/// In-memory sunrise/sunset source returning fixed times.
pub struct LocalSunApi {
    times: SunTimes,
    calls: AtomicUsize,
    last_request: RwLock<Option<(f64, f64, NaiveDate)>>,
}

impl LocalSunApi {
    pub fn new(times: SunTimes) -> Self {
        Self {
            times,
            calls: AtomicUsize::new(0),
            last_request: RwLock::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Coordinate and date of the most recent fetch.
    pub fn last_request(&self) -> Option<(f64, f64, NaiveDate)> {
        *self.last_request.read()
    }
}

#[async_trait]
impl SunApi for LocalSunApi {
    async fn fetch_sun_times(
        &self,
        lat: f64,
        lng: f64,
        date: NaiveDate,
    ) -> UpstreamResult<SunTimes> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.write() = Some((lat, lng, date));
        Ok(self.times)
    }
}
