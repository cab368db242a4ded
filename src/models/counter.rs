//! Visitor counter locations and the loaded dataset.

use serde::{Deserialize, Serialize};

/// A fixed physical visitor-counting location.
///
/// The set of counters is static for a session; only the visit data attached
/// to them changes with the selected date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counter {
    /// Dataset identifier (`_id` in the source JSON).
    #[serde(rename = "_id")]
    pub id: String,
    pub lat: f64,
    pub long: f64,
    /// Aggregate value carried by the dataset.
    #[serde(rename = "value")]
    pub baseline: BaselineValue,
}

/// Aggregate visit figure shipped with the static dataset.
///
/// Used only for the unfiltered dataset maximum; per-date rendering always
/// goes through a fetched snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineValue {
    pub visits: u64,
}

/// The loaded counters dataset plus derived metadata.
#[derive(Debug, Clone)]
pub struct CounterSet {
    counters: Vec<Counter>,
    max_visits: u64,
    fingerprint: String,
}

impl CounterSet {
    /// Build a counter set, deriving the unfiltered maximum from the
    /// baseline visit figures.
    pub fn new(counters: Vec<Counter>, fingerprint: String) -> Self {
        let max_visits = counters
            .iter()
            .map(|c| c.baseline.visits)
            .max()
            .unwrap_or(0);
        Self {
            counters,
            max_visits,
            fingerprint,
        }
    }

    pub fn counters(&self) -> &[Counter] {
        &self.counters
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Maximum baseline visits across the dataset (the unfiltered maximum).
    pub fn max_visits(&self) -> u64 {
        self.max_visits
    }

    /// SHA-256 fingerprint of the raw dataset bytes.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}
