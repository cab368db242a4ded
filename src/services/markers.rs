//! Marker view-model assembly for the map frontend.

use serde::{Deserialize, Serialize};

use super::intensity;
use crate::models::{Counter, FetchedSnapshot};

/// Everything the frontend needs to render one counter marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerDisplay {
    pub counter_id: String,
    pub lat: f64,
    pub long: f64,
    pub visits: u64,
    pub percent: f64,
    pub color: String,
    pub size_px: f64,
    /// Text rendered inside the marker circle.
    pub label: String,
}

/// Build the ordered marker list for the current snapshot and hour.
///
/// Counters are sorted ascending by their total visits in the loaded snapshot
/// so higher-traffic markers are drawn last, on top. The sort is stable: ties
/// (including the all-zero case when no snapshot is loaded) keep input order.
pub fn build_markers(
    counters: &[Counter],
    snapshot: Option<&FetchedSnapshot>,
    hour: u8,
) -> Vec<MarkerDisplay> {
    let mut ordered: Vec<&Counter> = counters.iter().collect();
    ordered.sort_by_key(|c| snapshot.map(|s| s.total_for(&c.id)).unwrap_or(0));

    ordered
        .into_iter()
        .map(|counter| {
            let display = intensity::compute_display(counter, snapshot, hour);
            MarkerDisplay {
                counter_id: counter.id.clone(),
                lat: counter.lat,
                long: counter.long,
                visits: display.visits,
                percent: display.percent,
                color: display.color,
                size_px: display.size_px,
                label: display.visits.to_string(),
            }
        })
        .collect()
}
