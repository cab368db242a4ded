//! Visit snapshots fetched for a single date.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Hourly visit counts for one counter on one date.
///
/// The upstream API sends 24 entries; shorter sequences read as zero for the
/// missing hours rather than erroring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitsByHour(pub Vec<u64>);

impl VisitsByHour {
    /// Visits at the given hour of day, zero when the hour is absent.
    pub fn at(&self, hour: u8) -> u64 {
        self.0.get(hour as usize).copied().unwrap_or(0)
    }

    /// Total visits across the day.
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }
}

/// The visits-by-hour dataset for one queried date.
///
/// `max_visits` is the global maximum across all counters and hours for that
/// date and is the normalization base for marker percentages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchedSnapshot {
    #[serde(rename = "dataByCounters")]
    pub data_by_counters: HashMap<String, VisitsByHour>,
    #[serde(rename = "maxVisits")]
    pub max_visits: u64,
}

impl FetchedSnapshot {
    /// Visits for a counter at an hour; counters missing from the snapshot
    /// read as zero.
    pub fn visits_at(&self, counter_id: &str, hour: u8) -> u64 {
        self.data_by_counters
            .get(counter_id)
            .map(|hours| hours.at(hour))
            .unwrap_or(0)
    }

    /// Total visits for a counter across the day, zero when absent.
    pub fn total_for(&self, counter_id: &str) -> u64 {
        self.data_by_counters
            .get(counter_id)
            .map(VisitsByHour::total)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> FetchedSnapshot {
        let mut data = HashMap::new();
        data.insert("a".to_string(), VisitsByHour(vec![5; 24]));
        data.insert("b".to_string(), VisitsByHour(vec![0, 1, 2]));
        FetchedSnapshot {
            data_by_counters: data,
            max_visits: 5,
        }
    }

    #[test]
    fn test_visits_at_present_counter() {
        assert_eq!(snapshot().visits_at("a", 13), 5);
    }

    #[test]
    fn test_visits_at_missing_counter_is_zero() {
        assert_eq!(snapshot().visits_at("nope", 13), 0);
    }

    #[test]
    fn test_visits_at_missing_hour_is_zero() {
        // "b" only carries three hourly entries
        assert_eq!(snapshot().visits_at("b", 2), 2);
        assert_eq!(snapshot().visits_at("b", 3), 0);
        assert_eq!(snapshot().visits_at("b", 23), 0);
    }

    #[test]
    fn test_total_for() {
        assert_eq!(snapshot().total_for("a"), 120);
        assert_eq!(snapshot().total_for("b"), 3);
        assert_eq!(snapshot().total_for("nope"), 0);
    }

    #[test]
    fn test_snapshot_wire_format() {
        let json = r#"{"dataByCounters": {"c1": [1, 2, 3]}, "maxVisits": 3}"#;
        let snapshot: FetchedSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.max_visits, 3);
        assert_eq!(snapshot.visits_at("c1", 1), 2);
    }
}
