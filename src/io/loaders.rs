//! Counters dataset loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::checksum;
use crate::models::{Counter, CounterSet};

/// Dataset shipped with the crate.
pub const BUNDLED_COUNTERS: &str = include_str!("../../data/counters.json");

/// Load the bundled counters dataset.
pub fn load_bundled_counters() -> Result<CounterSet> {
    parse_counters(BUNDLED_COUNTERS).context("failed to parse bundled counters dataset")
}

/// Load a counters dataset from a file, for deployments that override the
/// bundled one.
pub fn load_counters_from_path(path: &Path) -> Result<CounterSet> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read counters dataset {}", path.display()))?;
    parse_counters(&raw)
        .with_context(|| format!("failed to parse counters dataset {}", path.display()))
}

fn parse_counters(raw: &str) -> Result<CounterSet> {
    let counters: Vec<Counter> = serde_json::from_str(raw)?;
    Ok(CounterSet::new(
        counters,
        checksum::calculate_fingerprint(raw),
    ))
}
