//! Transient dashboard selection state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::park::Park;

/// Valid hours of day for the hour slider.
pub const MAX_HOUR: u8 = 23;

/// The user's current selection: park tab, date, and hour slider position.
///
/// Never mutated in place; the state store produces a new value through its
/// transition handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub park: Park,
    pub date: NaiveDate,
    pub hour: u8,
}

impl Selection {
    /// Build a selection, rejecting out-of-range hours.
    pub fn new(park: Park, date: NaiveDate, hour: u8) -> Result<Self, SelectionError> {
        if hour > MAX_HOUR {
            return Err(SelectionError::HourOutOfRange(hour));
        }
        Ok(Self { park, date, hour })
    }
}

/// Validation error for selection transitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("hour out of range: {0} (expected 0..=23)")]
    HourOutOfRange(u8),
}
