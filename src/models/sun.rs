//! Sunrise/sunset times for the selected park and date.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sunrise and sunset instants in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunTimes {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}
