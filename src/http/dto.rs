//! Data Transfer Objects for the HTTP API.
//!
//! The view model and marker DTOs already derive Serialize/Deserialize and are
//! re-exported from the state and service layers; this module adds the
//! request bodies and the static responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use crate::services::markers::MarkerDisplay;
pub use crate::state::DashboardView;

use crate::models::{BoundingBox, Park};

/// Response for the health check endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of counters in the loaded dataset.
    pub counters: usize,
    /// SHA-256 fingerprint of the loaded dataset.
    pub dataset_fingerprint: String,
}

/// Static map configuration for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfigResponse {
    pub style_url: String,
    pub access_token: String,
    /// Whole-map view shown before any park is focused.
    pub finland_bounds: BoundingBox,
    pub parks: Vec<ParkInfo>,
}

/// One selectable park tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkInfo {
    pub id: Park,
    pub label: String,
    pub bounds: BoundingBox,
}

impl ParkInfo {
    pub fn for_park(park: Park) -> Self {
        Self {
            id: park,
            label: park.label().to_string(),
            bounds: park.bounds(),
        }
    }
}

/// Request body for the park transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectParkRequest {
    pub park: Park,
}

/// Request body for the date transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectDateRequest {
    pub date: NaiveDate,
}

/// Request body for the hour transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectHourRequest {
    pub hour: u8,
}
