//! Parks and their map bounding boxes.

use serde::{Deserialize, Serialize};

/// A pair of opposite corners in `[longitude, latitude]` order, as handed to
/// the map widget's fit-bounds call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox(pub [[f64; 2]; 2]);

impl BoundingBox {
    /// Center of the box as `(lat, lng)`.
    pub fn center(&self) -> (f64, f64) {
        let [[lng_a, lat_a], [lng_b, lat_b]] = self.0;
        ((lat_a + lat_b) / 2.0, (lng_a + lng_b) / 2.0)
    }

    /// Whether a coordinate falls inside the box.
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        let [[lng_a, lat_a], [lng_b, lat_b]] = self.0;
        let (lat_min, lat_max) = (lat_a.min(lat_b), lat_a.max(lat_b));
        let (lng_min, lng_max) = (lng_a.min(lng_b), lng_a.max(lng_b));
        lat >= lat_min && lat <= lat_max && lng >= lng_min && lng <= lng_max
    }
}

/// Whole-map view used before any park is focused.
pub const FINLAND_BOUNDS: BoundingBox = BoundingBox([
    [31.5160921567, 70.1641930203],
    [20.6455928891, 59.846373196],
]);

const PALLAS_BOUNDS: BoundingBox = BoundingBox([
    [23.72163147713274, 68.34311219518555],
    [24.570993475020224, 67.54100460419077],
]);

const NUUKSIO_BOUNDS: BoundingBox = BoundingBox([
    [24.698307563459547, 60.24969716104745],
    [24.447281862291263, 60.3307308136045],
]);

/// National parks selectable in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Park {
    #[serde(rename = "pallas")]
    PallasYllastunturi,
    #[serde(rename = "nuuksio")]
    Nuuksio,
}

impl Park {
    pub const ALL: [Park; 2] = [Park::PallasYllastunturi, Park::Nuuksio];

    /// Display label for the park tab.
    pub fn label(&self) -> &'static str {
        match self {
            Park::PallasYllastunturi => "Pallas-Yllästunturi",
            Park::Nuuksio => "Nuuksio",
        }
    }

    /// Bounding box the map fits to when the park is selected.
    pub fn bounds(&self) -> BoundingBox {
        match self {
            Park::PallasYllastunturi => PALLAS_BOUNDS,
            Park::Nuuksio => NUUKSIO_BOUNDS,
        }
    }

    /// Coordinate used for the sunrise/sunset lookup, as `(lat, lng)`.
    pub fn center(&self) -> (f64, f64) {
        self.bounds().center()
    }
}
