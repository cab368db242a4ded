//! Service layer: pure visualization computation and fetch orchestration.
//!
//! Services sit between the domain models and the HTTP layer. The intensity
//! and marker services are pure functions over provided inputs; refresh owns
//! the fire-and-forget upstream fetches.

pub mod intensity;
pub mod markers;
pub mod refresh;

pub use intensity::{color_by_percent, compute_display, percent_of_max, size_by_percent};
pub use markers::{build_markers, MarkerDisplay};
