//! Visit-intensity mapping.
//!
//! Turns a counter's visits at the selected hour into a normalized percentage
//! of the snapshot maximum and derives the marker color and size from it.
//! Pure computation over provided inputs; absent data renders as zero rather
//! than erroring.

use serde::{Deserialize, Serialize};

use crate::models::{Counter, FetchedSnapshot};

/// Hue of the high-traffic end of the gradient.
pub const RED_HUE: f64 = 0.0;
/// Hue of the idle end of the gradient.
pub const GREEN_HUE: f64 = 120.0;

/// Marker diameter at 100 % intensity.
pub const SIZE_MIN_PX: f64 = 20.0;
/// Marker diameter at 0 % intensity.
pub const SIZE_MAX_PX: f64 = 30.0;

/// Display attributes derived for one counter at one hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Display {
    pub visits: u64,
    pub percent: f64,
    pub color: String,
    pub size_px: f64,
}

/// Normalize visits against the snapshot maximum, clamping at 100.
///
/// The clamp guards against `visits == max` and any upstream inconsistency
/// where a counter reports more than the claimed maximum.
pub fn percent_of_max(visits: u64, max_visits: u64) -> f64 {
    if max_visits == 0 {
        return 0.0;
    }
    if visits < max_visits {
        visits as f64 * 100.0 / max_visits as f64
    } else {
        100.0
    }
}

/// Raw gradient hue for a percentage, reproducing the original formula
/// verbatim: `hue = start + (end - start) * (100 - percent / 100)`.
///
/// The raw value lands outside [0, 360) for every percentage. CSS wraps hue
/// mod 360, and because 360 divides `12000 - 120` the wrapped value collapses
/// to the plain `120 - 1.2 * percent` red↔green gradient; [`wrapped_hue`]
/// exposes that normalized form.
pub fn raw_hue(percent: f64) -> f64 {
    RED_HUE + (GREEN_HUE - RED_HUE) * (100.0 - percent / 100.0)
}

/// Raw hue reduced into the [0, 360) gamut, as a CSS engine renders it.
pub fn wrapped_hue(percent: f64) -> f64 {
    raw_hue(percent).rem_euclid(360.0)
}

/// CSS color for a percentage. Carries the raw (unwrapped) hue, as the
/// original marker styling did.
pub fn color_by_percent(percent: f64) -> String {
    format!("hsl({}, 80%, 50%)", raw_hue(percent))
}

/// Marker diameter in pixels for a percentage: 30 px when idle, shrinking
/// linearly to 20 px at full intensity.
pub fn size_by_percent(percent: f64) -> f64 {
    SIZE_MIN_PX + (SIZE_MAX_PX - SIZE_MIN_PX) * ((100.0 - percent) / 100.0)
}

/// Derive the full display attributes for a counter at the selected hour.
///
/// No snapshot loaded means zero visits and zero percent for every counter;
/// counters or hours missing from the snapshot read as zero.
pub fn compute_display(
    counter: &Counter,
    snapshot: Option<&FetchedSnapshot>,
    hour: u8,
) -> Display {
    let visits = snapshot
        .map(|s| s.visits_at(&counter.id, hour))
        .unwrap_or(0);
    let percent = snapshot
        .map(|s| percent_of_max(visits, s.max_visits))
        .unwrap_or(0.0);
    Display {
        visits,
        percent,
        color: color_by_percent(percent),
        size_px: size_by_percent(percent),
    }
}
