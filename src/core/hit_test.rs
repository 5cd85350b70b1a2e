use serde::{Deserialize, Serialize};

use crate::core::types::{DrawRect, PixelPoint};

/// Identifies one data point by set and position within the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivePoint {
    pub set_index: usize,
    pub point_index: usize,
}

impl ActivePoint {
    #[must_use]
    pub const fn new(set_index: usize, point_index: usize) -> Self {
        Self {
            set_index,
            point_index,
        }
    }
}

/// Hover radius of a point marker: base size scaled by the hover zoom, plus a
/// fixed slack for the marker edge.
#[must_use]
pub fn marker_hit_radius(line_width: f64, point_zoom: f64, hit_margin: f64) -> f64 {
    line_width * point_zoom + hit_margin
}

/// Finds the marker under `query`.
///
/// Sets are scanned in ascending index order and points within a set from
/// last to first; the first point within its set's radius wins. Given equal
/// inputs the result is always the same, so overlapping markers resolve to the
/// lower set index and, within a set, to the later point.
///
/// `radii[i]` is the hit radius for `point_sets[i]`; sets without a radius are
/// skipped.
#[must_use]
pub fn hit_test_markers(
    query: PixelPoint,
    point_sets: &[Vec<PixelPoint>],
    radii: &[f64],
) -> Option<ActivePoint> {
    for (set_index, (points, radius)) in point_sets.iter().zip(radii).enumerate() {
        let radius_sq = radius * radius;
        for (point_index, point) in points.iter().enumerate().rev() {
            if query.distance_squared(*point) <= radius_sq {
                return Some(ActivePoint::new(set_index, point_index));
            }
        }
    }
    None
}

/// Finds the bar whose horizontal span contains `query.x`.
///
/// Uses the same scan order as `hit_test_markers`. Only the x-span is
/// checked: hovering anywhere in a bar's column selects it, including above
/// a short bar.
#[must_use]
pub fn hit_test_bars(
    query: PixelPoint,
    point_sets: &[Vec<PixelPoint>],
    bar_width: f64,
) -> Option<ActivePoint> {
    let half = bar_width * 0.5;
    for (set_index, points) in point_sets.iter().enumerate() {
        for (point_index, point) in points.iter().enumerate().rev() {
            if query.x >= point.x - half && query.x <= point.x + half {
                return Some(ActivePoint::new(set_index, point_index));
            }
        }
    }
    None
}

/// Pixel rectangle of one bar, from the value down to `baseline_y`.
#[must_use]
pub fn bar_geometry(point: PixelPoint, baseline_y: f64, bar_width: f64) -> DrawRect {
    let top = point.y.min(baseline_y);
    DrawRect::new(
        point.x - bar_width * 0.5,
        top,
        bar_width,
        (baseline_y - point.y).abs(),
    )
}
