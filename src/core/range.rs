use serde::{Deserialize, Serialize};

use crate::core::series::DataSet;

/// Closed `[min, max]` interval on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    const fn seed() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    fn include(&mut self, value: f64) {
        if value > self.max {
            self.max = value;
        }
        if value < self.min {
            self.min = value;
        }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Half of the span, computed without overflowing for ranges wider
    /// than `f64::MAX`.
    #[must_use]
    pub fn half_span(self) -> f64 {
        self.max / 2.0 - self.min / 2.0
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.half_span() <= 0.0
    }

    /// Range used for mapping.
    ///
    /// A zero-span axis `[v, v]` is widened to `[v - 0.5, v + 0.5]`, so the
    /// single value lands in the middle of the axis with a unit span.
    ///
    /// Past 2^52 a half unit is below the float spacing, so the pad grows
    /// with `|v|` to keep the widened span non-zero. Near `f64::MAX` the
    /// side that would overflow stays at `v`.
    #[must_use]
    pub fn effective(self) -> Self {
        if !self.is_degenerate() {
            return self;
        }
        let center = self.min;
        let pad = (center.abs() * f64::EPSILON * 4.0).max(0.5);
        let (min, max) = (center - pad, center + pad);
        if max.is_infinite() {
            Self::new(center - 2.0 * pad, center)
        } else if min.is_infinite() {
            Self::new(center, center + 2.0 * pad)
        } else {
            Self::new(min, max)
        }
    }
}

/// Bounds of all data on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataRange {
    pub x: AxisRange,
    pub y: AxisRange,
}

/// Scans every point of every set once and returns the combined bounds.
///
/// Returns `None` when there is no point at all; callers treat that as the
/// "no data" state instead of mapping an undefined range.
#[must_use]
pub fn compute_range<'a, I>(sets: I) -> Option<DataRange>
where
    I: IntoIterator<Item = &'a DataSet>,
{
    let mut x = AxisRange::seed();
    let mut y = AxisRange::seed();
    let mut seen = false;

    for set in sets {
        for point in set.points() {
            x.include(point.x);
            y.include(point.y);
            seen = true;
        }
    }

    seen.then_some(DataRange { x, y })
}
