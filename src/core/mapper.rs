use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::range::{AxisRange, DataRange};
use crate::core::series::{DataSet, SetCollection};
use crate::core::types::{DataPoint, DrawRect, InnerPadding, PixelPoint};
use crate::error::{ChartError, ChartResult};

/// Pixel direction in which data values grow along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisDirection {
    /// Left to right (x axis).
    Increasing,
    /// Bottom to top (y axis); pixel space grows downward.
    Decreasing,
}

impl AxisDirection {
    pub(crate) const fn sign(self) -> f64 {
        match self {
            Self::Increasing => 1.0,
            Self::Decreasing => -1.0,
        }
    }
}

/// Affine data→pixel mapping for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisMapping {
    /// Effective (zero-span guarded) range.
    pub range: AxisRange,
    /// Pixels per data unit.
    pub unit: f64,
    /// Pixel coordinate of `range.min`.
    pub origin_px: f64,
    /// Pixel length covered by `range`.
    pub span_px: f64,
    pub direction: AxisDirection,
}

impl AxisMapping {
    pub fn new(
        range: AxisRange,
        origin_px: f64,
        span_px: f64,
        direction: AxisDirection,
    ) -> ChartResult<Self> {
        if !range.min.is_finite() || !range.max.is_finite() {
            return Err(ChartError::InvalidData(
                "axis range must be finite".to_owned(),
            ));
        }
        if !span_px.is_finite() || span_px <= 0.0 {
            return Err(ChartError::InvalidGeometry(format!(
                "axis pixel span must be finite and > 0, got {span_px}"
            )));
        }

        let range = range.effective();
        Ok(Self {
            range,
            unit: (span_px / 2.0) / range.half_span(),
            origin_px,
            span_px,
            direction,
        })
    }

    /// Works on halved values so ranges wider than `f64::MAX` stay finite.
    #[must_use]
    pub fn to_pixel(self, value: f64) -> f64 {
        let half_offset = value / 2.0 - self.range.min / 2.0;
        self.origin_px + self.direction.sign() * (half_offset * self.unit) * 2.0
    }

    #[must_use]
    pub fn from_pixel(self, pixel: f64) -> f64 {
        self.value_at_offset(self.direction.sign() * (pixel - self.origin_px))
    }

    /// Data value at `offset` pixels from the axis origin, measured in the
    /// growth direction.
    #[must_use]
    pub fn value_at_offset(self, offset: f64) -> f64 {
        2.0 * (self.range.min / 2.0 + offset / 2.0 / self.unit)
    }

    /// Pixel coordinate where `range.max` lands.
    #[must_use]
    pub fn end_px(self) -> f64 {
        self.origin_px + self.direction.sign() * self.span_px
    }
}

/// Pixel-space view of every data set.
///
/// Derived data: rebuilt from scratch whenever sets or geometry change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSpace {
    pub point_sets: Vec<Vec<PixelPoint>>,
    pub x: AxisMapping,
    pub y: AxisMapping,
    /// Raw bounds as scanned from the data, before the zero-span guard.
    pub data_range: DataRange,
    pub draw_rect: DrawRect,
    pub point_rect: DrawRect,
    pub inner_padding: InnerPadding,
}

impl PointSpace {
    /// Maps all sets into pixel space.
    ///
    /// Returns `Ok(None)` when the collection holds no points at all.
    pub fn compute(
        sets: &SetCollection,
        draw_rect: DrawRect,
        inner_padding: InnerPadding,
    ) -> ChartResult<Option<Self>> {
        let Some(data_range) = sets.range() else {
            return Ok(None);
        };
        let point_rect = draw_rect.inset(inner_padding)?;

        let x = AxisMapping::new(
            data_range.x,
            point_rect.x,
            point_rect.width,
            AxisDirection::Increasing,
        )?;
        let y = AxisMapping::new(
            data_range.y,
            point_rect.bottom(),
            point_rect.height,
            AxisDirection::Decreasing,
        )?;

        let point_sets = project_sets(sets.as_slice(), x, y);
        trace!(
            sets = point_sets.len(),
            x_unit = x.unit,
            y_unit = y.unit,
            "computed point space"
        );

        Ok(Some(Self {
            point_sets,
            x,
            y,
            data_range,
            draw_rect,
            point_rect,
            inner_padding,
        }))
    }

    #[must_use]
    pub fn map_point(&self, point: DataPoint) -> PixelPoint {
        map_point(point, self.x, self.y)
    }

    #[must_use]
    pub fn unmap_point(&self, pixel: PixelPoint) -> DataPoint {
        DataPoint::new(self.x.from_pixel(pixel.x), self.y.from_pixel(pixel.y))
    }

    #[must_use]
    pub fn point(&self, set_index: usize, point_index: usize) -> Option<PixelPoint> {
        self.point_sets.get(set_index)?.get(point_index).copied()
    }

    /// Pixel y bars grow from: value zero when it is on the axis, otherwise
    /// the graph edge nearest to zero.
    #[must_use]
    pub fn baseline_y(&self) -> f64 {
        let range = self.y.range;
        if range.contains(0.0) {
            self.y.to_pixel(0.0)
        } else if range.max < 0.0 {
            self.point_rect.y
        } else {
            self.point_rect.bottom()
        }
    }
}

fn map_point(point: DataPoint, x: AxisMapping, y: AxisMapping) -> PixelPoint {
    PixelPoint::new(x.to_pixel(point.x), y.to_pixel(point.y))
}

fn project_set(set: &DataSet, x: AxisMapping, y: AxisMapping) -> Vec<PixelPoint> {
    set.points()
        .iter()
        .map(|point| map_point(*point, x, y))
        .collect()
}

#[cfg(not(feature = "parallel-projection"))]
fn project_sets(sets: &[DataSet], x: AxisMapping, y: AxisMapping) -> Vec<Vec<PixelPoint>> {
    sets.iter().map(|set| project_set(set, x, y)).collect()
}

#[cfg(feature = "parallel-projection")]
fn project_sets(sets: &[DataSet], x: AxisMapping, y: AxisMapping) -> Vec<Vec<PixelPoint>> {
    use rayon::prelude::*;

    sets.par_iter().map(|set| project_set(set, x, y)).collect()
}
