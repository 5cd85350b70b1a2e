use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64};
use crate::error::{ChartError, ChartResult};

/// Canvas size in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One sample in data space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_decimal(x: Decimal, y: Decimal) -> ChartResult<Self> {
        Ok(Self {
            x: decimal_to_f64(x, "x")?,
            y: decimal_to_f64(y, "y")?,
        })
    }

    /// Builds a date-axis sample: `x` becomes Unix seconds.
    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        Ok(Self {
            x: datetime_to_unix_seconds(time),
            y: decimal_to_f64(value, "y")?,
        })
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "data point coordinates must be finite: x={}, y={}",
                self.x, self.y
            )));
        }
        Ok(())
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for DataPoint {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

/// A position on the drawing surface. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Space reserved around the graph for axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Padding {
    #[must_use]
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::new(20.0, 40.0, 30.0, 20.0)
    }
}

/// Extra margin kept inside the draw rect so edge markers are not clipped.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InnerPadding {
    pub x: f64,
    pub y: f64,
}

impl InnerPadding {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self { x: value, y: value }
    }
}

/// Axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DrawRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Chart content area: the viewport minus label padding.
    pub fn from_viewport(viewport: Viewport, padding: Padding) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let rect = Self {
            x: padding.left,
            y: padding.top,
            width: f64::from(viewport.width) - (padding.left + padding.right),
            height: f64::from(viewport.height) - (padding.top + padding.bottom),
        };
        rect.validate("draw rect")?;
        Ok(rect)
    }

    /// Shrinks the rect by `inset.x` on left/right and `inset.y` on top/bottom.
    pub fn inset(self, inset: InnerPadding) -> ChartResult<Self> {
        let rect = Self {
            x: self.x + inset.x,
            y: self.y + inset.y,
            width: self.width - inset.x * 2.0,
            height: self.height - inset.y * 2.0,
        };
        rect.validate("point rect")?;
        Ok(rect)
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn contains(self, point: PixelPoint) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    fn validate(self, what: &str) -> ChartResult<()> {
        let finite = self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite();
        if !finite || self.width <= 0.0 || self.height <= 0.0 {
            return Err(ChartError::InvalidGeometry(format!(
                "{what} must have positive size, got {}x{} at ({}, {})",
                self.width, self.height, self.x, self.y
            )));
        }
        Ok(())
    }
}
