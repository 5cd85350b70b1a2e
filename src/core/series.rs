use serde::{Deserialize, Serialize};

use crate::core::range::{DataRange, compute_range};
use crate::core::types::DataPoint;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Per-set drawing configuration.
///
/// Built once when the set is added (chart defaults merged with caller
/// overrides) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSetOptions {
    pub color: Color,
    /// Stroke width of the line and base radius of point markers.
    pub line_width: f64,
    /// Render the line as an interpolating spline instead of straight segments.
    #[serde(default)]
    pub smooth: bool,
    /// Marker color used for the hovered point; falls back to `color`.
    #[serde(default)]
    pub hover_color: Option<Color>,
    /// Tooltip template; `%x` and `%y` are replaced by formatted values.
    #[serde(default)]
    pub tooltip: Option<String>,
}

impl DataSetOptions {
    #[must_use]
    pub fn hover_color(&self) -> Color {
        self.hover_color.unwrap_or(self.color)
    }

    /// Returns a copy with every `Some` field of `overrides` applied.
    #[must_use]
    pub fn merged(&self, overrides: &DataSetOptionsOverride) -> Self {
        Self {
            color: overrides.color.unwrap_or(self.color),
            line_width: overrides.line_width.unwrap_or(self.line_width),
            smooth: overrides.smooth.unwrap_or(self.smooth),
            hover_color: overrides.hover_color.or(self.hover_color),
            tooltip: match &overrides.tooltip {
                Some(template) => template.clone(),
                None => self.tooltip.clone(),
            },
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.color.validate()?;
        if let Some(color) = self.hover_color {
            color.validate()?;
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "line width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for DataSetOptions {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            line_width: 6.0,
            smooth: false,
            hover_color: None,
            tooltip: Some("x:%x y:%y".to_owned()),
        }
    }
}

/// Caller-supplied overrides for `DataSetOptions`.
///
/// `tooltip: Some(None)` disables the tooltip for one set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSetOptionsOverride {
    pub color: Option<Color>,
    pub line_width: Option<f64>,
    pub smooth: Option<bool>,
    pub hover_color: Option<Color>,
    pub tooltip: Option<Option<String>>,
}

impl DataSetOptionsOverride {
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = Some(line_width);
        self
    }

    #[must_use]
    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = Some(smooth);
        self
    }

    #[must_use]
    pub fn with_hover_color(mut self, color: Color) -> Self {
        self.hover_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, template: Option<String>) -> Self {
        self.tooltip = Some(template);
        self
    }
}

/// Ordered samples plus their drawing options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSet {
    points: Vec<DataPoint>,
    options: DataSetOptions,
}

impl DataSet {
    pub fn new(points: Vec<DataPoint>, options: DataSetOptions) -> ChartResult<Self> {
        options.validate()?;
        for point in &points {
            point.validate()?;
        }
        Ok(Self { points, options })
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn options(&self) -> &DataSetOptions {
        &self.options
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The chart's data sets, newest first.
///
/// Sets are prepended on insert, so index 0 is the most recently added set and
/// is drawn last (on top).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetCollection {
    sets: Vec<DataSet>,
}

impl SetCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prepend(&mut self, set: DataSet) {
        self.sets.insert(0, set);
    }

    pub(crate) fn remove_front(&mut self) -> Option<DataSet> {
        if self.sets.is_empty() {
            return None;
        }
        Some(self.sets.remove(0))
    }

    pub fn clear(&mut self) {
        self.sets.clear();
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DataSet> {
        self.sets.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[DataSet] {
        &self.sets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataSet> {
        self.sets.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    #[must_use]
    pub fn total_points(&self) -> usize {
        self.sets.iter().map(DataSet::len).sum()
    }

    /// Bounds across every point of every set; `None` in the no-data state.
    #[must_use]
    pub fn range(&self) -> Option<DataRange> {
        compute_range(&self.sets)
    }

    #[must_use]
    pub fn max_line_width(&self) -> f64 {
        self.sets
            .iter()
            .map(|set| set.options.line_width)
            .fold(0.0, f64::max)
    }
}

impl<'a> IntoIterator for &'a SetCollection {
    type Item = &'a DataSet;
    type IntoIter = std::slice::Iter<'a, DataSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.iter()
    }
}
