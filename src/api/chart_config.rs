use serde::{Deserialize, Serialize};

use crate::core::{DataSetOptions, Padding, Viewport};
use crate::error::ChartResult;
use crate::render::{Color, FontSpec};

use super::validation::validate_chart_config;

/// Tick/label layout for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLabelConfig {
    /// Number of ticks, including both ends of the axis. Must be >= 2.
    pub steps: usize,
    /// Tick mark length in pixels.
    #[serde(default = "default_tick_size")]
    pub tick_size: f64,
    /// Gap between the tick mark's end and the label anchor.
    #[serde(default = "default_label_gap")]
    pub label_gap: f64,
}

impl Default for AxisLabelConfig {
    fn default() -> Self {
        Self {
            steps: 10,
            tick_size: default_tick_size(),
            label_gap: default_label_gap(),
        }
    }
}

/// Chart bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. It is validated once in
/// `Chart::new` and on every geometry change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub padding: Padding,
    /// Hover magnification of point markers.
    #[serde(default = "default_point_zoom")]
    pub point_zoom: f64,
    /// Extra hit radius around markers, in pixels.
    #[serde(default = "default_hit_margin")]
    pub hit_margin: f64,
    /// Fixed part of the inner padding, added to the largest zoomed marker.
    #[serde(default = "default_marker_reserve_px")]
    pub marker_reserve_px: f64,
    #[serde(default)]
    pub x_label: AxisLabelConfig,
    #[serde(default)]
    pub y_label: AxisLabelConfig,
    /// Options every new data set starts from.
    #[serde(default)]
    pub line_defaults: DataSetOptions,
    #[serde(default = "default_bar_width")]
    pub bar_width: f64,
    #[serde(default)]
    pub axis_color: Color,
    #[serde(default)]
    pub label_color: Color,
    #[serde(default)]
    pub label_font: FontSpec,
    #[serde(default = "default_no_data_text")]
    pub no_data_text: String,
    /// Year treated as "current" by the date axis; `None` uses the UTC clock.
    #[serde(default)]
    pub date_reference_year: Option<i32>,
}

impl ChartConfig {
    /// Creates a config with default padding, labels and line options.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            padding: Padding::default(),
            point_zoom: default_point_zoom(),
            hit_margin: default_hit_margin(),
            marker_reserve_px: default_marker_reserve_px(),
            x_label: AxisLabelConfig::default(),
            y_label: AxisLabelConfig::default(),
            line_defaults: DataSetOptions::default(),
            bar_width: default_bar_width(),
            axis_color: Color::BLACK,
            label_color: Color::BLACK,
            label_font: FontSpec::default(),
            no_data_text: default_no_data_text(),
            date_reference_year: None,
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_point_zoom(mut self, point_zoom: f64) -> Self {
        self.point_zoom = point_zoom;
        self
    }

    #[must_use]
    pub fn with_hit_margin(mut self, hit_margin: f64) -> Self {
        self.hit_margin = hit_margin;
        self
    }

    /// Sets tick counts for both axes.
    #[must_use]
    pub fn with_label_steps(mut self, x_steps: usize, y_steps: usize) -> Self {
        self.x_label.steps = x_steps;
        self.y_label.steps = y_steps;
        self
    }

    #[must_use]
    pub fn with_line_defaults(mut self, defaults: DataSetOptions) -> Self {
        self.line_defaults = defaults;
        self
    }

    #[must_use]
    pub fn with_bar_width(mut self, bar_width: f64) -> Self {
        self.bar_width = bar_width;
        self
    }

    #[must_use]
    pub fn with_date_reference_year(mut self, year: i32) -> Self {
        self.date_reference_year = Some(year);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_chart_config(self)
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(600, 400)
    }
}

fn default_point_zoom() -> f64 {
    1.2
}

fn default_hit_margin() -> f64 {
    1.0
}

fn default_marker_reserve_px() -> f64 {
    5.0
}

fn default_bar_width() -> f64 {
    12.0
}

fn default_tick_size() -> f64 {
    10.0
}

fn default_label_gap() -> f64 {
    4.0
}

fn default_no_data_text() -> String {
    "No data".to_owned()
}
