use chrono::Datelike;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::mapper::AxisMapping;
use crate::core::primitives::unix_seconds_to_datetime;
use crate::error::{ChartError, ChartResult};

/// One label/gridline position on an axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    /// Pixel coordinate along the axis (x for the x axis, y for the y axis).
    pub pixel: f64,
    pub value: f64,
}

/// Tick list; the default ten steps per axis stay inline.
pub type TickList = SmallVec<[AxisTick; 12]>;

/// Spreads `step_count` ticks evenly over the mapped pixel span, from the
/// axis minimum to its maximum.
pub fn generate_ticks(mapping: &AxisMapping, step_count: usize) -> ChartResult<TickList> {
    if step_count < 2 {
        return Err(ChartError::InvalidConfig(format!(
            "axis step count must be >= 2, got {step_count}"
        )));
    }

    let step_px = mapping.span_px / (step_count - 1) as f64;
    let sign = mapping.direction.sign();

    Ok((0..step_count)
        .map(|i| {
            let offset = step_px * i as f64;
            AxisTick {
                pixel: mapping.origin_px + sign * offset,
                value: mapping.value_at_offset(offset),
            }
        })
        .collect())
}

/// How axis values are turned into label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AxisValueFormat {
    /// Nearest integer.
    #[default]
    Integer,
    /// Value is Unix seconds; rendered as a UTC calendar date.
    Date,
}

impl AxisValueFormat {
    #[must_use]
    pub fn format(self, value: f64, reference_year: i32) -> String {
        match self {
            Self::Integer => format_integer_label(value),
            Self::Date => format_date_label(value, reference_year),
        }
    }
}

/// Rounds half toward positive infinity and prints without decimals.
#[must_use]
pub fn format_integer_label(value: f64) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    let rounded = (value + 0.5).floor();
    if rounded == 0.0 {
        // avoid "-0"
        return "0".to_owned();
    }
    format!("{rounded:.0}")
}

/// Formats Unix seconds as `MM-DD`, or `YYYY-MM-DD` when the date's year
/// differs from `reference_year`.
#[must_use]
pub fn format_date_label(seconds: f64, reference_year: i32) -> String {
    let Some(date) = unix_seconds_to_datetime(seconds) else {
        return format_integer_label(seconds);
    };

    if date.year() == reference_year {
        format!("{:02}-{:02}", date.month(), date.day())
    } else {
        format!("{:02}-{:02}-{:02}", date.year(), date.month(), date.day())
    }
}
