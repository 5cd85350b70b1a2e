use crate::core::DrawRect;
use crate::error::{ChartError, ChartResult};

use super::{AxisLabelConfig, ChartConfig};

pub(super) fn validate_chart_config(config: &ChartConfig) -> ChartResult<()> {
    validate_padding(config)?;
    DrawRect::from_viewport(config.viewport, config.padding)?;

    validate_positive_finite("point zoom", config.point_zoom)?;
    validate_non_negative_finite("hit margin", config.hit_margin)?;
    validate_non_negative_finite("marker reserve", config.marker_reserve_px)?;
    validate_positive_finite("bar width", config.bar_width)?;

    validate_axis_label_config("x", config.x_label)?;
    validate_axis_label_config("y", config.y_label)?;

    config.line_defaults.validate()?;
    config.axis_color.validate()?;
    config.label_color.validate()?;
    validate_positive_finite("label font size", config.label_font.size_pt)?;
    Ok(())
}

pub(super) fn validate_axis_label_config(axis: &str, config: AxisLabelConfig) -> ChartResult<()> {
    if config.steps < 2 {
        return Err(ChartError::InvalidConfig(format!(
            "{axis}-axis label steps must be >= 2, got {}",
            config.steps
        )));
    }
    validate_non_negative_finite("tick size", config.tick_size)?;
    validate_non_negative_finite("label gap", config.label_gap)
}

fn validate_padding(config: &ChartConfig) -> ChartResult<()> {
    let padding = config.padding;
    for (side, value) in [
        ("top", padding.top),
        ("left", padding.left),
        ("bottom", padding.bottom),
        ("right", padding.right),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "padding `{side}` must be finite and >= 0"
            )));
        }
    }
    Ok(())
}

fn validate_positive_finite(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(())
}

fn validate_non_negative_finite(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(())
}
