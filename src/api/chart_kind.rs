use serde::{Deserialize, Serialize};

use crate::core::{
    ActivePoint, AxisValueFormat, InnerPadding, PixelPoint, PointSpace, SetCollection,
    bar_geometry, hit_test_bars, hit_test_markers, marker_hit_radius, solve_spline,
};
use crate::error::ChartResult;
use crate::render::{DrawingSurface, fill_circle, fill_rect, polyline, spline};

use super::ChartConfig;

/// Chart variant.
///
/// Each variant supplies the same capabilities (inner padding, hit test, graph
/// drawing, active marker, axis formats); `Chart` dispatches through this enum
/// instead of a type hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ChartKind {
    /// Lines with point markers; sets with `smooth` are drawn as splines.
    #[default]
    Line,
    /// `Line` with x values read as Unix seconds and labeled as dates.
    DateLine,
    /// One vertical bar per point, grown from the zero line when zero is in
    /// the y range, otherwise from the graph edge nearest to zero.
    Bar,
}

impl ChartKind {
    #[must_use]
    pub fn x_format(self) -> AxisValueFormat {
        match self {
            Self::DateLine => AxisValueFormat::Date,
            Self::Line | Self::Bar => AxisValueFormat::Integer,
        }
    }

    #[must_use]
    pub fn y_format(self) -> AxisValueFormat {
        AxisValueFormat::Integer
    }

    /// Margin kept inside the draw rect so the largest hovered marker (or
    /// half a bar) is never clipped by the axes.
    pub(super) fn inner_padding(self, sets: &SetCollection, config: &ChartConfig) -> InnerPadding {
        let marker = sets.max_line_width() * config.point_zoom + config.marker_reserve_px;
        match self {
            Self::Line | Self::DateLine => InnerPadding::uniform(marker),
            Self::Bar => InnerPadding::new(
                marker.max(config.bar_width * 0.5 + config.marker_reserve_px),
                marker,
            ),
        }
    }

    pub(super) fn hit_test(
        self,
        query: PixelPoint,
        space: &PointSpace,
        sets: &SetCollection,
        config: &ChartConfig,
    ) -> Option<ActivePoint> {
        match self {
            Self::Line | Self::DateLine => {
                let radii: Vec<f64> = sets
                    .iter()
                    .map(|set| {
                        marker_hit_radius(
                            set.options().line_width,
                            config.point_zoom,
                            config.hit_margin,
                        )
                    })
                    .collect();
                hit_test_markers(query, &space.point_sets, &radii)
            }
            Self::Bar => hit_test_bars(query, &space.point_sets, config.bar_width),
        }
    }

    /// Draws every set, last index first, so set 0 ends up on top.
    pub(super) fn draw_graph<S: DrawingSurface + ?Sized>(
        self,
        surface: &mut S,
        space: &PointSpace,
        sets: &SetCollection,
        config: &ChartConfig,
    ) -> ChartResult<()> {
        for (set, points) in sets.iter().zip(&space.point_sets).rev() {
            let options = set.options();
            surface.set_stroke_color(options.color);
            surface.set_fill_color(options.color);
            surface.set_line_width(options.line_width);

            match self {
                Self::Line | Self::DateLine => {
                    if points.len() >= 2 {
                        surface.begin_path();
                        match options.smooth.then(|| solve_spline(points)).flatten() {
                            Some(path) => spline(surface, &path),
                            None => polyline(surface, points),
                        }
                        surface.stroke()?;
                    }
                    for point in points {
                        fill_circle(surface, *point, options.line_width)?;
                    }
                }
                Self::Bar => {
                    let baseline = space.baseline_y();
                    for point in points {
                        fill_rect(surface, bar_geometry(*point, baseline, config.bar_width))?;
                    }
                }
            }
        }
        Ok(())
    }

    pub(super) fn draw_active_marker<S: DrawingSurface + ?Sized>(
        self,
        surface: &mut S,
        active: ActivePoint,
        space: &PointSpace,
        sets: &SetCollection,
        config: &ChartConfig,
    ) -> ChartResult<()> {
        let (Some(set), Some(point)) = (
            sets.get(active.set_index),
            space.point(active.set_index, active.point_index),
        ) else {
            return Ok(());
        };
        let options = set.options();
        surface.set_fill_color(options.hover_color());

        match self {
            Self::Line | Self::DateLine => {
                fill_circle(surface, point, options.line_width * config.point_zoom)
            }
            Self::Bar => fill_rect(
                surface,
                bar_geometry(point, space.baseline_y(), config.bar_width),
            ),
        }
    }
}
