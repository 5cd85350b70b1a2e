mod path;
mod primitives;
mod recording_surface;

pub use path::{circle, fill_circle, fill_rect, polyline, spline};
pub use primitives::{Color, FontSpec, TextBaseline, TextHAlign};
pub use recording_surface::{RecordingSurface, SurfaceCommand};

use crate::core::{DrawRect, PixelPoint};
use crate::error::ChartResult;

/// Capability set the chart needs from a 2D drawing backend.
///
/// The chart never creates a surface; hosts hand one to each draw call.
/// Path-building calls are infallible, painting calls report backend errors.
pub trait DrawingSurface {
    fn clear_rect(&mut self, rect: DrawRect) -> ChartResult<()>;

    fn begin_path(&mut self);
    fn move_to(&mut self, point: PixelPoint);
    fn line_to(&mut self, point: PixelPoint);
    fn bezier_curve_to(&mut self, cp1: PixelPoint, cp2: PixelPoint, end: PixelPoint);
    /// Adds a circular arc; angles are radians measured clockwise from +x.
    fn arc(&mut self, center: PixelPoint, radius: f64, start_angle: f64, end_angle: f64);

    fn stroke(&mut self) -> ChartResult<()>;
    fn fill(&mut self) -> ChartResult<()>;

    fn set_stroke_color(&mut self, color: Color);
    fn set_fill_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);

    fn set_font(&mut self, font: &FontSpec);
    fn set_text_align(&mut self, align: TextHAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);
    fn fill_text(&mut self, text: &str, at: PixelPoint) -> ChartResult<()>;

    /// Snapshots the current pixels so hover redraws can skip the full pass.
    fn save_frame(&mut self) -> ChartResult<()>;

    /// Restores the last snapshot.
    ///
    /// Fails with `ChartError::NoCachedFrame` when nothing was saved.
    fn restore_frame(&mut self) -> ChartResult<()>;

    /// Drops any saved snapshot.
    fn discard_frame(&mut self);
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoSurface};
