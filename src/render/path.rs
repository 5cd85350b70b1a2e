use std::f64::consts::TAU;

use crate::core::{DrawRect, PixelPoint, SplinePath};
use crate::error::ChartResult;

use super::DrawingSurface;

/// Appends `path` to the current path: a move to its start followed by one
/// cubic curve per segment.
pub fn spline<S: DrawingSurface + ?Sized>(surface: &mut S, path: &SplinePath) {
    surface.move_to(path.start);
    for segment in &path.segments {
        surface.bezier_curve_to(segment.cp1, segment.cp2, segment.end);
    }
}

/// Appends straight segments through `points`.
pub fn polyline<S: DrawingSurface + ?Sized>(surface: &mut S, points: &[PixelPoint]) {
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        surface.move_to(*first);
    }
    for point in iter {
        surface.line_to(*point);
    }
}

/// Starts a new path holding one full circle.
pub fn circle<S: DrawingSurface + ?Sized>(surface: &mut S, center: PixelPoint, radius: f64) {
    surface.begin_path();
    surface.arc(center, radius, 0.0, TAU);
}

pub fn fill_circle<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    center: PixelPoint,
    radius: f64,
) -> ChartResult<()> {
    circle(surface, center, radius);
    surface.fill()
}

/// Starts a new path holding `rect` and fills it.
pub fn fill_rect<S: DrawingSurface + ?Sized>(surface: &mut S, rect: DrawRect) -> ChartResult<()> {
    surface.begin_path();
    surface.move_to(PixelPoint::new(rect.x, rect.y));
    surface.line_to(PixelPoint::new(rect.right(), rect.y));
    surface.line_to(PixelPoint::new(rect.right(), rect.bottom()));
    surface.line_to(PixelPoint::new(rect.x, rect.bottom()));
    surface.line_to(PixelPoint::new(rect.x, rect.y));
    surface.fill()
}
