use serde::{Deserialize, Serialize};

use crate::core::types::PixelPoint;

/// One cubic Bezier piece; its start is the previous segment's `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierSegment {
    pub cp1: PixelPoint,
    pub cp2: PixelPoint,
    pub end: PixelPoint,
}

impl BezierSegment {
    /// Evaluates the segment at `t` in `[0, 1]`, given its start point.
    #[must_use]
    pub fn point_at(&self, start: PixelPoint, t: f64) -> PixelPoint {
        let u = 1.0 - t;
        let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
        PixelPoint::new(
            a * start.x + b * self.cp1.x + c * self.cp2.x + d * self.end.x,
            a * start.y + b * self.cp1.y + c * self.cp2.y + d * self.end.y,
        )
    }
}

/// Smooth curve through an ordered point sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplinePath {
    pub start: PixelPoint,
    pub segments: Vec<BezierSegment>,
}

impl SplinePath {
    #[must_use]
    pub fn end(&self) -> PixelPoint {
        self.segments.last().map_or(self.start, |segment| segment.end)
    }

    /// Start point of segment `index`, or `None` past the last segment.
    #[must_use]
    pub fn segment_start(&self, index: usize) -> Option<PixelPoint> {
        self.segments.get(index)?;
        Some(
            index
                .checked_sub(1)
                .and_then(|previous| self.segments.get(previous))
                .map_or(self.start, |segment| segment.end),
        )
    }
}

/// Computes Bezier control points for an interpolating, C¹-continuous curve
/// through `points`.
///
/// Returns `None` for fewer than two points. Two points produce a straight
/// segment. Each coordinate channel is solved independently as a tridiagonal
/// system in O(n).
#[must_use]
pub fn solve_spline(points: &[PixelPoint]) -> Option<SplinePath> {
    if points.len() < 2 {
        return None;
    }

    let start = points[0];
    let n = points.len() - 1;

    if n == 1 {
        let end = points[1];
        let cp1 = PixelPoint::new((2.0 * start.x + end.x) / 3.0, (2.0 * start.y + end.y) / 3.0);
        let cp2 = PixelPoint::new(2.0 * cp1.x - start.x, 2.0 * cp1.y - start.y);
        return Some(SplinePath {
            start,
            segments: vec![BezierSegment { cp1, cp2, end }],
        });
    }

    let xs: Vec<f64> = points.iter().map(|point| point.x).collect();
    let ys: Vec<f64> = points.iter().map(|point| point.y).collect();
    let first_x = first_control_points(&control_rhs(&xs));
    let first_y = first_control_points(&control_rhs(&ys));

    let segments = (0..n)
        .map(|i| {
            let cp1 = PixelPoint::new(first_x[i], first_y[i]);
            let cp2 = if i < n - 1 {
                PixelPoint::new(
                    2.0 * points[i + 1].x - first_x[i + 1],
                    2.0 * points[i + 1].y - first_y[i + 1],
                )
            } else {
                PixelPoint::new(
                    (points[n].x + first_x[n - 1]) / 2.0,
                    (points[n].y + first_y[n - 1]) / 2.0,
                )
            };
            BezierSegment {
                cp1,
                cp2,
                end: points[i + 1],
            }
        })
        .collect();

    Some(SplinePath { start, segments })
}

/// Right-hand side of the first-control-point system for one channel.
///
/// `knots` holds `n + 1` values with `n >= 2`.
fn control_rhs(knots: &[f64]) -> Vec<f64> {
    let n = knots.len() - 1;
    let mut rhs = Vec::with_capacity(n);
    rhs.push(knots[0] + 2.0 * knots[1]);
    for i in 1..n - 1 {
        rhs.push(4.0 * knots[i] + 2.0 * knots[i + 1]);
    }
    rhs.push((8.0 * knots[n - 1] + knots[n]) / 2.0);
    rhs
}

/// Thomas algorithm for the fixed tridiagonal matrix with unit off-diagonals
/// and diagonal 2 (first row), 4 (interior rows), 3.5 (last row).
fn first_control_points(rhs: &[f64]) -> Vec<f64> {
    let n = rhs.len();
    let mut solution = vec![0.0; n];
    let mut scratch = vec![0.0; n];

    let mut b = 2.0;
    solution[0] = rhs[0] / b;
    for i in 1..n {
        scratch[i] = 1.0 / b;
        b = (if i < n - 1 { 4.0 } else { 3.5 }) - scratch[i];
        solution[i] = (rhs[i] - solution[i - 1]) / b;
    }
    for i in 1..n {
        solution[n - i - 1] -= scratch[n - i] * solution[n - i];
    }

    solution
}

#[cfg(test)]
mod tests {
    use super::{control_rhs, first_control_points};

    #[test]
    fn constant_channel_solves_to_constant_controls() {
        let knots = [5.0; 6];
        let controls = first_control_points(&control_rhs(&knots));
        assert_eq!(controls.len(), 5);
        for value in controls {
            approx::assert_abs_diff_eq!(value, 5.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn rhs_uses_boundary_rows() {
        let rhs = control_rhs(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(rhs, vec![5.0, 14.0, 14.0]);
    }
}
