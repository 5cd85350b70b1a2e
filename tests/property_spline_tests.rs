use proptest::prelude::*;
use splinechart::core::{PixelPoint, solve_spline};

fn knots_strategy() -> impl Strategy<Value = Vec<PixelPoint>> {
    prop::collection::vec((0.1f64..50.0, -500.0f64..500.0), 2..64).prop_map(|steps| {
        let mut x = 0.0;
        steps
            .into_iter()
            .map(|(dx, y)| {
                x += dx;
                PixelPoint::new(x, y)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn spline_interpolates_all_knots(knots in knots_strategy()) {
        let path = solve_spline(&knots).expect("at least two knots");

        prop_assert_eq!(path.segments.len(), knots.len() - 1);
        prop_assert_eq!(path.start, knots[0]);
        for (segment, knot) in path.segments.iter().zip(&knots[1..]) {
            prop_assert_eq!(segment.end, *knot);
        }
    }

    #[test]
    fn spline_controls_are_finite_and_c1(knots in knots_strategy()) {
        let path = solve_spline(&knots).expect("at least two knots");

        for segment in &path.segments {
            prop_assert!(segment.cp1.x.is_finite() && segment.cp1.y.is_finite());
            prop_assert!(segment.cp2.x.is_finite() && segment.cp2.y.is_finite());
        }
        for pair in path.segments.windows(2) {
            let knot = pair[0].end;
            let tolerance = 1e-6 * (1.0 + knot.x.abs() + knot.y.abs());
            prop_assert!(((knot.x - pair[0].cp2.x) - (pair[1].cp1.x - knot.x)).abs() <= tolerance);
            prop_assert!(((knot.y - pair[0].cp2.y) - (pair[1].cp1.y - knot.y)).abs() <= tolerance);
        }
    }
}
