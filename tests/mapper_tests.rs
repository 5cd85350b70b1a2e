use approx::{assert_abs_diff_eq, assert_relative_eq};
use splinechart::ChartError;
use splinechart::core::{
    AxisDirection, AxisMapping, AxisRange, DataPoint, DataSet, DataSetOptions, DrawRect,
    InnerPadding, PixelPoint, PointSpace, SetCollection,
};

fn sets_of(points: &[(f64, f64)]) -> SetCollection {
    let mut sets = SetCollection::new();
    sets.prepend(
        DataSet::new(
            points.iter().map(|&(x, y)| DataPoint::new(x, y)).collect(),
            DataSetOptions::default(),
        )
        .expect("valid set"),
    );
    sets
}

#[test]
fn increasing_axis_maps_min_to_origin_and_max_to_end() {
    let mapping = AxisMapping::new(
        AxisRange::new(0.0, 2.0),
        50.0,
        500.0,
        AxisDirection::Increasing,
    )
    .expect("valid mapping");

    assert_abs_diff_eq!(mapping.unit, 250.0, epsilon = 1e-12);
    assert_abs_diff_eq!(mapping.to_pixel(0.0), 50.0, epsilon = 1e-12);
    assert_abs_diff_eq!(mapping.to_pixel(2.0), 550.0, epsilon = 1e-12);
    assert_abs_diff_eq!(mapping.end_px(), 550.0, epsilon = 1e-12);
}

#[test]
fn decreasing_axis_flips_vertical_direction() {
    let mapping = AxisMapping::new(
        AxisRange::new(0.0, 10.0),
        400.0,
        300.0,
        AxisDirection::Decreasing,
    )
    .expect("valid mapping");

    assert_abs_diff_eq!(mapping.to_pixel(0.0), 400.0, epsilon = 1e-12);
    assert_abs_diff_eq!(mapping.to_pixel(10.0), 100.0, epsilon = 1e-12);
    assert!(mapping.to_pixel(7.0) < mapping.to_pixel(3.0));
    assert_abs_diff_eq!(mapping.from_pixel(250.0), 5.0, epsilon = 1e-12);
}

#[test]
fn zero_span_axis_centers_value() {
    let mapping = AxisMapping::new(
        AxisRange::new(3.0, 3.0),
        0.0,
        200.0,
        AxisDirection::Increasing,
    )
    .expect("degenerate range is widened");

    assert!(mapping.unit.is_finite());
    assert_abs_diff_eq!(mapping.to_pixel(3.0), 100.0, epsilon = 1e-12);
}

#[test]
fn zero_span_axis_stays_finite_for_large_values() {
    for value in [1e17, -1e17, 1e300, f64::MAX] {
        let mapping = AxisMapping::new(
            AxisRange::new(value, value),
            0.0,
            100.0,
            AxisDirection::Increasing,
        )
        .expect("degenerate range is widened");

        assert!(mapping.unit.is_finite() && mapping.unit > 0.0);
        let pixel = mapping.to_pixel(value);
        assert!(pixel.is_finite(), "{value} mapped to {pixel}");
        assert!((-1e-9..=100.0 + 1e-9).contains(&pixel));
    }
}

#[test]
fn range_wider_than_f64_max_maps_to_finite_pixels() {
    let mapping = AxisMapping::new(
        AxisRange::new(-1e308, 1e308),
        400.0,
        300.0,
        AxisDirection::Decreasing,
    )
    .expect("valid mapping");

    assert!(mapping.unit > 0.0);
    assert_abs_diff_eq!(mapping.to_pixel(-1e308), 400.0, epsilon = 1e-9);
    assert_abs_diff_eq!(mapping.to_pixel(0.0), 250.0, epsilon = 1e-9);
    assert_abs_diff_eq!(mapping.to_pixel(1e308), 100.0, epsilon = 1e-9);
    assert_relative_eq!(mapping.from_pixel(100.0), 1e308, max_relative = 1e-12);
    assert!(mapping.from_pixel(250.0).abs() < 1e308 * 1e-12);
}

#[test]
fn non_positive_pixel_span_is_rejected() {
    let err = AxisMapping::new(
        AxisRange::new(0.0, 1.0),
        0.0,
        0.0,
        AxisDirection::Increasing,
    )
    .expect_err("zero span must fail");
    assert!(matches!(err, ChartError::InvalidGeometry(_)));
}

#[test]
fn point_space_places_points_inside_point_rect() {
    let sets = sets_of(&[(0.0, 0.0), (1.0, 10.0), (2.0, 5.0)]);
    let draw_rect = DrawRect::new(40.0, 20.0, 540.0, 350.0);
    let space = PointSpace::compute(&sets, draw_rect, InnerPadding::uniform(12.2))
        .expect("compute")
        .expect("has data");

    assert_abs_diff_eq!(space.point_rect.x, 52.2, epsilon = 1e-9);
    assert_abs_diff_eq!(space.point_rect.y, 32.2, epsilon = 1e-9);
    assert_abs_diff_eq!(space.point_rect.width, 515.6, epsilon = 1e-9);
    assert_abs_diff_eq!(space.point_rect.height, 325.6, epsilon = 1e-9);

    let points = &space.point_sets[0];
    assert_eq!(points.len(), 3);
    assert_abs_diff_eq!(points[0].x, 52.2, epsilon = 1e-9);
    assert_abs_diff_eq!(points[0].y, 357.8, epsilon = 1e-9);
    assert_abs_diff_eq!(points[1].x, 310.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[1].y, 32.2, epsilon = 1e-9);
    assert_abs_diff_eq!(points[2].x, 567.8, epsilon = 1e-9);
    assert_abs_diff_eq!(points[2].y, 195.0, epsilon = 1e-9);
}

#[test]
fn point_space_unmap_inverts_map() {
    let sets = sets_of(&[(-5.0, 100.0), (5.0, 300.0)]);
    let space = PointSpace::compute(
        &sets,
        DrawRect::new(0.0, 0.0, 800.0, 600.0),
        InnerPadding::uniform(10.0),
    )
    .expect("compute")
    .expect("has data");

    let pixel = space.map_point(DataPoint::new(1.5, 222.0));
    let back = space.unmap_point(pixel);
    assert_abs_diff_eq!(back.x, 1.5, epsilon = 1e-9);
    assert_abs_diff_eq!(back.y, 222.0, epsilon = 1e-9);
}

#[test]
fn point_space_is_none_without_points() {
    let space = PointSpace::compute(
        &SetCollection::new(),
        DrawRect::new(0.0, 0.0, 100.0, 100.0),
        InnerPadding::default(),
    )
    .expect("compute");
    assert!(space.is_none());
}

#[test]
fn inner_padding_wider_than_draw_rect_fails() {
    let sets = sets_of(&[(0.0, 0.0), (1.0, 1.0)]);
    let err = PointSpace::compute(
        &sets,
        DrawRect::new(0.0, 0.0, 20.0, 100.0),
        InnerPadding::uniform(12.0),
    )
    .expect_err("point rect collapses");
    assert!(matches!(err, ChartError::InvalidGeometry(_)));
}

#[test]
fn baseline_sits_on_zero_or_nearest_edge() {
    let draw_rect = DrawRect::new(0.0, 0.0, 100.0, 100.0);

    let crossing = PointSpace::compute(
        &sets_of(&[(0.0, -10.0), (1.0, 10.0)]),
        draw_rect,
        InnerPadding::default(),
    )
    .expect("compute")
    .expect("has data");
    assert_abs_diff_eq!(crossing.baseline_y(), 50.0, epsilon = 1e-9);

    let positive = PointSpace::compute(
        &sets_of(&[(0.0, 5.0), (1.0, 10.0)]),
        draw_rect,
        InnerPadding::default(),
    )
    .expect("compute")
    .expect("has data");
    assert_abs_diff_eq!(positive.baseline_y(), 100.0, epsilon = 1e-9);

    let negative = PointSpace::compute(
        &sets_of(&[(0.0, -5.0), (1.0, -10.0)]),
        draw_rect,
        InnerPadding::default(),
    )
    .expect("compute")
    .expect("has data");
    assert_abs_diff_eq!(negative.baseline_y(), 0.0, epsilon = 1e-9);

    assert_eq!(
        positive.point(0, 1),
        Some(PixelPoint::new(100.0, 0.0))
    );
    assert_eq!(positive.point(0, 2), None);
}
