use approx::assert_abs_diff_eq;
use splinechart::ChartError;
use splinechart::core::{
    AxisDirection, AxisMapping, AxisRange, AxisValueFormat, format_integer_label, generate_ticks,
};

#[test]
fn five_steps_split_range_evenly() {
    let mapping = AxisMapping::new(
        AxisRange::new(0.0, 100.0),
        40.0,
        400.0,
        AxisDirection::Increasing,
    )
    .expect("valid mapping");

    let ticks = generate_ticks(&mapping, 5).expect("ticks");
    let values: Vec<f64> = ticks.iter().map(|tick| tick.value).collect();
    let pixels: Vec<f64> = ticks.iter().map(|tick| tick.pixel).collect();

    for (value, expected) in values.iter().zip([0.0, 25.0, 50.0, 75.0, 100.0]) {
        assert_abs_diff_eq!(*value, expected, epsilon = 1e-9);
    }
    for (pixel, expected) in pixels.iter().zip([40.0, 140.0, 240.0, 340.0, 440.0]) {
        assert_abs_diff_eq!(*pixel, expected, epsilon = 1e-9);
    }
}

#[test]
fn vertical_ticks_run_bottom_to_top() {
    let mapping = AxisMapping::new(
        AxisRange::new(0.0, 10.0),
        300.0,
        200.0,
        AxisDirection::Decreasing,
    )
    .expect("valid mapping");

    let ticks = generate_ticks(&mapping, 3).expect("ticks");
    assert_eq!(ticks.len(), 3);
    assert_abs_diff_eq!(ticks[0].pixel, 300.0, epsilon = 1e-9);
    assert_abs_diff_eq!(ticks[0].value, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(ticks[2].pixel, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(ticks[2].value, 10.0, epsilon = 1e-9);
}

#[test]
fn fewer_than_two_steps_is_a_config_error() {
    let mapping = AxisMapping::new(
        AxisRange::new(0.0, 1.0),
        0.0,
        100.0,
        AxisDirection::Increasing,
    )
    .expect("valid mapping");

    for steps in [0, 1] {
        let err = generate_ticks(&mapping, steps).expect_err("too few steps");
        assert!(matches!(err, ChartError::InvalidConfig(_)));
    }
}

#[test]
fn integer_labels_round_to_nearest() {
    assert_eq!(format_integer_label(0.0), "0");
    assert_eq!(format_integer_label(1.49), "1");
    assert_eq!(format_integer_label(1.5), "2");
    assert_eq!(format_integer_label(-7.6), "-8");
    assert_eq!(format_integer_label(12_345.4), "12345");
    assert_eq!(AxisValueFormat::Integer.format(9.9, 2024), "10");
}
