use proptest::prelude::*;
use splinechart::core::{AxisDirection, AxisMapping, AxisRange};

proptest! {
    #[test]
    fn axis_mapping_round_trip_property(
        min in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0,
        span_px in 10.0f64..4_000.0,
        decreasing in any::<bool>()
    ) {
        let direction = if decreasing {
            AxisDirection::Decreasing
        } else {
            AxisDirection::Increasing
        };
        let mapping = AxisMapping::new(AxisRange::new(min, min + span), 30.0, span_px, direction)
            .expect("valid mapping");
        let value = min + value_factor * span;

        let px = mapping.to_pixel(value);
        let recovered = mapping.from_pixel(px);

        prop_assert!((recovered - value).abs() <= 1e-6 * (1.0 + value.abs()));
    }

    #[test]
    fn mapped_values_stay_within_axis_pixels(
        min in -10_000.0f64..10_000.0,
        span in 0.001f64..10_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let mapping = AxisMapping::new(
            AxisRange::new(min, min + span),
            400.0,
            300.0,
            AxisDirection::Decreasing,
        )
        .expect("valid mapping");

        let px = mapping.to_pixel(min + value_factor * span);
        prop_assert!((100.0 - 1e-6..=400.0 + 1e-6).contains(&px));
    }
}
