pub mod hit_test;
pub mod mapper;
pub mod primitives;
pub mod range;
pub mod series;
pub mod spline;
pub mod ticks;
pub mod types;

pub use hit_test::{
    ActivePoint, bar_geometry, hit_test_bars, hit_test_markers, marker_hit_radius,
};
pub use mapper::{AxisDirection, AxisMapping, PointSpace};
pub use range::{AxisRange, DataRange, compute_range};
pub use series::{DataSet, DataSetOptions, DataSetOptionsOverride, SetCollection};
pub use spline::{BezierSegment, SplinePath, solve_spline};
pub use ticks::{
    AxisTick, AxisValueFormat, TickList, format_date_label, format_integer_label, generate_ticks,
};
pub use types::{DataPoint, DrawRect, InnerPadding, Padding, PixelPoint, Viewport};
