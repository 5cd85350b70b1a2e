//! splinechart: small 2D line, date-line and bar charts.
//!
//! Data sets are mapped into pixel space once per data or geometry change
//! and drawn onto any `DrawingSurface`. Lines can be smoothed with an
//! interpolating cubic spline; pointer hover highlights the nearest marker
//! and only repaints the marker on top of a saved frame.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{Chart, ChartConfig, ChartKind};
pub use error::{ChartError, ChartResult};
