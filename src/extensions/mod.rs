//! Optional hooks layered on top of the chart.
//!
//! Extensions observe the chart; they never reach into its derived state.

pub mod plugins;

pub use plugins::{ChartContext, ChartEvent, ChartPlugin, HoverCallbackPlugin, HoverInfo};
