mod axis_label_format;
mod chart;
mod chart_config;
mod chart_kind;
mod data_controller;
mod draw_pass;
mod json_contract;
mod plugin_dispatch;
mod plugin_registry;
mod pointer_controller;
mod validation;

pub use chart::Chart;
pub use chart_config::{AxisLabelConfig, ChartConfig};
pub use chart_kind::ChartKind;
pub use json_contract::{CHART_CONFIG_JSON_SCHEMA_V1, ChartConfigJsonContractV1};
pub use plugin_registry::HOVER_CALLBACK_PLUGIN_ID;
