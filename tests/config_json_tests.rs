use splinechart::api::CHART_CONFIG_JSON_SCHEMA_V1;
use splinechart::core::Padding;
use splinechart::render::Color;
use splinechart::{Chart, ChartConfig, ChartError, ChartKind};

#[test]
fn config_defaults_match_documented_values() {
    let config = ChartConfig::default();
    assert_eq!(config.viewport.width, 600);
    assert_eq!(config.viewport.height, 400);
    assert_eq!(config.padding, Padding::new(20.0, 40.0, 30.0, 20.0));
    assert_eq!(config.point_zoom, 1.2);
    assert_eq!(config.hit_margin, 1.0);
    assert_eq!(config.x_label.steps, 10);
    assert_eq!(config.y_label.steps, 10);
    assert_eq!(config.x_label.tick_size, 10.0);
    assert_eq!(config.line_defaults.color, Color::BLACK);
    assert_eq!(config.line_defaults.line_width, 6.0);
    assert_eq!(config.line_defaults.tooltip.as_deref(), Some("x:%x y:%y"));
    assert!(!config.line_defaults.smooth);
}

#[test]
fn config_round_trips_through_contract_v1() {
    let config = ChartConfig::new(800, 480)
        .with_label_steps(5, 4)
        .with_bar_width(9.0)
        .with_date_reference_year(2024);

    let json = config.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains(&format!("\"schema_version\": {CHART_CONFIG_JSON_SCHEMA_V1}")));

    let parsed = ChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn bare_config_json_is_accepted() {
    let config = ChartConfig::new(320, 240);
    let json = config.to_json_pretty().expect("serialize");
    assert_eq!(ChartConfig::from_json_str(&json).expect("parse"), config);
}

#[test]
fn minimal_json_fills_defaults() {
    let parsed = ChartConfig::from_json_str(r#"{"viewport":{"width":300,"height":200}}"#)
        .expect("parse");
    let mut expected = ChartConfig::default();
    expected.viewport.width = 300;
    expected.viewport.height = 200;
    assert_eq!(parsed, expected);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let json = format!(
        r#"{{"schema_version":2,"config":{}}}"#,
        ChartConfig::default().to_json_pretty().expect("serialize")
    );
    let err = ChartConfig::from_json_str(&json).expect_err("version 2");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn parsed_config_is_validated() {
    let mut config = ChartConfig::default();
    config.y_label.steps = 1;
    let json = config.to_json_pretty().expect("serialize");

    let err = ChartConfig::from_json_str(&json).expect_err("steps < 2");
    assert!(matches!(err, ChartError::InvalidConfig(_)));

    let err = ChartConfig::from_json_str("not json").expect_err("garbage");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn chart_exports_its_config() {
    let chart = Chart::new(ChartConfig::new(640, 360), ChartKind::Bar).expect("chart init");
    let json = chart.config_json_contract_v1_pretty().expect("serialize");
    let parsed = ChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(&parsed, chart.config());
}
