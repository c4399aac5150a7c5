// File: crates/chart-core/tests/config.rs
// Purpose: YAML loader behavior (defaults, empty files, error kinds).

use std::io::Write;

use chart_core::config::{BarChartConfig, RadarConfig};
use chart_core::{load_config, ChartError};

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("temp file");
    f.write_all(contents.as_bytes()).expect("write temp");
    f
}

#[test]
fn loads_camel_case_fields() {
    let f = write_temp("categories: [A]\nvalues: [1.5]\nbarColor: \"#123456\"\nunknownKey: 1\n");
    let config: BarChartConfig = load_config(f.path()).expect("load");
    assert_eq!(config.categories, vec!["A".to_string()]);
    assert_eq!(config.values, vec![1.5]);
    assert_eq!(config.bar_color.as_deref(), Some("#123456"));
    assert!(config.bar_colors.is_empty());
}

#[test]
fn empty_file_gives_defaults() {
    let f = write_temp("  \n");
    let config: RadarConfig = load_config(f.path()).expect("load");
    assert!(config.indicators.is_empty());
    assert!(config.radar_shape.is_none());
}

#[test]
fn missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config::<BarChartConfig>(dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, ChartError::ReadConfig { .. }), "{err:?}");
    assert!(err.to_string().contains("nope.yaml"));
}

#[test]
fn malformed_yaml_is_parse_error() {
    let f = write_temp("values: [1, 2\ncategories: {");
    let err = load_config::<BarChartConfig>(f.path()).unwrap_err();
    assert!(matches!(err, ChartError::ParseConfig { .. }), "{err:?}");
}

#[test]
fn wrong_types_are_parse_errors() {
    let f = write_temp("values: [one, two]\n");
    assert!(matches!(load_config::<BarChartConfig>(f.path()), Err(ChartError::ParseConfig { .. })));
}
