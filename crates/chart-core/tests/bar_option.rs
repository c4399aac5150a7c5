// File: crates/chart-core/tests/bar_option.rs
// Purpose: Characterize the bar chart option object for literal YAML inputs.

use chart_core::bar::{self, build_option};
use chart_core::config::BarChartConfig;
use chart_core::parse_config;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn option_json(yaml: &str) -> Value {
    let config: BarChartConfig = parse_config(yaml).expect("parse yaml");
    serde_json::to_value(build_option(&config)).expect("serialize option")
}

#[test]
fn values_map_to_series_data_with_default_color() {
    let v = option_json("categories: [\"A\", \"B\"]\nvalues: [1, 2]\n");
    assert_eq!(
        v["series"][0]["data"],
        json!([
            { "value": 1.0, "itemStyle": { "color": "#5470c6" } },
            { "value": 2.0, "itemStyle": { "color": "#5470c6" } },
        ])
    );
    assert_eq!(v["series"][0]["type"], json!("bar"));
    assert_eq!(v["xAxis"], json!({ "type": "category", "data": ["A", "B"] }));
    assert_eq!(v["yAxis"], json!({ "type": "value" }));
    assert_eq!(v["title"]["text"], json!(bar::DEFAULT_TITLE));
}

#[test]
fn single_bar_color_applies_to_every_bar() {
    let v = option_json("categories: [A, B]\nvalues: [3, 4]\nbarColor: \"#ff0000\"\n");
    assert_eq!(v["series"][0]["data"][0]["itemStyle"]["color"], json!("#ff0000"));
    assert_eq!(v["series"][0]["data"][1]["itemStyle"]["color"], json!("#ff0000"));
}

#[test]
fn bar_colors_win_over_bar_color_and_cycle() {
    let v = option_json(
        "categories: [A, B, C]\nvalues: [1, 2, 3]\nbarColor: \"#000000\"\nbarColors: [\"#111111\", \"#222222\"]\n",
    );
    let colors: Vec<Value> = v["series"][0]["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["itemStyle"]["color"].clone())
        .collect();
    assert_eq!(colors, vec![json!("#111111"), json!("#222222"), json!("#111111")]);
}

#[test]
fn empty_config_yields_empty_series() {
    let config = BarChartConfig::default();
    let opt = build_option(&config);
    assert_eq!(opt.series.len(), 1);
    assert!(opt.series[0].data.is_empty());
    assert_eq!(bar::OUTPUT_FILE, "bar-chart.png");
}

#[test]
fn custom_title_is_used() {
    let v = option_json("title: Goals per game\nvalues: [1]\n");
    assert_eq!(v["title"], json!({ "text": "Goals per game", "left": "center" }));
}
