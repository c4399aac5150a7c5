// File: crates/chart-core/src/config.rs
// Summary: YAML config schemas for each chart kind and the shared loader.
// Notes:
// - Every field is optional; missing values fall back to defaults in the builders.
// - Unknown keys are ignored.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ChartError, Result};

/// Read `path` and parse it as YAML. An empty file yields `T::default()`.
pub fn load_config<T>(path: impl AsRef<Path>) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading chart config");

    let contents = std::fs::read_to_string(path).map_err(|source| ChartError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;

    if contents.trim().is_empty() {
        tracing::debug!(path = %path.display(), "config is empty, using defaults");
        return Ok(T::default());
    }

    parse_config(&contents).map_err(|source| ChartError::ParseConfig {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a YAML document already in memory.
pub fn parse_config<T: DeserializeOwned>(yaml: &str) -> Result<T, serde_yaml_ng::Error> {
    serde_yaml_ng::from_str(yaml)
}

// ---- bar --------------------------------------------------------------------

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BarChartConfig {
    pub title: Option<String>,
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    pub bar_color: Option<String>,
    pub bar_colors: Vec<String>,
}

// ---- line -------------------------------------------------------------------

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineChartConfig {
    pub title: Option<String>,
    pub x_axis: CategoryAxisConfig,
    pub datasets: Vec<LineDataset>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CategoryAxisConfig {
    pub categories: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct LineDataset {
    pub label: String,
    pub data: Vec<f64>,
}

// ---- pie --------------------------------------------------------------------

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PieChartConfig {
    pub title: Option<String>,
    pub data: Vec<PieSlice>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

// ---- stacked bar ------------------------------------------------------------

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StackedBarConfig {
    pub title: Option<String>,
    pub teams: Vec<TeamBar>,
    pub x_axis_label: Option<String>,
    pub y_axis_label: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct TeamBar {
    pub name: String,
    pub highest: f64,
    pub rest: f64,
    pub color: Option<String>,
}

// ---- radar ------------------------------------------------------------------

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RadarConfig {
    pub title: Option<String>,
    pub indicators: Vec<IndicatorConfig>,
    pub datasets: Vec<RadarDataset>,
    pub radar_shape: Option<String>,
    pub ring_colors: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub name: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RadarDataset {
    pub label: String,
    pub values: Vec<f64>,
    pub line_color: Option<String>,
    pub fill_color: Option<String>,
}
