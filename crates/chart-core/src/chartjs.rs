// File: crates/chart-core/src/chartjs.rs
// Summary: Chart.js-style radar configuration (the second option schema, used by the match radar).

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RadarChartConfig {
    /// Always "radar".
    #[serde(rename = "type")]
    pub kind: String,
    pub data: RadarData,
    pub options: RadarOptions,
}

impl RadarChartConfig {
    pub fn new(labels: Vec<String>, datasets: Vec<ChartJsDataset>) -> Self {
        Self {
            kind: "radar".to_string(),
            data: RadarData { labels, datasets },
            options: RadarOptions::default(),
        }
    }

    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RadarData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartJsDataset>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartJsDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
    pub point_background_color: String,
    pub border_width: f32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RadarOptions {
    pub plugins: Plugins,
    pub scales: Scales,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Plugins {
    pub title: TitlePlugin,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TitlePlugin {
    pub display: bool,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Scales {
    pub r: RadialScale,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadialScale {
    pub begin_at_zero: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_max: Option<f64>,
}

impl Default for RadialScale {
    fn default() -> Self {
        Self { begin_at_zero: true, suggested_max: None }
    }
}
