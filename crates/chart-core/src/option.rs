// File: crates/chart-core/src/option.rs
// Summary: Declarative ECharts-style option object consumed by the renderer.
// Notes:
// - Field names serialize in camelCase so the JSON matches the library schema.
// - `None`/empty fields are omitted from the serialized form.

use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub color: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<AxisOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<AxisOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radar: Option<RadarOption>,
    pub series: Vec<SeriesOption>,
}

impl ChartOption {
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    pub left: String,
}

impl Title {
    pub fn centered(text: impl Into<String>) -> Self {
        Self { text: text.into(), left: "center".to_string() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Legend {
    pub data: Vec<String>,
    pub top: String,
}

impl Legend {
    /// Legend row along the bottom edge of the canvas.
    pub fn bottom(data: Vec<String>) -> Self {
        Self { data, top: "bottom".to_string() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Category,
    Value,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOption {
    #[serde(rename = "type")]
    pub kind: AxisType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary_gap: Option<bool>,
}

impl AxisOption {
    pub fn category(data: Vec<String>) -> Self {
        Self { kind: AxisType::Category, name: None, data, boundary_gap: None }
    }

    pub fn value() -> Self {
        Self { kind: AxisType::Value, name: None, data: Vec::new(), boundary_gap: None }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RadarShape {
    #[default]
    Polygon,
    Circle,
}

impl RadarShape {
    /// Case-insensitive; anything other than "circle" is a polygon.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("circle") { Self::Circle } else { Self::Polygon }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarOption {
    pub indicator: Vec<RadarIndicator>,
    pub shape: RadarShape,
    pub split_number: u32,
    pub split_area: SplitArea,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RadarIndicator {
    pub name: String,
    pub min: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitArea {
    pub show: bool,
    pub area_style: AreaStyle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Bar,
    Line,
    Pie,
    Radar,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesOption {
    #[serde(rename = "type")]
    pub kind: SeriesKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smooth: Option<bool>,
    pub data: Vec<DataItem>,
}

impl SeriesOption {
    pub fn new(kind: SeriesKind, data: Vec<DataItem>) -> Self {
        Self { kind, name: None, stack: None, radius: None, smooth: None, data }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn stacked(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }
}

/// Scalar for bar/line/pie points, vector for a radar polygon.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DataValue {
    Scalar(f64),
    Vector(Vec<f64>),
}

impl DataValue {
    pub fn as_scalar(&self) -> f64 {
        match self {
            Self::Scalar(v) => *v,
            Self::Vector(v) => v.first().copied().unwrap_or(0.0),
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        match self {
            Self::Scalar(v) => std::slice::from_ref(v),
            Self::Vector(v) => v,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub value: DataValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_style: Option<AreaStyle>,
}

impl DataItem {
    pub fn scalar(value: f64) -> Self {
        Self { name: None, value: DataValue::Scalar(value), item_style: None, line_style: None, area_style: None }
    }

    pub fn vector(values: Vec<f64>) -> Self {
        Self { name: None, value: DataValue::Vector(values), item_style: None, line_style: None, area_style: None }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn colored(mut self, color: impl Into<String>) -> Self {
        self.item_style = Some(ItemStyle { color: color.into() });
        self
    }

    /// Item color, falling back to `fallback` when unset.
    pub fn color_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.item_style.as_ref().map(|s| s.color.as_str()).unwrap_or(fallback)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ItemStyle {
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: String,
    pub width: f32,
}

/// A single fill color for series areas, or the alternating ring colors of a radar.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AreaStyle {
    Fill { color: String },
    Bands { color: Vec<String> },
}
