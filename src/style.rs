//! Leaf styling shapes: fonts, the legend, and per-point data labels.

use serde::{Deserialize, Serialize};

/// Typography override for a piece of chart text.
///
/// Both fields are free-form strings (e.g. `"14px"`, `"Helvetica"`); an
/// absent field means "inherit the consumer's default".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FontConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
}

/// Configures the chart's legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendConfig {
    /// Whether to show the legend. Deliberately has no serde default: a
    /// legend config without `show` is malformed input, not a silent opt-in.
    pub show: bool,

    /// Font for legend entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontConfig>,
}

impl LegendConfig {
    pub fn new(show: bool) -> Self {
        Self { show, font: None }
    }
}

/// Styling for labels attached to individual data points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DataLabels {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontConfig>,
}
