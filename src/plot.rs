//! Whole-chart appearance: dimensions, axes, legend, and data labels.

use serde::{Deserialize, Serialize};

use crate::axis::{XAxisConfig, YAxisConfig};
use crate::style::{DataLabels, LegendConfig};
use crate::types::ChartType;

/// Width or height of the plot: a bare number or a length expression string
/// such as `"100px"` or `"100%"`.
///
/// Well-formedness of the string form is the consumer's responsibility; this
/// shape transports it verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Number(f64),
    Text(String),
}

impl From<f64> for Dimension {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Dimension {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

/// Defines the look of the whole chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlotConfig {
    /// The type of chart to render. Consumers fall back to
    /// [`crate::types::DEFAULT_CHART_TYPE`] when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<ChartType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,

    /// Configuration for the X axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<XAxisConfig>,

    /// Configuration for the primary Y axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<YAxisConfig>,

    /// Configuration for the secondary Y axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y2: Option<YAxisConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendConfig>,

    /// Chart-wide styling for per-point data labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_labels: Option<DataLabels>,
}
