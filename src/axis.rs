//! Axis configuration and column-to-axis binding shapes.
//!
//! The source contract expresses its X/Y axis shapes as extensions of a
//! common base; here extension is composition via `#[serde(flatten)]`, so
//! the extended shapes stay flat on the wire.

use serde::{Deserialize, Serialize};

use crate::style::FontConfig;
use crate::types::{AxisType, HorizontalLabelPosition, VerticalLabelPosition};

/// Position of an axis label, horizontal or vertical depending on the axis'
/// orientation.
///
/// The two tag sets are disjoint (`inner-right`... vs `inner-top`...), so an
/// untagged union deserializes unambiguously. Which orientation is valid for
/// a given axis is the consumer's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelPosition {
    Horizontal(HorizontalLabelPosition),
    Vertical(VerticalLabelPosition),
}

impl From<HorizontalLabelPosition> for LabelPosition {
    fn from(p: HorizontalLabelPosition) -> Self {
        Self::Horizontal(p)
    }
}

impl From<VerticalLabelPosition> for LabelPosition {
    fn from(p: VerticalLabelPosition) -> Self {
        Self::Vertical(p)
    }
}

/// A text label attached to an axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabelConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<LabelPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontConfig>,
}

/// Styling for an axis' tick marks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AxisTicksConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontConfig>,
}

/// Appearance shared by every axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AxisConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<AxisLabelConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<AxisTicksConfiguration>,

    /// Value format for the axis. Optional and non-load-bearing; no default
    /// formatting behavior is implied when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// X-axis appearance: the shared axis shape plus the axis' data semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct XAxisConfig {
    #[serde(flatten)]
    pub axis: AxisConfig,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<AxisType>,
}

/// Y-axis appearance: the shared axis shape plus an optional value range.
///
/// `min <= max` when both are present is a consumer-side invariant; the
/// shape itself accepts any pair of bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct YAxisConfig {
    #[serde(flatten)]
    pub axis: AxisConfig,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// Binds one named data series to one axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisSeriesConfig {
    /// Name of the series to render on the axis. Must reference a column of
    /// the dataframe paired with this configuration; the cross-reference is
    /// checked by the consumer, not here.
    pub series: String,

    /// Label for the series on this axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Format for rendering values of the series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Color assigned to the series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl AxisSeriesConfig {
    pub fn new(series: impl Into<String>) -> Self {
        Self {
            series: series.into(),
            label: None,
            format: None,
            color: None,
        }
    }
}

/// Binds one named data series to a Y axis, optionally pairing it with its
/// own X series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxisSeriesConfig {
    #[serde(flatten)]
    pub config: AxisSeriesConfig,

    /// Separate X series for this Y series, overriding the chart-wide X.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<AxisSeriesConfig>,
}

impl YAxisSeriesConfig {
    pub fn new(series: impl Into<String>) -> Self {
        Self {
            config: AxisSeriesConfig::new(series),
            x: None,
        }
    }
}

/// Maps the columns of a dataframe onto the chart's axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AxisMap {
    /// The chart-wide X binding. Omitted entirely from the wire form when
    /// absent, unlike `y`/`y2` which always serialize.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<AxisSeriesConfig>,

    /// Series bound to the primary Y axis. Required on the wire, even when
    /// empty.
    pub y: Vec<YAxisSeriesConfig>,

    /// Series bound to the secondary Y axis. Required on the wire, even when
    /// empty.
    pub y2: Vec<YAxisSeriesConfig>,
}

impl AxisMap {
    /// Map with the given primary-Y bindings and nothing else.
    pub fn new(y: Vec<YAxisSeriesConfig>) -> Self {
        Self {
            x: None,
            y,
            y2: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HorizontalLabelPosition, VerticalLabelPosition};

    #[test]
    fn label_position_union_resolves_by_tag() {
        let h: LabelPosition = serde_json::from_str("\"outer-left\"").unwrap();
        assert_eq!(h, LabelPosition::Horizontal(HorizontalLabelPosition::OuterLeft));
        let v: LabelPosition = serde_json::from_str("\"inner-middle\"").unwrap();
        assert_eq!(v, LabelPosition::Vertical(VerticalLabelPosition::InnerMiddle));
        assert!(serde_json::from_str::<LabelPosition>("\"center\"").is_err());
    }

    #[test]
    fn x_axis_config_flattens_base_fields() {
        let x: XAxisConfig = serde_json::from_str(
            r#"{"label":{"text":"Year"},"axisType":"timeseries"}"#,
        )
        .unwrap();
        assert_eq!(x.axis.label.as_ref().unwrap().text.as_deref(), Some("Year"));
        assert_eq!(x.axis_type, Some(crate::types::AxisType::Timeseries));

        let json = serde_json::to_value(&x).unwrap();
        // Flattened: base fields sit beside the extension field.
        assert!(json.get("label").is_some());
        assert_eq!(json["axisType"], "timeseries");
        assert!(json.get("axis").is_none());
    }

    #[test]
    fn y_series_flattens_and_carries_optional_x() {
        let y: YAxisSeriesConfig = serde_json::from_str(
            r##"{"series":"price","color":"#336699","x":{"series":"date"}}"##,
        )
        .unwrap();
        assert_eq!(y.config.series, "price");
        assert_eq!(y.x.as_ref().unwrap().series, "date");

        let json = serde_json::to_value(&y).unwrap();
        assert_eq!(json["series"], "price");
        assert!(json.get("config").is_none());
    }
}
