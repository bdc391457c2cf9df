//! Primitive enumerations shared by the rest of the contract.
//!
//! Every enum serializes as its declared string tag (never an ordinal), so
//! the wire form stays readable and stable across language ports.

use serde::{Deserialize, Serialize};

/// The visual family of chart to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    /// Multi-series line chart. Consumers treat this as the conventional
    /// default when no chart type is supplied.
    #[default]
    Line,
    Bar,
    Scatter,
    Area,
    Histogram,
    Pie,
    Donut,
    RadialBar,
    Bubble,
    Heatmap,
    Candlestick,
    Radar,
}

/// Semantics of an axis' data domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    /// Plain numeric values.
    Numerical,
    /// Date/time values rendered on a time scale.
    Timeseries,
    /// Discrete category labels.
    Category,
}

/// Placement of a horizontal text label relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HorizontalLabelPosition {
    #[default]
    InnerRight,
    InnerCenter,
    InnerLeft,
    OuterRight,
    OuterCenter,
    OuterLeft,
}

/// Placement of a vertical text label relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum VerticalLabelPosition {
    #[default]
    InnerTop,
    InnerMiddle,
    InnerBottom,
    OuterTop,
    OuterMiddle,
    OuterBottom,
}

/// Conventional chart type applied by consumers when `PlotConfig.chart_type`
/// is omitted.
pub const DEFAULT_CHART_TYPE: ChartType = ChartType::Line;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_type_tags_are_camel_case() {
        assert_eq!(serde_json::to_string(&ChartType::RadialBar).unwrap(), "\"radialBar\"");
        assert_eq!(serde_json::to_string(&ChartType::Candlestick).unwrap(), "\"candlestick\"");
    }

    #[test]
    fn axis_type_tags_are_lowercase() {
        assert_eq!(serde_json::to_string(&AxisType::Numerical).unwrap(), "\"numerical\"");
        let t: AxisType = serde_json::from_str("\"timeseries\"").unwrap();
        assert_eq!(t, AxisType::Timeseries);
    }

    #[test]
    fn label_position_tags_are_kebab_case() {
        assert_eq!(
            serde_json::to_string(&HorizontalLabelPosition::InnerRight).unwrap(),
            "\"inner-right\""
        );
        assert_eq!(
            serde_json::to_string(&VerticalLabelPosition::OuterMiddle).unwrap(),
            "\"outer-middle\""
        );
    }

    #[test]
    fn superseded_axis_type_tags_are_rejected() {
        // "default" and "indexed" belonged to an earlier revision of the
        // contract and are not part of the current tag set.
        assert!(serde_json::from_str::<AxisType>("\"default\"").is_err());
        assert!(serde_json::from_str::<AxisType>("\"indexed\"").is_err());
    }
}
