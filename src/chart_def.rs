//! The top-level transferable unit: data, plot configuration, and axis map
//! travelling together as one value.

use serde::{Deserialize, Serialize};

use crate::axis::AxisMap;
use crate::plot::PlotConfig;

/// The serialized dataframe embedded in a [`ChartDef`].
///
/// The payload's internal structure is owned by an external serialization
/// component; this crate transports it opaquely and never inspects it.
pub type SerializedDataFrame = serde_json::Value;

/// A chart definition suitable for serialization to JSON and transfer to a
/// rendering consumer (e.g. over a REST API to the browser).
///
/// The three fields form one atomic value; there are no partial-update
/// semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDef {
    /// Serialized representation of the data being charted.
    pub data: SerializedDataFrame,

    /// Defines the look of the chart.
    pub plot_config: PlotConfig,

    /// Maps columns in the data to axes on the chart.
    pub axis_map: AxisMap,
}

impl ChartDef {
    pub fn new(data: SerializedDataFrame, plot_config: PlotConfig, axis_map: AxisMap) -> Self {
        Self {
            data,
            plot_config,
            axis_map,
        }
    }
}
