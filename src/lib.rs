//! chart-def
//!
//! The data contract between a plotting producer and a rendering consumer:
//! a set of serde-serializable shapes that describe how the columns of a
//! dataframe map onto a chart's visual encoding, bundled with the serialized
//! dataframe itself into one transferable [`ChartDef`] value.
//!
//! This crate only declares shape. Rendering, data transformation,
//! cross-field validation (series names against dataframe columns, `min <=
//! max` ranges, length-string syntax for dimensions), and the dataframe
//! serialization format all belong to the components on either side of the
//! wire.
//!
//! ### Wire form
//! - Field names are camelCase; enum values serialize as string tags.
//! - Omitted optional fields stay omitted (no `null` placeholders), and
//!   round-trips preserve omission.
//! - `AxisMap.y` and `AxisMap.y2` are required sequences that serialize even
//!   when empty; `AxisMap.x` disappears entirely when unset.
//!
//! ### Example
//! ```
//! use chart_def::{AxisMap, ChartDef, ChartType, PlotConfig, YAxisSeriesConfig};
//!
//! let plot = PlotConfig {
//!     chart_type: Some(ChartType::Bar),
//!     ..Default::default()
//! };
//! let axis_map = AxisMap::new(vec![YAxisSeriesConfig::new("revenue")]);
//! let data = serde_json::json!({ "revenue": [10, 20, 30] });
//!
//! let def = ChartDef::new(data, plot, axis_map);
//! let json = chart_def::storage::to_json(&def)?;
//! let back = chart_def::storage::from_json(&json)?;
//! assert_eq!(back, def);
//! # Ok::<(), chart_def::storage::StorageError>(())
//! ```

pub mod axis;
pub mod chart_def;
pub mod plot;
pub mod storage;
pub mod style;
pub mod types;

pub use axis::{
    AxisConfig, AxisLabelConfig, AxisMap, AxisSeriesConfig, AxisTicksConfiguration, LabelPosition,
    XAxisConfig, YAxisConfig, YAxisSeriesConfig,
};
pub use chart_def::{ChartDef, SerializedDataFrame};
pub use plot::{Dimension, PlotConfig};
pub use style::{DataLabels, FontConfig, LegendConfig};
pub use types::{
    AxisType, ChartType, DEFAULT_CHART_TYPE, HorizontalLabelPosition, VerticalLabelPosition,
};
