/// MultiBar Core -- data reduction and layout for proportional bar charts.
///
/// This crate contains all chart logic with zero UI dependencies. Hosts push
/// items and configuration into a [`MultiBarChart`], call
/// [`MultiBarChart::recompute`], and paint the returned [`Primitive`]s with
/// whatever toolkit they use.
///
/// # Modules
///
/// - [`model`] -- Colours, input items, display segments and drawing primitives.
/// - [`reduce`] -- Filtering, sorting, "Other" aggregation and colour resolution.
/// - [`layout`] -- Proportional widths, the "Other" cap and primitive placement.
/// - [`chart`] -- Dirty-tracking state machine tying reducer and layout together.
/// - [`config`] -- Chart configuration and JSON chart documents.
/// - [`fallback`] -- Random colours for when the palette is empty.
pub mod chart;
pub mod config;
pub mod error;
pub mod fallback;
pub mod layout;
pub mod model;
pub mod reduce;

pub use chart::MultiBarChart;
pub use config::{ChartConfig, ChartDocument};
pub use error::ConfigError;
pub use fallback::{FallbackColors, RandomFallback};
pub use model::{BarItem, Color, DisplaySegment, Primitive};
