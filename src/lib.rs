//! chart-viewport: viewport coordinate and gesture engine for 2-D charts.
//!
//! The crate keeps the numerical core that every chart type shares:
//! data-space viewports and their pixel mapping, drag/fling/pinch/double-tap
//! motion, "nice" axis tick generation, and touch-driven value selection.
//! Drawing, theming and view lifecycles stay with the host.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, ChartEvent};
pub use error::{ChartError, ChartResult};
