mod bubble_chart;
mod column_chart;
mod combo_chart;
mod frame;
mod line_chart;
mod null_renderer;
mod pie_chart;
mod primitives;

pub use bubble_chart::{BubbleChartRenderer, BubbleValue};
pub use column_chart::{Column, ColumnChartRenderer};
pub use combo_chart::ComboChartRenderer;
pub use frame::{AxisTick, AxisTicks, RenderFrame};
pub use line_chart::{Line, LineChartRenderer, PointValue};
pub use null_renderer::NullRenderer;
pub use pie_chart::{PIE_VIEWPORT, PieChartRenderer, SliceValue};
pub use primitives::{LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

use crate::core::{ChartComputator, PixelRect, SelectedValue, Viewport};
use crate::error::ChartResult;

/// Read-only view of the coordinate state handed to renderers.
///
/// Renderers can map coordinates through it but have no way to move the
/// viewport; that stays with the engine.
#[derive(Debug, Clone, Copy)]
pub struct ChartView<'a> {
    computator: &'a ChartComputator,
    rotation_degrees: f64,
}

impl<'a> ChartView<'a> {
    #[must_use]
    pub fn new(computator: &'a ChartComputator, rotation_degrees: f64) -> Self {
        Self {
            computator,
            rotation_degrees,
        }
    }

    #[must_use]
    pub fn computator(&self) -> &'a ChartComputator {
        self.computator
    }

    #[must_use]
    pub fn content_rect(&self) -> PixelRect {
        self.computator.content_rect()
    }

    #[must_use]
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation_degrees
    }
}

/// Capability implemented by each chart type.
///
/// Renderers own their data: they report its extent and resolve touches to
/// values. Drawing receives a fully materialized `RenderFrame`.
pub trait ChartRenderer {
    /// Data extent to install as the maximum viewport; `None` without data.
    fn maximum_viewport(&self) -> Option<Viewport>;

    fn hit_test(&self, view: ChartView<'_>, x: f64, y: f64) -> Option<SelectedValue>;

    /// Pixels the renderer draws past data points (point radius plus touch
    /// tolerance), reserved as an internal content margin.
    fn content_overdraw_px(&self) -> f64 {
        0.0
    }

    fn draw(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()
    }
}
