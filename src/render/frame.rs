use serde::{Deserialize, Serialize};

use crate::core::{PixelRect, SelectedValue, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive};

/// One axis tick resolved to a pixel position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    /// Pixel coordinate along the axis (x for the horizontal axis, y for the vertical one).
    pub pixel: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisTicks {
    pub ticks: Vec<AxisTick>,
    pub decimal_digits: usize,
}

impl AxisTicks {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.ticks.iter().map(|tick| tick.value).collect()
    }
}

/// Backend-agnostic snapshot of everything a chart needs for one draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub content_rect: PixelRect,
    pub maximum_viewport: Viewport,
    pub current_viewport: Viewport,
    pub visible_viewport: Viewport,
    pub x_axis: AxisTicks,
    pub y_axis: AxisTicks,
    pub grid_lines: Vec<LinePrimitive>,
    pub labels: Vec<TextPrimitive>,
    /// Current viewport in pixels when the chart previews a wider extent.
    pub preview_window: Option<RectPrimitive>,
    pub selected_value: SelectedValue,
    pub rotation_degrees: f64,
}

impl RenderFrame {
    #[must_use]
    pub fn new(content_rect: PixelRect, current_viewport: Viewport) -> Self {
        Self {
            content_rect,
            maximum_viewport: current_viewport,
            current_viewport,
            visible_viewport: current_viewport,
            x_axis: AxisTicks::default(),
            y_axis: AxisTicks::default(),
            grid_lines: Vec::new(),
            labels: Vec::new(),
            preview_window: None,
            selected_value: SelectedValue::default(),
            rotation_degrees: 0.0,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        let rect = self.content_rect;
        if !rect.width().is_finite()
            || !rect.height().is_finite()
            || rect.width() <= 0.0
            || rect.height() <= 0.0
        {
            return Err(ChartError::InvalidContentRect {
                width: rect.width(),
                height: rect.height(),
            });
        }

        for (name, viewport) in [
            ("maximum", self.maximum_viewport),
            ("current", self.current_viewport),
            ("visible", self.visible_viewport),
        ] {
            if !viewport.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "{name} viewport must be finite"
                )));
            }
        }

        for line in &self.grid_lines {
            line.validate()?;
        }
        for label in &self.labels {
            label.validate()?;
        }
        if let Some(window) = self.preview_window {
            window.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grid_lines.is_empty() && self.labels.is_empty() && self.preview_window.is_none()
    }
}
