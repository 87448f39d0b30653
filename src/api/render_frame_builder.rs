use tracing::warn;

use crate::core::{
    ChartComputator, ManualTickLayout, VisibleViewportMode, auto_tick_budget, format_tick_label,
    generate_ticks, select_manual_ticks,
};
use crate::error::ChartResult;
use crate::render::{
    AxisTick, AxisTicks, ChartRenderer, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign,
    TextPrimitive,
};

use super::{AxisConfig, ChartEngine};

const LABEL_PADDING_PX: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AxisOrientation {
    Horizontal,
    Vertical,
}

impl<R: ChartRenderer> ChartEngine<R> {
    /// Materializes the current state into a backend-agnostic frame.
    #[must_use]
    pub fn render_frame(&self) -> RenderFrame {
        let computator = &self.computator;
        let rect = computator.content_rect();
        let mut frame = RenderFrame::new(rect, computator.current_viewport());
        frame.maximum_viewport = computator.maximum_viewport();
        frame.visible_viewport = computator.visible_viewport();
        frame.selected_value = self.selection.selected();
        frame.rotation_degrees = self.rotation.rotation_degrees();

        frame.x_axis = axis_ticks(computator, &self.config.x_axis, AxisOrientation::Horizontal);
        frame.y_axis = axis_ticks(computator, &self.config.y_axis, AxisOrientation::Vertical);

        if self.config.x_axis.grid_lines {
            for tick in &frame.x_axis.ticks {
                frame
                    .grid_lines
                    .push(LinePrimitive::new(tick.pixel, rect.top, tick.pixel, rect.bottom));
            }
        }
        if self.config.y_axis.grid_lines {
            for tick in &frame.y_axis.ticks {
                frame
                    .grid_lines
                    .push(LinePrimitive::new(rect.left, tick.pixel, rect.right, tick.pixel));
            }
        }

        let x_label_y = if self.config.x_axis.inside {
            rect.bottom - LABEL_PADDING_PX
        } else {
            rect.bottom + LABEL_PADDING_PX
        };
        for tick in frame.x_axis.ticks.iter().filter(|tick| !tick.label.is_empty()) {
            frame.labels.push(TextPrimitive::new(
                tick.label.clone(),
                tick.pixel,
                x_label_y,
                TextHAlign::Center,
            ));
        }
        let (y_label_x, y_align) = if self.config.y_axis.inside {
            (rect.left + LABEL_PADDING_PX, TextHAlign::Left)
        } else {
            (rect.left - LABEL_PADDING_PX, TextHAlign::Right)
        };
        for tick in frame.y_axis.ticks.iter().filter(|tick| !tick.label.is_empty()) {
            frame.labels.push(TextPrimitive::new(
                tick.label.clone(),
                y_label_x,
                tick.pixel,
                y_align,
            ));
        }

        if computator.visible_viewport_mode() == VisibleViewportMode::PinnedToMaximum {
            let current = computator.current_viewport();
            frame.preview_window = Some(RectPrimitive::new(
                computator.to_screen_x(current.left),
                computator.to_screen_y(current.top),
                computator.to_screen_x(current.right),
                computator.to_screen_y(current.bottom),
            ));
        }

        frame
    }

    /// Builds a frame and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.render_frame();
        if let Err(err) = frame.validate() {
            warn!(error = %err, "render frame rejected");
            return Err(err);
        }
        self.renderer.draw(&frame)
    }
}

fn axis_ticks(
    computator: &ChartComputator,
    config: &AxisConfig,
    orientation: AxisOrientation,
) -> AxisTicks {
    if !config.enabled {
        return AxisTicks::default();
    }

    let visible = computator.visible_viewport();
    let maximum = computator.maximum_viewport();
    let rect = computator.content_rect();
    let (start, stop, span_px, zoom_scale) = match orientation {
        AxisOrientation::Horizontal => (
            visible.left,
            visible.right,
            rect.width(),
            maximum.width() / visible.safe_width(),
        ),
        AxisOrientation::Vertical => (
            visible.bottom,
            visible.top,
            rect.height(),
            maximum.height() / visible.safe_height(),
        ),
    };
    let to_pixel = |value: f64| match orientation {
        AxisOrientation::Horizontal => computator.to_screen_x(value),
        AxisOrientation::Vertical => computator.to_screen_y(value),
    };

    if config.manual_values.is_empty() {
        let budget = auto_tick_budget(span_px, config.label_extent_px);
        let generated = generate_ticks(start, stop, budget);
        let ticks = generated
            .values
            .iter()
            .map(|value| AxisTick {
                value: *value,
                pixel: to_pixel(*value),
                label: format_tick_label(*value, generated.decimal_digits),
            })
            .collect();
        return AxisTicks {
            ticks,
            decimal_digits: generated.decimal_digits,
        };
    }

    let layout = ManualTickLayout {
        axis_span_px: span_px,
        label_extent_px: config.label_extent_px,
        zoom_scale,
        inside: config.inside,
    };
    let ticks = select_manual_ticks(&config.manual_values, (start, stop), layout)
        .into_iter()
        .map(|tick| AxisTick {
            value: tick.value,
            pixel: to_pixel(tick.value),
            label: tick.label.unwrap_or_else(|| tick.value.to_string()),
        })
        .collect();
    AxisTicks {
        ticks,
        decimal_digits: 0,
    }
}
