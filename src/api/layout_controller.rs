use tracing::{debug, warn};

use crate::core::Padding;
use crate::render::ChartRenderer;

use super::ChartEngine;

impl<R: ChartRenderer> ChartEngine<R> {
    /// Lays out a new chart size; drops insets from the previous layout pass.
    pub fn on_size_changed(&mut self, width: f64, height: f64, padding: Padding) {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            warn!(width, height, "ignoring invalid chart size");
            return;
        }
        self.chart_size = (width, height);
        self.padding = padding;
        self.host_insets = Padding::default();
        self.relayout();
        debug!(width, height, content = ?self.computator.content_rect(), "chart size changed");
    }

    /// Reserves extra axis margin; successive calls accumulate until the next
    /// size change.
    pub fn inset_content_rect(&mut self, left: f64, top: f64, right: f64, bottom: f64) {
        let insets = Padding::new(left, top, right, bottom);
        self.host_insets += insets;
        self.computator.inset_content_rect(insets);
    }

    /// Rebuilds the content rects: padding, axis margins and host insets,
    /// then renderer overdraw.
    pub(super) fn relayout(&mut self) {
        let (width, height) = self.chart_size;
        self.computator.set_content_rect(width, height, self.padding);

        let axis_margins = Padding::new(
            self.config.y_axis.reserved_margin_px(),
            0.0,
            0.0,
            self.config.x_axis.reserved_margin_px(),
        );
        self.computator
            .inset_content_rect(axis_margins + self.host_insets);

        let overdraw = self.renderer.content_overdraw_px();
        if overdraw.is_finite() && overdraw > 0.0 {
            self.computator
                .inset_content_rect_by_internal_margins(Padding::uniform(overdraw));
        }
    }
}
