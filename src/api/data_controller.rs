use tracing::debug;

use crate::render::ChartRenderer;

use super::ChartEngine;

impl<R: ChartRenderer> ChartEngine<R> {
    /// Applies renderer data changes made through `renderer_mut`.
    ///
    /// Clears the selection and re-runs layout for the renderer's overdraw.
    /// With viewport calculation enabled, the maximum viewport is recomputed
    /// from the data and the chart zooms fully out.
    pub fn data_changed(&mut self) {
        let before = self.computator.current_viewport();
        self.selection.clear();
        self.relayout();

        if self.config.viewport_calculation_enabled {
            self.stop_motion();
            if let Some(maximum) = self.renderer.maximum_viewport() {
                self.computator.set_maximum_viewport(maximum);
                self.computator.set_current_viewport(maximum);
            }
        }
        debug!(
            maximum = ?self.computator.maximum_viewport(),
            recalculated = self.config.viewport_calculation_enabled,
            "chart data changed"
        );
        self.notify_viewport_if_changed(before);
    }

    pub fn set_viewport_calculation_enabled(&mut self, enabled: bool) {
        self.config.viewport_calculation_enabled = enabled;
    }
}
