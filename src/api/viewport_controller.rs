use tracing::debug;

use crate::core::{Viewport, ZoomType};
use crate::error::{ChartError, ChartResult};
use crate::render::ChartRenderer;

use super::ChartEngine;

fn ensure_finite(viewport: Viewport, name: &str) -> ChartResult<()> {
    if viewport.is_finite() {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "{name} viewport values must be finite"
        )))
    }
}

impl<R: ChartRenderer> ChartEngine<R> {
    /// Installs a current viewport after max-zoom and bounds constraints.
    /// Cancels a running viewport animation.
    pub fn set_current_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        ensure_finite(viewport, "current")?;
        let before = self.computator.current_viewport();
        self.viewport_animator.cancel();
        self.computator.set_current_viewport(viewport);
        self.notify_viewport_if_changed(before);
        Ok(())
    }

    /// Starts an eased transition from the current viewport to `target`.
    ///
    /// Frames are produced by `tick`; a transition already in flight is replaced.
    pub fn set_current_viewport_animated(
        &mut self,
        target: Viewport,
        duration_ms: f64,
    ) -> ChartResult<()> {
        ensure_finite(target, "target")?;
        if !duration_ms.is_finite() || duration_ms < 0.0 {
            return Err(ChartError::InvalidConfig(
                "viewport animation duration must be finite and >= 0".to_owned(),
            ));
        }
        debug!(?target, duration_ms, "viewport animation started");
        self.viewport_animator
            .start(self.computator.current_viewport(), target, duration_ms);
        Ok(())
    }

    /// Installs scroll bounds. The current viewport is constrained on its next change.
    pub fn set_maximum_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        ensure_finite(viewport, "maximum")?;
        debug!(?viewport, "maximum viewport installed");
        self.computator.set_maximum_viewport(viewport);
        Ok(())
    }

    /// Recomputes the maximum viewport from the renderer and zooms fully out.
    pub fn reset_viewports(&mut self) {
        let before = self.computator.current_viewport();
        self.stop_motion();
        if let Some(maximum) = self.renderer.maximum_viewport() {
            self.computator.set_maximum_viewport(maximum);
        }
        let maximum = self.computator.maximum_viewport();
        self.computator.set_current_viewport(maximum);
        self.notify_viewport_if_changed(before);
    }

    pub fn set_max_zoom(&mut self, max_zoom: f64) {
        let before = self.computator.current_viewport();
        self.computator.set_max_zoom(max_zoom);
        self.config.max_zoom = self.computator.max_zoom();
        self.notify_viewport_if_changed(before);
    }

    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.computator.max_zoom()
    }

    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        self.computator.zoom_level()
    }

    #[must_use]
    pub fn zoom_type(&self) -> ZoomType {
        self.zoomer.zoom_type()
    }

    pub fn set_zoom_type(&mut self, zoom_type: ZoomType) {
        self.config.zoom_type = zoom_type;
        self.zoomer.set_zoom_type(zoom_type);
    }

    /// Zooms to `level` (clamped to `[1, max_zoom]`) centred on a data point.
    pub fn set_zoom_level(&mut self, x: f64, y: f64, level: f64) {
        let target = self.zoom_viewport(x, y, level);
        let before = self.computator.current_viewport();
        self.viewport_animator.cancel();
        self.computator.set_current_viewport(target);
        self.notify_viewport_if_changed(before);
    }

    pub fn set_zoom_level_animated(&mut self, x: f64, y: f64, level: f64) {
        let target = self.zoom_viewport(x, y, level);
        self.viewport_animator.start(
            self.computator.current_viewport(),
            target,
            self.config.viewport_animation_ms,
        );
    }

    /// Centres the current viewport on a data point, keeping its size.
    /// Points outside the maximum viewport are ignored.
    pub fn move_to(&mut self, x: f64, y: f64) {
        let target = self.scroll_viewport(x, y);
        let before = self.computator.current_viewport();
        self.viewport_animator.cancel();
        self.computator.set_current_viewport(target);
        self.notify_viewport_if_changed(before);
    }

    pub fn move_to_animated(&mut self, x: f64, y: f64) {
        let target = self.scroll_viewport(x, y);
        self.viewport_animator.start(
            self.computator.current_viewport(),
            target,
            self.config.viewport_animation_ms,
        );
    }

    /// Cancels every fling, zoom, rotation and viewport animation.
    pub fn stop_motion(&mut self) {
        self.scroller.abort_fling();
        self.zoomer.abort_zoom();
        self.rotation.abort_fling();
        self.viewport_animator.cancel();
    }

    fn zoom_viewport(&self, x: f64, y: f64, level: f64) -> Viewport {
        let maximum = self.computator.maximum_viewport();
        let current = self.computator.current_viewport();
        let level = if level.is_finite() {
            level.clamp(1.0, self.computator.max_zoom())
        } else {
            1.0
        };
        let width = maximum.width() / level;
        let height = maximum.height() / level;

        let mut left = x - width / 2.0;
        let mut right = x + width / 2.0;
        let mut top = y + height / 2.0;
        let mut bottom = y - height / 2.0;
        if left < maximum.left {
            left = maximum.left;
            right = left + width;
        } else if right > maximum.right {
            right = maximum.right;
            left = right - width;
        }
        if top > maximum.top {
            top = maximum.top;
            bottom = top - height;
        } else if bottom < maximum.bottom {
            bottom = maximum.bottom;
            top = bottom + height;
        }

        match self.zoomer.zoom_type() {
            ZoomType::HorizontalAndVertical => Viewport::new(left, top, right, bottom),
            ZoomType::Horizontal => Viewport::new(left, current.top, right, current.bottom),
            ZoomType::Vertical => Viewport::new(current.left, top, current.right, bottom),
        }
    }

    fn scroll_viewport(&self, x: f64, y: f64) -> Viewport {
        let maximum = self.computator.maximum_viewport();
        let current = self.computator.current_viewport();
        if !maximum.contains_point(x, y) {
            return current;
        }

        let width = current.width();
        let height = current.height();
        let left = (x - width / 2.0)
            .min(maximum.right - width)
            .max(maximum.left);
        let top = (y + height / 2.0)
            .min(maximum.top)
            .max(maximum.bottom + height);
        Viewport::new(left, top, left + width, top - height)
    }
}
