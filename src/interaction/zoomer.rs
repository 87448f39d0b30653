use crate::core::{ChartComputator, Viewport, ZoomType};

use super::animation::{AnimationTimer, DEFAULT_ZOOM_ANIMATION_MS};

/// Fraction of the viewport removed by one double-tap zoom.
pub const ZOOM_AMOUNT: f64 = 0.25;

/// Pinch and double-tap zoom engine.
///
/// Both gestures rescale the current viewport around a data-space focal point
/// so the touched pixel does not move, then apply the zoom-axis mask.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartZoomer {
    zoom_type: ZoomType,
    zoom_amount: f64,
    duration_ms: f64,
    timer: AnimationTimer,
    start_viewport: Viewport,
    focal_point: (f64, f64),
}

impl Default for ChartZoomer {
    fn default() -> Self {
        Self::new(ZoomType::default())
    }
}

impl ChartZoomer {
    #[must_use]
    pub fn new(zoom_type: ZoomType) -> Self {
        Self {
            zoom_type,
            zoom_amount: ZOOM_AMOUNT,
            duration_ms: DEFAULT_ZOOM_ANIMATION_MS,
            timer: AnimationTimer::default(),
            start_viewport: Viewport::default(),
            focal_point: (0.0, 0.0),
        }
    }

    #[must_use]
    pub fn zoom_type(&self) -> ZoomType {
        self.zoom_type
    }

    pub fn set_zoom_type(&mut self, zoom_type: ZoomType) {
        self.zoom_type = zoom_type;
    }

    /// Tunes the double-tap animation: shrink fraction and duration.
    pub fn set_double_tap_zoom(&mut self, zoom_amount: f64, duration_ms: f64) {
        self.zoom_amount = zoom_amount;
        self.duration_ms = duration_ms;
    }

    #[must_use]
    pub fn is_zooming(&self) -> bool {
        !self.timer.is_finished()
    }

    #[must_use]
    pub fn focal_point(&self) -> (f64, f64) {
        self.focal_point
    }

    pub fn abort_zoom(&mut self) {
        self.timer.force_finish();
    }

    /// Starts the animated double-tap zoom anchored at a screen point.
    ///
    /// Returns `false` (and starts nothing) when the point lies outside the
    /// content rect.
    pub fn start_zoom(
        &mut self,
        computator: &ChartComputator,
        focal_x: f64,
        focal_y: f64,
        now_ms: f64,
    ) -> bool {
        self.timer.force_finish();
        self.start_viewport = computator.current_viewport();
        let Some(focal_point) = computator.to_data_point(focal_x, focal_y) else {
            return false;
        };
        self.focal_point = focal_point;
        self.timer.start_at(self.zoom_amount, self.duration_ms, now_ms);
        true
    }

    /// Advances the double-tap zoom; returns `true` while a frame is needed.
    pub fn compute_zoom(&mut self, computator: &mut ChartComputator, now_ms: f64) -> bool {
        if self.timer.is_finished() {
            return false;
        }

        let (progress, _) = self.timer.tick(now_ms);
        let remaining = 1.0 - progress;
        let target = self.start_viewport.rescaled_around(
            self.focal_point.0,
            self.focal_point.1,
            remaining * self.start_viewport.width(),
            remaining * self.start_viewport.height(),
        );
        computator.set_viewport_masked(target, self.zoom_type);
        true
    }

    /// Continuous pinch step. `factor < 1` zooms in, `factor > 1` zooms out.
    pub fn scale(
        &mut self,
        computator: &mut ChartComputator,
        focal_x: f64,
        focal_y: f64,
        factor: f64,
    ) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }
        let Some((data_x, data_y)) = computator.to_data_point(focal_x, focal_y) else {
            return false;
        };

        let current = computator.current_viewport();
        let target = current.rescaled_around(
            data_x,
            data_y,
            factor * current.width(),
            factor * current.height(),
        );
        computator.set_viewport_masked(target, self.zoom_type);
        true
    }
}
