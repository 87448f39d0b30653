use crate::core::{ChartComputator, Padding, PixelRect, Viewport};
use crate::interaction::{
    ChartScroller, ChartZoomer, GestureRecognizer, RotationEngine, SelectionStateMachine,
    ViewportAnimator,
};
use crate::render::{ChartRenderer, ChartView};

use super::{ChartEngineConfig, ChartListener};

/// Main facade consumed by host applications.
///
/// `ChartEngine` owns the coordinate state and every gesture engine. Hosts
/// forward touch samples through `handle_touch`, drive animations with `tick`
/// while either reports that a redraw is needed, and read viewports or a
/// `RenderFrame` back out.
pub struct ChartEngine<R: ChartRenderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) computator: ChartComputator,
    pub(super) chart_size: (f64, f64),
    pub(super) padding: Padding,
    pub(super) host_insets: Padding,
    pub(super) gestures: GestureRecognizer,
    pub(super) scroller: ChartScroller,
    pub(super) zoomer: ChartZoomer,
    pub(super) rotation: RotationEngine,
    pub(super) selection: SelectionStateMachine,
    pub(super) viewport_animator: ViewportAnimator,
    pub(super) container_may_intercept: bool,
    pub(super) listener: Option<ChartListener>,
}

impl<R: ChartRenderer> ChartEngine<R> {
    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn computator(&self) -> &ChartComputator {
        &self.computator
    }

    /// Read-only view handed to renderers for mapping and hit testing.
    #[must_use]
    pub fn view(&self) -> ChartView<'_> {
        ChartView::new(&self.computator, self.rotation.rotation_degrees())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable renderer access for data replacement; call `data_changed` afterwards.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    #[must_use]
    pub fn maximum_viewport(&self) -> Viewport {
        self.computator.maximum_viewport()
    }

    #[must_use]
    pub fn current_viewport(&self) -> Viewport {
        self.computator.current_viewport()
    }

    #[must_use]
    pub fn visible_viewport(&self) -> Viewport {
        self.computator.visible_viewport()
    }

    #[must_use]
    pub fn content_rect(&self) -> PixelRect {
        self.computator.content_rect()
    }

    /// Whether any fling, zoom, rotation or viewport animation still needs frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.scroller.is_flinging()
            || self.zoomer.is_zooming()
            || self.rotation.is_flinging()
            || self.viewport_animator.is_running()
    }
}
