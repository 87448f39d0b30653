use tracing::debug;

use crate::core::{ChartComputator, Padding};
use crate::error::ChartResult;
use crate::interaction::{
    ChartScroller, ChartZoomer, GestureRecognizer, RotationEngine, SelectionStateMachine,
    ViewportAnimator,
};
use crate::render::ChartRenderer;

use super::{ChartEngine, ChartEngineConfig, ChartListener};

impl<R: ChartRenderer> ChartEngine<R> {
    /// Creates an engine and installs the renderer's data extent.
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;

        let mut computator = ChartComputator::new();
        computator.set_visible_viewport_mode(config.visible_viewport_mode);
        computator.set_max_zoom(config.max_zoom);

        let mut zoomer = ChartZoomer::new(config.zoom_type);
        zoomer.set_double_tap_zoom(config.double_tap_zoom_amount, config.zoom_animation_ms);

        let mut engine = Self {
            renderer,
            computator,
            chart_size: (0.0, 0.0),
            padding: Padding::default(),
            host_insets: Padding::default(),
            gestures: GestureRecognizer::new(config.gestures),
            scroller: ChartScroller::new(config.fling),
            zoomer,
            rotation: RotationEngine::new(config.fling),
            selection: SelectionStateMachine::new(config.interaction.selection_mode),
            viewport_animator: ViewportAnimator::default(),
            container_may_intercept: false,
            listener: None,
            config,
        };

        if let Some(maximum) = engine.renderer.maximum_viewport() {
            engine.computator.set_maximum_viewport(maximum);
            engine.computator.set_current_viewport(maximum);
        }
        debug!(
            maximum = ?engine.computator.maximum_viewport(),
            zoom_type = ?engine.config.zoom_type,
            "chart engine initialized"
        );
        Ok(engine)
    }

    /// Same as [`ChartEngine::new`] with a listener attached from the start.
    pub fn with_listener(
        renderer: R,
        config: ChartEngineConfig,
        listener: ChartListener,
    ) -> ChartResult<Self> {
        let mut engine = Self::new(renderer, config)?;
        engine.listener = Some(listener);
        Ok(engine)
    }
}
