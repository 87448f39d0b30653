use serde::{Deserialize, Serialize};

use crate::core::ChartComputator;
use crate::core::Viewport;
use crate::core::viewport::non_zero_or_one;

use super::fling::{Fling1D, FlingConfig};

/// Per-axis outcome of a drag step.
///
/// An axis reports `true` when the drag points toward an edge the current
/// viewport has not reached yet. Hosts use this to decide whether an
/// enclosing scroll container should take over the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScrollResult {
    pub can_scroll_x: bool,
    pub can_scroll_y: bool,
}

impl ScrollResult {
    #[must_use]
    pub fn any(self) -> bool {
        self.can_scroll_x || self.can_scroll_y
    }
}

/// Drag and fling engine.
///
/// Drags translate pixel distances into data distances through the visible
/// viewport scale. Flings run in the pixel space of the scroll surface and are
/// translated back into a viewport top-left every frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChartScroller {
    start_viewport: Viewport,
    fling: Option<[Fling1D; 2]>,
    config: FlingConfig,
}

impl ChartScroller {
    #[must_use]
    pub fn new(config: FlingConfig) -> Self {
        Self {
            start_viewport: Viewport::default(),
            fling: None,
            config,
        }
    }

    #[must_use]
    pub fn fling_config(&self) -> FlingConfig {
        self.config
    }

    pub fn set_fling_config(&mut self, config: FlingConfig) {
        self.config = config;
    }

    /// Viewport captured by the last `start_scroll` or `fling`.
    #[must_use]
    pub fn start_viewport(&self) -> Viewport {
        self.start_viewport
    }

    #[must_use]
    pub fn is_flinging(&self) -> bool {
        self.fling.is_some()
    }

    pub fn abort_fling(&mut self) {
        self.fling = None;
    }

    /// Snapshots the current viewport and stops any running fling.
    pub fn start_scroll(&mut self, computator: &ChartComputator) -> bool {
        self.abort_fling();
        self.start_viewport = computator.current_viewport();
        true
    }

    /// Applies one drag step.
    ///
    /// Distances use drag-detector convention: previous minus current pointer
    /// position, in pixels. A positive `distance_x` therefore moves the
    /// viewport right.
    pub fn scroll(
        &mut self,
        computator: &mut ChartComputator,
        distance_x: f64,
        distance_y: f64,
    ) -> ScrollResult {
        let max = computator.maximum_viewport();
        let visible = computator.visible_viewport();
        let current = computator.current_viewport();
        let rect = computator.content_rect();

        let can_scroll_left = current.left > max.left;
        let can_scroll_right = current.right < max.right;
        let can_scroll_top = current.top < max.top;
        let can_scroll_bottom = current.bottom > max.bottom;

        let result = ScrollResult {
            can_scroll_x: (can_scroll_left && distance_x <= 0.0)
                || (can_scroll_right && distance_x >= 0.0),
            can_scroll_y: (can_scroll_top && distance_y <= 0.0)
                || (can_scroll_bottom && distance_y >= 0.0),
        };

        if result.any() {
            let offset_x = distance_x * visible.width() / non_zero_or_one(rect.width());
            let offset_y = -distance_y * visible.height() / non_zero_or_one(rect.height());
            computator.set_viewport_top_left(current.left + offset_x, current.top + offset_y);
        }
        result
    }

    /// Launches a fling with pixel velocities of the viewport (not the finger).
    pub fn fling(
        &mut self,
        computator: &ChartComputator,
        velocity_x: f64,
        velocity_y: f64,
        now_ms: f64,
    ) -> bool {
        let max = computator.maximum_viewport();
        let rect = computator.content_rect();
        let (surface_x, surface_y) = computator.scroll_surface_size();
        self.start_viewport = computator.current_viewport();

        let start_x =
            surface_x * (self.start_viewport.left - max.left) / max.safe_width();
        let start_y = surface_y * (max.top - self.start_viewport.top) / max.safe_height();

        let fling_x = Fling1D::new(
            start_x,
            velocity_x,
            (0.0, (surface_x - rect.width()).max(0.0)),
            now_ms,
            self.config,
        );
        let fling_y = Fling1D::new(
            start_y,
            velocity_y,
            (0.0, (surface_y - rect.height()).max(0.0)),
            now_ms,
            self.config,
        );

        if fling_x.is_finished() && fling_y.is_finished() {
            self.fling = None;
            return false;
        }
        self.fling = Some([fling_x, fling_y]);
        true
    }

    /// Advances a running fling; returns `true` while another frame is needed.
    pub fn compute_scroll_offset(&mut self, computator: &mut ChartComputator, now_ms: f64) -> bool {
        let Some([fling_x, fling_y]) = self.fling.as_mut() else {
            return false;
        };
        if fling_x.is_finished() && fling_y.is_finished() {
            self.fling = None;
            return false;
        }

        let position_x = fling_x.step(now_ms);
        let position_y = fling_y.step(now_ms);

        let max = computator.maximum_viewport();
        let (surface_x, surface_y) = computator.scroll_surface_size();
        let left = max.left + max.width() * position_x / non_zero_or_one(surface_x);
        let top = max.top - max.height() * position_y / non_zero_or_one(surface_y);
        computator.set_viewport_top_left(left, top);
        true
    }
}
