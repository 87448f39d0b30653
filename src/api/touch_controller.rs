use tracing::{debug, trace, warn};

use crate::core::SelectedValue;
use crate::interaction::{Gesture, ScrollResult, TouchEvent, TouchPhase};
use crate::render::ChartRenderer;

use super::{ChartEngine, ContainerScrollType};

impl<R: ChartRenderer> ChartEngine<R> {
    /// Feeds one touch sample through gesture recognition and value selection.
    ///
    /// Returns `true` when the chart needs a redraw. Flings and double-tap
    /// zooms started here continue through `tick`, which must use the same
    /// clock as `TouchEvent::time_ms`.
    pub fn handle_touch(&mut self, event: &TouchEvent) -> bool {
        let before = self.computator.current_viewport();
        let mut needs_redraw = false;

        for gesture in self.gestures.on_touch(event) {
            needs_redraw |= self.apply_gesture(gesture, event.time_ms);
        }
        if self.config.interaction.zoom_enabled && self.gestures.is_pinching() {
            self.container_may_intercept = false;
        }
        if self.config.interaction.value_touch_enabled {
            needs_redraw |= self.compute_touch(event);
        }

        let moved = self.notify_viewport_if_changed(before);
        needs_redraw || moved
    }

    /// Advances flings, zooms, rotation and viewport animations to `now_ms`.
    ///
    /// Returns `true` while another frame is needed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let before = self.computator.current_viewport();
        let mut needs_redraw = false;

        if self
            .scroller
            .compute_scroll_offset(&mut self.computator, now_ms)
        {
            needs_redraw = true;
        }
        if self.zoomer.compute_zoom(&mut self.computator, now_ms) {
            needs_redraw = true;
        }
        if self.rotation.compute_rotation(now_ms) {
            needs_redraw = true;
        }
        if let Some(viewport) = self.viewport_animator.tick(now_ms) {
            self.computator.set_current_viewport(viewport);
            needs_redraw = true;
        }

        trace!(now_ms, needs_redraw, "frame tick");
        let moved = self.notify_viewport_if_changed(before);
        needs_redraw || moved
    }

    /// Whether an enclosing scroll container may take over the current drag.
    ///
    /// Becomes `true` when the chart cannot scroll further along the
    /// container's direction; a new touch-down or a pinch resets it.
    #[must_use]
    pub fn container_may_intercept(&self) -> bool {
        self.container_may_intercept
    }

    #[must_use]
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation.rotation_degrees()
    }

    /// Sets the chart rotation, stopping any rotation fling.
    pub fn set_rotation_degrees(&mut self, degrees: f64) {
        self.rotation.abort_fling();
        self.rotation.set_rotation_degrees(degrees);
    }

    fn apply_gesture(&mut self, gesture: Gesture, time_ms: f64) -> bool {
        let interaction = self.config.interaction;
        match gesture {
            Gesture::Down { .. } => {
                self.container_may_intercept = false;
                if interaction.rotation_enabled {
                    self.rotation.abort_fling();
                    true
                } else if interaction.scroll_enabled {
                    self.viewport_animator.cancel();
                    self.scroller.start_scroll(&self.computator)
                } else {
                    false
                }
            }
            Gesture::Scroll {
                x,
                y,
                distance_x,
                distance_y,
            } => {
                if interaction.rotation_enabled {
                    let center = self.rotation_center();
                    self.rotation.scroll(distance_x, distance_y, (x, y), center);
                    true
                } else if interaction.scroll_enabled {
                    // A running double-tap zoom would overwrite the drag on its next tick.
                    self.zoomer.abort_zoom();
                    let result = self
                        .scroller
                        .scroll(&mut self.computator, distance_x, distance_y);
                    self.update_container_intercept(result);
                    result.any()
                } else {
                    false
                }
            }
            Gesture::Fling {
                x,
                y,
                velocity_x,
                velocity_y,
            } => {
                if interaction.rotation_enabled {
                    let center = self.rotation_center();
                    self.rotation
                        .fling(velocity_x, velocity_y, (x, y), center, time_ms)
                } else if interaction.scroll_enabled {
                    self.zoomer.abort_zoom();
                    debug!(velocity_x, velocity_y, "fling started");
                    // The viewport travels against the finger.
                    self.scroller
                        .fling(&self.computator, -velocity_x, -velocity_y, time_ms)
                } else {
                    false
                }
            }
            Gesture::DoubleTap { x, y } => {
                if !interaction.zoom_enabled {
                    return false;
                }
                let started = self.zoomer.start_zoom(&self.computator, x, y, time_ms);
                if started {
                    debug!(x, y, "double-tap zoom started");
                } else {
                    warn!(x, y, "double-tap outside content rect ignored");
                }
                started
            }
            Gesture::Scale {
                focus_x,
                focus_y,
                span_ratio,
            } => {
                if !interaction.zoom_enabled {
                    return false;
                }
                let factor = 1.0 / span_ratio;
                self.zoomer.abort_zoom();
                self.zoomer
                    .scale(&mut self.computator, focus_x, focus_y, factor)
            }
        }
    }

    fn compute_touch(&mut self, event: &TouchEvent) -> bool {
        let primary = event.primary();
        let outcome = match event.phase {
            TouchPhase::Down => {
                let hit = primary.and_then(|point| self.hit_test(point.x, point.y));
                self.selection.on_press(hit)
            }
            TouchPhase::Move => {
                if !self.selection.selected().is_set() {
                    return false;
                }
                let hit = primary.and_then(|point| self.hit_test(point.x, point.y));
                self.selection.on_move(hit)
            }
            TouchPhase::Up => {
                if !self.selection.selected().is_set() {
                    return false;
                }
                let hit = primary.and_then(|point| self.hit_test(point.x, point.y));
                self.selection.on_release(hit)
            }
            TouchPhase::Cancel => self.selection.on_cancel(),
        };
        self.apply_selection_outcome(outcome)
    }

    fn hit_test(&self, x: f64, y: f64) -> Option<SelectedValue> {
        self.renderer
            .hit_test(self.view(), x, y)
            .filter(|value| value.is_set())
    }

    fn rotation_center(&self) -> (f64, f64) {
        let rect = self.computator.content_rect();
        (rect.center_x(), rect.center_y())
    }

    fn update_container_intercept(&mut self, result: ScrollResult) {
        if self.gestures.is_pinching() {
            return;
        }
        self.container_may_intercept = match self.config.interaction.container_scroll {
            Some(ContainerScrollType::Horizontal) => !result.can_scroll_x,
            Some(ContainerScrollType::Vertical) => !result.can_scroll_y,
            None => false,
        };
    }
}
