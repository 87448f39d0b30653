use serde::{Deserialize, Serialize};

use crate::core::content_rect::{ContentRects, Padding, PixelRect};
use crate::core::viewport::{Viewport, non_zero_or_one};

/// Default limit on how far the current viewport may shrink relative to the
/// maximum viewport.
pub const DEFAULT_MAX_ZOOM: f64 = 20.0;

/// Zoom-axis mask: which viewport dimensions a zoom is allowed to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZoomType {
    Horizontal,
    Vertical,
    #[default]
    HorizontalAndVertical,
}

impl ZoomType {
    #[must_use]
    pub fn affects_horizontal(self) -> bool {
        matches!(self, Self::Horizontal | Self::HorizontalAndVertical)
    }

    #[must_use]
    pub fn affects_vertical(self) -> bool {
        matches!(self, Self::Vertical | Self::HorizontalAndVertical)
    }
}

/// Which viewport drives pixel <-> data scale math.
///
/// A standalone chart shows its current viewport, so the two are the same.
/// A preview chart shows the whole data extent and draws the current viewport
/// as a highlighted window, so its scale follows the maximum viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VisibleViewportMode {
    #[default]
    FollowCurrent,
    PinnedToMaximum,
}

/// Maps between data-space viewports and the pixel content rectangle.
///
/// Owns the maximum, current and visible viewports. Renderers only ever see a
/// shared reference; mutation goes through the scroll/zoom engines and the
/// engine facade.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartComputator {
    maximum: Viewport,
    current: Viewport,
    visible: Viewport,
    rects: ContentRects,
    max_zoom: f64,
    min_viewport_width: f64,
    min_viewport_height: f64,
    visible_mode: VisibleViewportMode,
}

impl Default for ChartComputator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartComputator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            maximum: Viewport::default(),
            current: Viewport::default(),
            visible: Viewport::default(),
            rects: ContentRects::default(),
            max_zoom: DEFAULT_MAX_ZOOM,
            min_viewport_width: 0.0,
            min_viewport_height: 0.0,
            visible_mode: VisibleViewportMode::FollowCurrent,
        }
    }

    #[must_use]
    pub fn maximum_viewport(&self) -> Viewport {
        self.maximum
    }

    #[must_use]
    pub fn current_viewport(&self) -> Viewport {
        self.current
    }

    #[must_use]
    pub fn visible_viewport(&self) -> Viewport {
        self.visible
    }

    #[must_use]
    pub fn visible_viewport_mode(&self) -> VisibleViewportMode {
        self.visible_mode
    }

    /// Plotting area after every margin inset; all mapping uses this rect.
    #[must_use]
    pub fn content_rect(&self) -> PixelRect {
        self.rects.minus_all_margins
    }

    #[must_use]
    pub fn content_rect_minus_axes_margins(&self) -> PixelRect {
        self.rects.minus_axes_margins
    }

    #[must_use]
    pub fn max_content_rect(&self) -> PixelRect {
        self.rects.max
    }

    #[must_use]
    pub fn chart_size(&self) -> (f64, f64) {
        (self.rects.chart_width, self.rects.chart_height)
    }

    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    #[must_use]
    pub fn minimum_viewport_size(&self) -> (f64, f64) {
        (self.min_viewport_width, self.min_viewport_height)
    }

    /// Current magnification relative to the maximum viewport (`1.0` = fully
    /// zoomed out).
    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        let horizontal = self.maximum.width() / self.current.safe_width();
        let vertical = self.maximum.height() / self.current.safe_height();
        horizontal.max(vertical)
    }

    pub fn to_screen_x(&self, value_x: f64) -> f64 {
        let rect = self.content_rect();
        let offset = (value_x - self.visible.left) * (rect.width() / self.visible.safe_width());
        rect.left + offset
    }

    pub fn to_screen_y(&self, value_y: f64) -> f64 {
        let rect = self.content_rect();
        let offset =
            (value_y - self.visible.bottom) * (rect.height() / self.visible.safe_height());
        rect.bottom - offset
    }

    /// Converts a horizontal data length into pixels, without offset.
    pub fn to_screen_distance_x(&self, distance: f64) -> f64 {
        distance * (self.content_rect().width() / self.visible.safe_width())
    }

    /// Converts a vertical data length into pixels, without offset.
    pub fn to_screen_distance_y(&self, distance: f64) -> f64 {
        distance * (self.content_rect().height() / self.visible.safe_height())
    }

    /// Inverse mapping; `None` when the pixel lies outside the content rect.
    pub fn to_data_point(&self, screen_x: f64, screen_y: f64) -> Option<(f64, f64)> {
        let rect = self.content_rect();
        if !rect.contains(screen_x, screen_y) {
            return None;
        }

        let x = self.visible.left
            + (screen_x - rect.left) * self.visible.width() / non_zero_or_one(rect.width());
        let y = self.visible.bottom
            + (rect.bottom - screen_y) * self.visible.height() / non_zero_or_one(rect.height());
        Some((x, y))
    }

    /// Loose containment test with an extra tolerance band around the rect.
    pub fn is_within_content_rect(&self, screen_x: f64, screen_y: f64, precision_px: f64) -> bool {
        let rect = self.content_rect();
        screen_x >= rect.left - precision_px
            && screen_x <= rect.right + precision_px
            && screen_y <= rect.bottom + precision_px
            && screen_y >= rect.top - precision_px
    }

    /// Pixel size of a canvas holding the whole maximum viewport at the
    /// current zoom.
    pub fn scroll_surface_size(&self) -> (f64, f64) {
        let rect = self.content_rect();
        (
            rect.width() * self.maximum.width() / self.current.safe_width(),
            rect.height() * self.maximum.height() / self.current.safe_height(),
        )
    }

    /// Moves the current viewport to a new top-left corner, keeping its size.
    ///
    /// Each axis is clamped into the maximum viewport on its own, so a pan
    /// past one edge is truncated on that axis only.
    pub fn set_viewport_top_left(&mut self, left: f64, top: f64) {
        let width = self.current.width();
        let height = self.current.height();

        let left = left.min(self.maximum.right - width).max(self.maximum.left);
        let top = top.max(self.maximum.bottom + height).min(self.maximum.top);
        self.constrain_viewport(Viewport::new(left, top, left + width, top - height));
    }

    /// Installs `viewport` as current after max-zoom and bounds constraints.
    pub fn set_current_viewport(&mut self, viewport: Viewport) {
        self.constrain_viewport(viewport);
    }

    /// Applies only the dimensions selected by `zoom_type`; the orthogonal
    /// dimension keeps its current value.
    pub fn set_viewport_masked(&mut self, viewport: Viewport, zoom_type: ZoomType) {
        let current = self.current;
        let masked = match zoom_type {
            ZoomType::HorizontalAndVertical => viewport,
            ZoomType::Horizontal => {
                Viewport::new(viewport.left, current.top, viewport.right, current.bottom)
            }
            ZoomType::Vertical => {
                Viewport::new(current.left, viewport.top, current.right, viewport.bottom)
            }
        };
        self.constrain_viewport(masked);
    }

    pub fn set_maximum_viewport(&mut self, viewport: Viewport) {
        self.maximum = viewport;
        self.compute_minimum_viewport_size();
        if self.visible_mode == VisibleViewportMode::PinnedToMaximum {
            self.visible = self.maximum;
        }
    }

    /// Sets the max zoom; values below `1.0` (or non-finite) become `1.0`.
    pub fn set_max_zoom(&mut self, max_zoom: f64) {
        self.max_zoom = if max_zoom.is_finite() && max_zoom >= 1.0 {
            max_zoom
        } else {
            1.0
        };
        self.compute_minimum_viewport_size();
        self.constrain_viewport(self.current);
    }

    pub fn set_visible_viewport_mode(&mut self, mode: VisibleViewportMode) {
        self.visible_mode = mode;
        self.visible = match mode {
            VisibleViewportMode::FollowCurrent => self.current,
            VisibleViewportMode::PinnedToMaximum => self.maximum,
        };
    }

    /// Lays out the content rects for a new chart size, dropping accumulated insets.
    pub fn set_content_rect(&mut self, chart_width: f64, chart_height: f64, padding: Padding) {
        self.rects = ContentRects::new(chart_width, chart_height, padding);
    }

    /// Axis-margin inset; shrinks both the axes and all-margins rects.
    pub fn inset_content_rect(&mut self, insets: Padding) {
        self.rects.inset_axes_margins(insets);
    }

    /// Renderer-overdraw inset; shrinks only the all-margins rect.
    pub fn inset_content_rect_by_internal_margins(&mut self, insets: Padding) {
        self.rects.inset_internal_margins(insets);
    }

    pub fn reset_content_rect(&mut self) {
        self.rects.reset();
    }

    fn compute_minimum_viewport_size(&mut self) {
        self.min_viewport_width = self.maximum.width() / self.max_zoom;
        self.min_viewport_height = self.maximum.height() / self.max_zoom;
    }

    fn constrain_viewport(&mut self, viewport: Viewport) {
        let max = self.maximum;
        let Viewport {
            mut left,
            mut top,
            mut right,
            mut bottom,
        } = viewport;

        if right - left < self.min_viewport_width {
            right = left + self.min_viewport_width;
            if left < max.left {
                left = max.left;
                right = left + self.min_viewport_width;
            } else if right > max.right {
                right = max.right;
                left = right - self.min_viewport_width;
            }
        }

        if top - bottom < self.min_viewport_height {
            bottom = top - self.min_viewport_height;
            if top > max.top {
                top = max.top;
                bottom = top - self.min_viewport_height;
            } else if bottom < max.bottom {
                bottom = max.bottom;
                top = bottom + self.min_viewport_height;
            }
        }

        self.current = Viewport::new(
            left.max(max.left),
            top.min(max.top),
            right.min(max.right),
            bottom.max(max.bottom),
        );
        if self.visible_mode == VisibleViewportMode::FollowCurrent {
            self.visible = self.current;
        }
    }
}
