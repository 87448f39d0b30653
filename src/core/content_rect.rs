use serde::{Deserialize, Serialize};

/// Pixel-space rectangle in screen convention (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PixelRect {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        (self.left + self.right) * 0.5
    }

    #[must_use]
    pub fn center_y(self) -> f64 {
        (self.top + self.bottom) * 0.5
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        let (width, height) = (self.width(), self.height());
        width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
    }

    /// Closed containment, edges included.
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// Moves each edge inward by its own delta.
    pub fn inset_by(&mut self, insets: Padding) {
        self.left += insets.left;
        self.top += insets.top;
        self.right -= insets.right;
        self.bottom -= insets.bottom;
    }
}

/// Per-side pixel amounts used for chart padding and margin insets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Padding {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}

impl std::ops::Add for Padding {
    type Output = Padding;

    fn add(self, other: Padding) -> Padding {
        Padding::new(
            self.left + other.left,
            self.top + other.top,
            self.right + other.right,
            self.bottom + other.bottom,
        )
    }
}

impl std::ops::AddAssign for Padding {
    fn add_assign(&mut self, other: Padding) {
        *self = *self + other;
    }
}

/// The three nested content rectangles produced by layout.
///
/// `max` is the chart area minus padding. Axis margins shrink both
/// `minus_axes_margins` and `minus_all_margins`; renderer overdraw (point
/// radius, touch tolerance) shrinks only `minus_all_margins`. Insets accumulate
/// until the next [`ContentRects::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentRects {
    pub chart_width: f64,
    pub chart_height: f64,
    pub max: PixelRect,
    pub minus_axes_margins: PixelRect,
    pub minus_all_margins: PixelRect,
}

impl ContentRects {
    #[must_use]
    pub fn new(chart_width: f64, chart_height: f64, padding: Padding) -> Self {
        let max = PixelRect::new(
            padding.left,
            padding.top,
            chart_width - padding.right,
            chart_height - padding.bottom,
        );
        Self {
            chart_width,
            chart_height,
            max,
            minus_axes_margins: max,
            minus_all_margins: max,
        }
    }

    pub fn inset_axes_margins(&mut self, insets: Padding) {
        self.minus_axes_margins.inset_by(insets);
        self.minus_all_margins.inset_by(insets);
    }

    pub fn inset_internal_margins(&mut self, insets: Padding) {
        self.minus_all_margins.inset_by(insets);
    }

    /// Drops every accumulated inset.
    pub fn reset(&mut self) {
        self.minus_axes_margins = self.max;
        self.minus_all_margins = self.max;
    }
}

#[cfg(test)]
mod tests {
    use super::{ContentRects, Padding, PixelRect};

    #[test]
    fn insets_accumulate_across_collaborators() {
        let mut rects = ContentRects::new(400.0, 300.0, Padding::uniform(10.0));
        rects.inset_axes_margins(Padding::new(30.0, 0.0, 0.0, 20.0));
        rects.inset_axes_margins(Padding::new(5.0, 0.0, 0.0, 0.0));
        rects.inset_internal_margins(Padding::uniform(4.0));

        assert_eq!(rects.max, PixelRect::new(10.0, 10.0, 390.0, 290.0));
        assert_eq!(
            rects.minus_axes_margins,
            PixelRect::new(45.0, 10.0, 390.0, 270.0)
        );
        assert_eq!(
            rects.minus_all_margins,
            PixelRect::new(49.0, 14.0, 386.0, 266.0)
        );

        rects.reset();
        assert_eq!(rects.minus_all_margins, rects.max);
    }
}
