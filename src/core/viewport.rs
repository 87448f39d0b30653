use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Size of the flat binary encoding produced by [`Viewport::to_bytes`].
pub const VIEWPORT_ENCODED_LEN: usize = 4 * std::mem::size_of::<f64>();

/// Axis-aligned rectangle in data space.
///
/// The vertical axis grows upward: a non-empty viewport has `left < right`
/// and `bottom < top`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Viewport {
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
        self.top - self.bottom
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
    pub fn is_empty(self) -> bool {
        self.left >= self.right || self.bottom >= self.top
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
    }

    /// Width used as a divisor; a zero width maps to `1.0`.
    #[must_use]
    pub fn safe_width(self) -> f64 {
        non_zero_or_one(self.width())
    }

    /// Height used as a divisor; a zero height maps to `1.0`.
    #[must_use]
    pub fn safe_height(self) -> f64 {
        non_zero_or_one(self.height())
    }

    /// Half-open point containment: `left <= x < right`, `bottom <= y < top`.
    #[must_use]
    pub fn contains_point(self, x: f64, y: f64) -> bool {
        !self.is_empty() && x >= self.left && x < self.right && y >= self.bottom && y < self.top
    }

    /// Returns `true` when `other` lies fully inside `self`.
    #[must_use]
    pub fn contains(self, other: Viewport) -> bool {
        !self.is_empty()
            && self.left <= other.left
            && self.bottom <= other.bottom
            && self.right >= other.right
            && self.top >= other.top
    }

    /// Grows `self` to enclose `other`.
    ///
    /// An empty `other` is ignored; an empty `self` adopts `other`.
    pub fn union(&mut self, other: Viewport) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            *self = other;
            return;
        }
        self.left = self.left.min(other.left);
        self.top = self.top.max(other.top);
        self.right = self.right.max(other.right);
        self.bottom = self.bottom.min(other.bottom);
    }

    /// Shrinks `self` to the overlap with `other`.
    ///
    /// Returns `false` and leaves `self` untouched when they do not overlap.
    pub fn intersect(&mut self, other: Viewport) -> bool {
        let overlaps = self.left < other.right
            && other.left < self.right
            && other.bottom < self.top
            && self.bottom < other.top;
        if !overlaps {
            return false;
        }
        self.left = self.left.max(other.left);
        self.top = self.top.min(other.top);
        self.right = self.right.min(other.right);
        self.bottom = self.bottom.max(other.bottom);
        true
    }

    /// Moves every edge inward by `dx` horizontally and `dy` vertically.
    ///
    /// Negative deltas grow the viewport.
    pub fn inset(&mut self, dx: f64, dy: f64) {
        self.left += dx;
        self.right -= dx;
        self.top -= dy;
        self.bottom += dy;
    }

    pub fn offset(&mut self, dx: f64, dy: f64) {
        self.left += dx;
        self.right += dx;
        self.top += dy;
        self.bottom += dy;
    }

    /// Moves the viewport so its top-left corner lands on `(left, top)`.
    pub fn offset_to(&mut self, left: f64, top: f64) {
        let width = self.width();
        let height = self.height();
        self.left = left;
        self.top = top;
        self.right = left + width;
        self.bottom = top - height;
    }

    /// Rebuilds the viewport at a new size, keeping `(focal_x, focal_y)` at the
    /// same relative position it had inside `self`.
    #[must_use]
    pub fn rescaled_around(
        self,
        focal_x: f64,
        focal_y: f64,
        new_width: f64,
        new_height: f64,
    ) -> Viewport {
        let fraction_x = (focal_x - self.left) / self.safe_width();
        let fraction_y = (focal_y - self.bottom) / self.safe_height();

        let left = focal_x - new_width * fraction_x;
        let bottom = focal_y - new_height * fraction_y;
        Viewport::new(left, bottom + new_height, left + new_width, bottom)
    }

    /// Linear interpolation of all four edges, `fraction` in `[0, 1]`.
    #[must_use]
    pub fn lerp(self, target: Viewport, fraction: f64) -> Viewport {
        Viewport::new(
            self.left + (target.left - self.left) * fraction,
            self.top + (target.top - self.top) * fraction,
            self.right + (target.right - self.right) * fraction,
            self.bottom + (target.bottom - self.bottom) * fraction,
        )
    }

    /// Encodes `left, top, right, bottom` as little-endian IEEE-754 doubles.
    #[must_use]
    pub fn to_bytes(self) -> [u8; VIEWPORT_ENCODED_LEN] {
        let mut out = [0u8; VIEWPORT_ENCODED_LEN];
        for (chunk, value) in out
            .chunks_exact_mut(8)
            .zip([self.left, self.top, self.right, self.bottom])
        {
            chunk.copy_from_slice(&value.to_le_bytes());
        }
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> ChartResult<Self> {
        if bytes.len() != VIEWPORT_ENCODED_LEN {
            return Err(ChartError::Decode {
                expected: VIEWPORT_ENCODED_LEN,
                actual: bytes.len(),
            });
        }

        let mut fields = [0.0f64; 4];
        for (field, chunk) in fields.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut raw = [0u8; 8];
            raw.copy_from_slice(chunk);
            *field = f64::from_le_bytes(raw);
        }
        Ok(Self::new(fields[0], fields[1], fields[2], fields[3]))
    }
}

pub(crate) fn non_zero_or_one(value: f64) -> f64 {
    if value == 0.0 { 1.0 } else { value }
}

#[cfg(test)]
mod tests {
    use super::Viewport;

    #[test]
    fn union_with_empty_receiver_adopts_argument() {
        let mut viewport = Viewport::default();
        viewport.union(Viewport::new(1.0, 5.0, 3.0, 2.0));
        assert_eq!(viewport, Viewport::new(1.0, 5.0, 3.0, 2.0));
    }

    #[test]
    fn union_ignores_empty_argument() {
        let mut viewport = Viewport::new(0.0, 10.0, 10.0, 0.0);
        viewport.union(Viewport::new(50.0, 0.0, 40.0, 10.0));
        assert_eq!(viewport, Viewport::new(0.0, 10.0, 10.0, 0.0));
    }

    #[test]
    fn intersect_rejects_disjoint_rectangles() {
        let mut viewport = Viewport::new(0.0, 10.0, 10.0, 0.0);
        assert!(!viewport.intersect(Viewport::new(20.0, 10.0, 30.0, 0.0)));
        assert_eq!(viewport, Viewport::new(0.0, 10.0, 10.0, 0.0));

        assert!(viewport.intersect(Viewport::new(5.0, 20.0, 30.0, 4.0)));
        assert_eq!(viewport, Viewport::new(5.0, 10.0, 10.0, 4.0));
    }

    #[test]
    fn point_containment_is_half_open() {
        let viewport = Viewport::new(0.0, 10.0, 10.0, 0.0);
        assert!(viewport.contains_point(0.0, 0.0));
        assert!(!viewport.contains_point(10.0, 5.0));
        assert!(!viewport.contains_point(5.0, 10.0));
    }

    #[test]
    fn offset_to_keeps_size() {
        let mut viewport = Viewport::new(0.0, 10.0, 4.0, 2.0);
        viewport.offset_to(20.0, 50.0);
        assert_eq!(viewport, Viewport::new(20.0, 50.0, 24.0, 42.0));
    }

    #[test]
    fn degenerate_size_is_treated_as_one() {
        let viewport = Viewport::new(3.0, 3.0, 3.0, 3.0);
        assert_eq!(viewport.safe_width(), 1.0);
        assert_eq!(viewport.safe_height(), 1.0);
        assert!(viewport.is_empty());
    }
}
