use serde::{Deserialize, Serialize};

use crate::core::{SelectedValue, SelectedValueKind, Viewport};
use crate::render::hit_test::{point_to_angle, sector_at_angle};
use crate::render::{ChartRenderer, ChartView};

/// Pie charts live in a fixed `0..100` square; gestures only rotate them.
pub const PIE_VIEWPORT: Viewport = Viewport::new(0.0, 100.0, 100.0, 0.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceValue {
    pub value: f64,
}

impl SliceValue {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self { value }
    }
}

/// Pie chart data source with angular hit testing.
///
/// The circle is centred in the content rect with a radius of half its
/// shorter side. Slices run clockwise starting at the rotation angle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PieChartRenderer {
    pub slices: Vec<SliceValue>,
    /// Radius of an empty centre, as a fraction of the pie radius (donut charts).
    pub center_hole_ratio: f64,
}

impl PieChartRenderer {
    #[must_use]
    pub fn new(slices: Vec<SliceValue>) -> Self {
        Self {
            slices,
            center_hole_ratio: 0.0,
        }
    }

    /// Sweep angle of every slice in degrees.
    #[must_use]
    pub fn sweeps(&self) -> Vec<f64> {
        let magnitude = |slice: &SliceValue| {
            if slice.value.is_finite() {
                slice.value.abs()
            } else {
                0.0
            }
        };
        let total: f64 = self.slices.iter().map(magnitude).sum();
        if total <= 0.0 {
            return vec![0.0; self.slices.len()];
        }
        self.slices
            .iter()
            .map(|slice| magnitude(slice) * 360.0 / total)
            .collect()
    }
}

impl ChartRenderer for PieChartRenderer {
    fn maximum_viewport(&self) -> Option<Viewport> {
        Some(PIE_VIEWPORT)
    }

    fn hit_test(&self, view: ChartView<'_>, x: f64, y: f64) -> Option<SelectedValue> {
        let rect = view.content_rect();
        let (center_x, center_y) = (rect.center_x(), rect.center_y());
        let radius = rect.width().min(rect.height()) / 2.0;
        let distance = (x - center_x).hypot(y - center_y);
        if distance > radius || distance < radius * self.center_hole_ratio.clamp(0.0, 1.0) {
            return None;
        }

        let angle = point_to_angle(x, y, center_x, center_y);
        let index = sector_at_angle(&self.sweeps(), view.rotation_degrees(), angle)?;
        let index = i32::try_from(index).ok()?;
        Some(SelectedValue::new(index, index, SelectedValueKind::None))
    }
}
