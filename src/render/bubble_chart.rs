use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::core::viewport::non_zero_or_one;
use crate::core::{SelectedValue, SelectedValueKind, Viewport};
use crate::render::hit_test::nearest_within;
use crate::render::{ChartRenderer, ChartView};

const DEFAULT_MIN_BUBBLE_RADIUS_PX: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BubbleValue {
    pub x: f64,
    pub y: f64,
    /// Bubble area in arbitrary units.
    pub z: f64,
}

impl BubbleValue {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    fn raw_radius(self) -> f64 {
        (self.z.abs() / PI).sqrt()
    }
}

/// Bubble chart data source.
///
/// The extent is grown by the largest bubble radius so edge bubbles are
/// never clipped. Data-space radii are `raw_radius * scale`, where the scale
/// maps the largest raw radius to a quarter of the point extent.
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleChartRenderer {
    pub values: Vec<BubbleValue>,
    pub bubble_scale: f64,
    pub min_bubble_radius_px: f64,
}

impl Default for BubbleChartRenderer {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl BubbleChartRenderer {
    #[must_use]
    pub fn new(values: Vec<BubbleValue>) -> Self {
        Self {
            values,
            bubble_scale: 1.0,
            min_bubble_radius_px: DEFAULT_MIN_BUBBLE_RADIUS_PX,
        }
    }

    fn finite_values(&self) -> impl Iterator<Item = BubbleValue> + '_ {
        self.values
            .iter()
            .copied()
            .filter(|value| value.x.is_finite() && value.y.is_finite() && value.z.is_finite())
    }

    fn points_extent(&self) -> Option<Viewport> {
        self.finite_values().fold(None, |extent, value| {
            let mut viewport = extent.unwrap_or(Viewport::new(value.x, value.y, value.x, value.y));
            viewport.left = viewport.left.min(value.x);
            viewport.right = viewport.right.max(value.x);
            viewport.top = viewport.top.max(value.y);
            viewport.bottom = viewport.bottom.min(value.y);
            Some(viewport)
        })
    }

    fn max_raw_radius(&self) -> f64 {
        self.finite_values()
            .map(BubbleValue::raw_radius)
            .fold(0.0, f64::max)
    }

    /// Data units per raw radius unit along each axis.
    fn radius_scale(&self) -> Option<(f64, f64)> {
        let extent = self.points_extent()?;
        let max_radius = non_zero_or_one(self.max_raw_radius());
        Some((
            extent.safe_width() / (max_radius * 4.0),
            extent.safe_height() / (max_radius * 4.0),
        ))
    }
}

impl ChartRenderer for BubbleChartRenderer {
    fn maximum_viewport(&self) -> Option<Viewport> {
        let mut extent = self.points_extent()?;
        let (scale_x, scale_y) = self.radius_scale()?;
        let max_radius = self.max_raw_radius() * self.bubble_scale;
        extent.inset(-max_radius * scale_x, -max_radius * scale_y);
        Some(extent)
    }

    fn hit_test(&self, view: ChartView<'_>, x: f64, y: f64) -> Option<SelectedValue> {
        let computator = view.computator();
        let (scale_x, scale_y) = self.radius_scale()?;
        let candidates = self.values.iter().enumerate().map(|(index, value)| {
            let raw = value.raw_radius() * self.bubble_scale;
            let radius_px = computator
                .to_screen_distance_x(raw * scale_x)
                .min(computator.to_screen_distance_y(raw * scale_y))
                .max(self.min_bubble_radius_px);
            (
                index,
                (computator.to_screen_x(value.x), computator.to_screen_y(value.y)),
                radius_px,
            )
        });

        let index = i32::try_from(nearest_within(candidates, (x, y))?).ok()?;
        Some(SelectedValue::new(index, index, SelectedValueKind::None))
    }
}
