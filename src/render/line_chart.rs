use serde::{Deserialize, Serialize};

use crate::core::{SelectedValue, SelectedValueKind, Viewport};
use crate::render::hit_test::nearest_within;
use crate::render::{ChartRenderer, ChartView};

const DEFAULT_POINT_RADIUS_PX: f64 = 6.0;
const DEFAULT_TOUCH_TOLERANCE_PX: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointValue {
    pub x: f64,
    pub y: f64,
}

impl PointValue {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Line {
    pub points: Vec<PointValue>,
}

impl Line {
    #[must_use]
    pub fn new(points: Vec<PointValue>) -> Self {
        Self { points }
    }
}

/// Data extent covered by a set of points; `None` when there are none.
pub(crate) fn points_extent<'a>(
    points: impl IntoIterator<Item = &'a PointValue>,
) -> Option<Viewport> {
    let mut extent: Option<Viewport> = None;
    for point in points {
        if !point.x.is_finite() || !point.y.is_finite() {
            continue;
        }
        let viewport = extent.get_or_insert(Viewport::new(point.x, point.y, point.x, point.y));
        viewport.left = viewport.left.min(point.x);
        viewport.right = viewport.right.max(point.x);
        viewport.top = viewport.top.max(point.y);
        viewport.bottom = viewport.bottom.min(point.y);
    }
    extent
}

/// Line chart data source: extent computation and point hit testing.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartRenderer {
    pub lines: Vec<Line>,
    pub point_radius_px: f64,
    pub touch_tolerance_px: f64,
}

impl Default for LineChartRenderer {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl LineChartRenderer {
    #[must_use]
    pub fn new(lines: Vec<Line>) -> Self {
        Self {
            lines,
            point_radius_px: DEFAULT_POINT_RADIUS_PX,
            touch_tolerance_px: DEFAULT_TOUCH_TOLERANCE_PX,
        }
    }

    #[must_use]
    pub fn with_point_radius(mut self, point_radius_px: f64) -> Self {
        self.point_radius_px = point_radius_px;
        self
    }
}

impl ChartRenderer for LineChartRenderer {
    fn maximum_viewport(&self) -> Option<Viewport> {
        points_extent(self.lines.iter().flat_map(|line| line.points.iter()))
    }

    fn hit_test(&self, view: ChartView<'_>, x: f64, y: f64) -> Option<SelectedValue> {
        let computator = view.computator();
        let radius = self.point_radius_px + self.touch_tolerance_px;
        let candidates = self.lines.iter().enumerate().flat_map(|(line_index, line)| {
            line.points
                .iter()
                .enumerate()
                .map(move |(point_index, point)| {
                    (
                        (line_index, point_index),
                        (computator.to_screen_x(point.x), computator.to_screen_y(point.y)),
                        radius,
                    )
                })
        });

        let (line_index, point_index) = nearest_within(candidates, (x, y))?;
        Some(SelectedValue::new(
            i32::try_from(line_index).ok()?,
            i32::try_from(point_index).ok()?,
            SelectedValueKind::Line,
        ))
    }

    fn content_overdraw_px(&self) -> f64 {
        self.point_radius_px + self.touch_tolerance_px
    }
}
