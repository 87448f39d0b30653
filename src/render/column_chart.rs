use serde::{Deserialize, Serialize};

use crate::core::{PixelRect, SelectedValue, SelectedValueKind, Viewport};
use crate::render::hit_test::rect_contains;
use crate::render::{ChartRenderer, ChartView};

const DEFAULT_FILL_RATIO: f64 = 0.75;
const BASE_VALUE: f64 = 0.0;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Column {
    /// One value per subcolumn.
    pub values: Vec<f64>,
}

impl Column {
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }
}

/// Column chart data source.
///
/// Column `i` is centred on `x = i`, so the extent spans `-0.5..n-0.5`
/// horizontally and always includes the zero baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnChartRenderer {
    pub columns: Vec<Column>,
    pub stacked: bool,
    /// Share of one x unit covered by a column, in `(0, 1]`.
    pub fill_ratio: f64,
}

impl Default for ColumnChartRenderer {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ColumnChartRenderer {
    #[must_use]
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            stacked: false,
            fill_ratio: DEFAULT_FILL_RATIO,
        }
    }

    #[must_use]
    pub fn stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    /// Pixel rectangles of every subcolumn, keyed by `(column, subcolumn)`.
    fn subcolumn_rects<'a>(
        &'a self,
        view: ChartView<'a>,
    ) -> impl Iterator<Item = ((usize, usize), PixelRect)> + 'a {
        let computator = view.computator();
        let column_width = computator.to_screen_distance_x(self.fill_ratio.clamp(0.0, 1.0));
        let base_y = computator.to_screen_y(BASE_VALUE);

        self.columns
            .iter()
            .enumerate()
            .flat_map(move |(column_index, column)| {
                let center = computator.to_screen_x(column_index as f64);
                let left = center - column_width / 2.0;
                let subcolumn_width = column_width / column.values.len().max(1) as f64;
                let mut positive_base = BASE_VALUE;
                let mut negative_base = BASE_VALUE;

                column
                    .values
                    .iter()
                    .enumerate()
                    .filter(|(_, value)| value.is_finite())
                    .map(move |(sub_index, value)| {
                        let rect = if self.stacked {
                            let base = if *value >= 0.0 {
                                &mut positive_base
                            } else {
                                &mut negative_base
                            };
                            let from = computator.to_screen_y(*base);
                            *base += value;
                            let to = computator.to_screen_y(*base);
                            PixelRect::new(left, from.min(to), left + column_width, from.max(to))
                        } else {
                            let sub_left = left + subcolumn_width * sub_index as f64;
                            let value_y = computator.to_screen_y(*value);
                            PixelRect::new(
                                sub_left,
                                value_y.min(base_y),
                                sub_left + subcolumn_width,
                                value_y.max(base_y),
                            )
                        };
                        ((column_index, sub_index), rect)
                    })
            })
    }
}

impl ChartRenderer for ColumnChartRenderer {
    fn maximum_viewport(&self) -> Option<Viewport> {
        if self.columns.is_empty() {
            return None;
        }

        let mut top = BASE_VALUE;
        let mut bottom = BASE_VALUE;
        for column in &self.columns {
            let finite = column.values.iter().copied().filter(|value| value.is_finite());
            if self.stacked {
                let (positive, negative) = finite.fold((BASE_VALUE, BASE_VALUE), |(pos, neg), v| {
                    if v >= 0.0 { (pos + v, neg) } else { (pos, neg + v) }
                });
                top = top.max(positive);
                bottom = bottom.min(negative);
            } else {
                for value in finite {
                    top = top.max(value);
                    bottom = bottom.min(value);
                }
            }
        }

        Some(Viewport::new(
            -0.5,
            top,
            self.columns.len() as f64 - 0.5,
            bottom,
        ))
    }

    fn hit_test(&self, view: ChartView<'_>, x: f64, y: f64) -> Option<SelectedValue> {
        let ((column_index, sub_index), _) = self
            .subcolumn_rects(view)
            .find(|(_, rect)| rect_contains(*rect, x, y))?;
        Some(SelectedValue::new(
            i32::try_from(column_index).ok()?,
            i32::try_from(sub_index).ok()?,
            SelectedValueKind::Column,
        ))
    }
}
