use crate::core::{SelectedValue, Viewport};
use crate::render::{ChartRenderer, ChartView, ColumnChartRenderer, LineChartRenderer};

/// Lines drawn over columns; the selection kind tells the two apart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComboChartRenderer {
    pub lines: LineChartRenderer,
    pub columns: ColumnChartRenderer,
}

impl ComboChartRenderer {
    #[must_use]
    pub fn new(lines: LineChartRenderer, columns: ColumnChartRenderer) -> Self {
        Self { lines, columns }
    }
}

impl ChartRenderer for ComboChartRenderer {
    fn maximum_viewport(&self) -> Option<Viewport> {
        match (self.columns.maximum_viewport(), self.lines.maximum_viewport()) {
            (Some(mut columns), Some(lines)) => {
                columns.left = columns.left.min(lines.left);
                columns.top = columns.top.max(lines.top);
                columns.right = columns.right.max(lines.right);
                columns.bottom = columns.bottom.min(lines.bottom);
                Some(columns)
            }
            (columns, lines) => columns.or(lines),
        }
    }

    fn hit_test(&self, view: ChartView<'_>, x: f64, y: f64) -> Option<SelectedValue> {
        self.lines
            .hit_test(view, x, y)
            .or_else(|| self.columns.hit_test(view, x, y))
    }

    fn content_overdraw_px(&self) -> f64 {
        self.lines.content_overdraw_px()
    }
}
