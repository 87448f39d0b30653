use crate::core::{SelectedValue, Viewport};
use crate::error::ChartResult;
use crate::render::{ChartRenderer, ChartView, RenderFrame};

/// Data-less renderer used by tests and headless engine usage.
///
/// It never hits a value, reports whatever maximum viewport it was given and
/// still validates every frame so tests catch broken geometry.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub maximum_viewport: Option<Viewport>,
    pub frames_drawn: usize,
    pub last_grid_line_count: usize,
    pub last_label_count: usize,
}

impl NullRenderer {
    #[must_use]
    pub fn with_maximum_viewport(viewport: Viewport) -> Self {
        Self {
            maximum_viewport: Some(viewport),
            ..Self::default()
        }
    }
}

impl ChartRenderer for NullRenderer {
    fn maximum_viewport(&self) -> Option<Viewport> {
        self.maximum_viewport
    }

    fn hit_test(&self, _view: ChartView<'_>, _x: f64, _y: f64) -> Option<SelectedValue> {
        None
    }

    fn draw(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_drawn += 1;
        self.last_grid_line_count = frame.grid_lines.len();
        self.last_label_count = frame.labels.len();
        Ok(())
    }
}
