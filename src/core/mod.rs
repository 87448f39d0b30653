pub mod computator;
pub mod content_rect;
pub mod selection;
pub mod ticks;
pub mod viewport;

pub use computator::{ChartComputator, DEFAULT_MAX_ZOOM, VisibleViewportMode, ZoomType};
pub use content_rect::{ContentRects, Padding, PixelRect};
pub use selection::{SelectedValue, SelectedValueKind};
pub use ticks::{
    GeneratedTicks, MAX_TICK_COUNT, ManualTickLayout, TickValue, auto_tick_budget,
    format_tick_label, generate_ticks, select_manual_ticks,
};
pub use viewport::{VIEWPORT_ENCODED_LEN, Viewport};
