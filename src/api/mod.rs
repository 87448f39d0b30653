//! Engine facade: owns the coordinate state, routes touch samples and frame
//! ticks to the gesture engines, and reports changes to the host.

mod data_controller;
mod engine;
mod engine_config;
mod engine_init;
mod event_dispatch;
mod layout_controller;
mod render_frame_builder;
mod selection_controller;
mod touch_controller;
mod viewport_controller;

pub use engine::ChartEngine;
pub use engine_config::{AxisConfig, ChartEngineConfig, ContainerScrollType, InteractionBehavior};
pub use event_dispatch::{ChartEvent, ChartListener};
