//! Gesture recognition and the engines that turn gestures into viewport,
//! rotation and selection changes.

pub mod animation;
pub mod fling;
pub mod gesture;
pub mod rotation;
pub mod scroller;
pub mod selection;
pub mod zoomer;

pub use animation::{
    AnimationTimer, DEFAULT_VIEWPORT_ANIMATION_MS, DEFAULT_ZOOM_ANIMATION_MS, ViewportAnimator,
    decelerate,
};
pub use fling::{Fling1D, FlingConfig};
pub use gesture::{
    Gesture, GestureConfig, GestureRecognizer, Gestures, TouchEvent, TouchPhase, TouchPoint,
};
pub use rotation::{ROTATION_DOWNSCALE, RotationEngine, normalize_degrees, vector_to_scalar_scroll};
pub use scroller::{ChartScroller, ScrollResult};
pub use selection::{SelectionEvent, SelectionMode, SelectionOutcome, SelectionStateMachine};
pub use zoomer::{ChartZoomer, ZOOM_AMOUNT};
