use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchPhase {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: TouchPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[must_use]
    pub fn midpoint(self, other: TouchPoint) -> TouchPoint {
        TouchPoint::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }
}

/// Raw touch sample forwarded by the host.
///
/// `pointers` lists every finger currently on the surface, primary first.
/// `Up` means the last finger left; its first pointer is the release point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub pointers: SmallVec<[TouchPoint; 2]>,
    pub time_ms: f64,
}

impl TouchEvent {
    #[must_use]
    pub fn new(phase: TouchPhase, x: f64, y: f64, time_ms: f64) -> Self {
        Self {
            phase,
            pointers: smallvec![TouchPoint::new(x, y)],
            time_ms,
        }
    }

    #[must_use]
    pub fn down(x: f64, y: f64, time_ms: f64) -> Self {
        Self::new(TouchPhase::Down, x, y, time_ms)
    }

    #[must_use]
    pub fn moved(x: f64, y: f64, time_ms: f64) -> Self {
        Self::new(TouchPhase::Move, x, y, time_ms)
    }

    #[must_use]
    pub fn up(x: f64, y: f64, time_ms: f64) -> Self {
        Self::new(TouchPhase::Up, x, y, time_ms)
    }

    #[must_use]
    pub fn cancel(time_ms: f64) -> Self {
        Self {
            phase: TouchPhase::Cancel,
            pointers: SmallVec::new(),
            time_ms,
        }
    }

    /// Adds another finger to the sample.
    #[must_use]
    pub fn with_pointer(mut self, x: f64, y: f64) -> Self {
        self.pointers.push(TouchPoint::new(x, y));
        self
    }

    #[must_use]
    pub fn primary(&self) -> Option<TouchPoint> {
        self.pointers.first().copied()
    }
}

/// Thresholds for turning touch samples into gestures (logical pixels, ms).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Movement beyond this distance turns a press into a drag.
    pub touch_slop_px: f64,
    pub double_tap_timeout_ms: f64,
    pub double_tap_slop_px: f64,
    pub min_fling_velocity: f64,
    pub max_fling_velocity: f64,
    /// Samples older than this (relative to the newest) are ignored for velocity.
    pub velocity_window_ms: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop_px: 8.0,
            double_tap_timeout_ms: 300.0,
            double_tap_slop_px: 100.0,
            min_fling_velocity: 50.0,
            max_fling_velocity: 8_000.0,
            velocity_window_ms: 100.0,
        }
    }
}

impl GestureConfig {
    pub fn validate(self) -> ChartResult<Self> {
        let fields = [
            ("touch_slop_px", self.touch_slop_px),
            ("double_tap_timeout_ms", self.double_tap_timeout_ms),
            ("double_tap_slop_px", self.double_tap_slop_px),
            ("min_fling_velocity", self.min_fling_velocity),
            ("max_fling_velocity", self.max_fling_velocity),
            ("velocity_window_ms", self.velocity_window_ms),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "gesture {name} must be finite and >= 0"
                )));
            }
        }
        if self.max_fling_velocity < self.min_fling_velocity {
            return Err(ChartError::InvalidConfig(
                "gesture max_fling_velocity must be >= min_fling_velocity".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// High-level gesture recognized from touch samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Gesture {
    Down {
        x: f64,
        y: f64,
    },
    /// Drag step; distances are previous minus current position.
    Scroll {
        x: f64,
        y: f64,
        distance_x: f64,
        distance_y: f64,
    },
    /// Release with finger velocity in px/s.
    Fling {
        x: f64,
        y: f64,
        velocity_x: f64,
        velocity_y: f64,
    },
    DoubleTap {
        x: f64,
        y: f64,
    },
    /// Pinch step; `span_ratio > 1` means the fingers moved apart.
    Scale {
        focus_x: f64,
        focus_y: f64,
        span_ratio: f64,
    },
}

pub type Gestures = SmallVec<[Gesture; 2]>;

#[derive(Debug, Clone, Default, PartialEq)]
struct VelocityTracker {
    samples: SmallVec<[(TouchPoint, f64); 16]>,
}

impl VelocityTracker {
    fn clear(&mut self) {
        self.samples.clear();
    }

    fn add(&mut self, point: TouchPoint, time_ms: f64, window_ms: f64) {
        self.samples.push((point, time_ms));
        self.samples
            .retain(|(_, sample_time)| time_ms - *sample_time <= window_ms);
    }

    /// Average velocity over the retained window, px/s.
    fn velocity(&self) -> (f64, f64) {
        let (Some(first), Some(last)) = (self.samples.first(), self.samples.last()) else {
            return (0.0, 0.0);
        };
        let elapsed_s = (last.1 - first.1) / 1_000.0;
        if elapsed_s <= 0.0 {
            return (0.0, 0.0);
        }
        (
            (last.0.x - first.0.x) / elapsed_s,
            (last.0.y - first.0.y) / elapsed_s,
        )
    }
}

/// Turns raw touch samples into drag, fling, double-tap and pinch gestures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureRecognizer {
    config: GestureConfig,
    down_point: Option<TouchPoint>,
    last_point: TouchPoint,
    dragging: bool,
    pinched: bool,
    resync_primary: bool,
    previous_span: Option<f64>,
    double_tap_pending: bool,
    last_tap: Option<(TouchPoint, f64)>,
    velocity: VelocityTracker,
}

impl GestureRecognizer {
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> GestureConfig {
        self.config
    }

    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    /// Whether two fingers are currently driving a pinch.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.previous_span.is_some()
    }

    pub fn on_touch(&mut self, event: &TouchEvent) -> Gestures {
        match event.phase {
            TouchPhase::Down => self.on_down(event),
            TouchPhase::Move => self.on_move(event),
            TouchPhase::Up => self.on_up(event),
            TouchPhase::Cancel => {
                self.reset();
                self.last_tap = None;
                Gestures::new()
            }
        }
    }

    fn on_down(&mut self, event: &TouchEvent) -> Gestures {
        let mut gestures = Gestures::new();
        let Some(point) = event.primary() else {
            return gestures;
        };

        self.reset();
        if let Some((tap_point, tap_time)) = self.last_tap.take() {
            let within_time = event.time_ms - tap_time <= self.config.double_tap_timeout_ms;
            let within_slop = tap_point.distance_to(point) <= self.config.double_tap_slop_px;
            if within_time && within_slop {
                self.double_tap_pending = true;
                gestures.push(Gesture::DoubleTap {
                    x: point.x,
                    y: point.y,
                });
            }
        }

        self.down_point = Some(point);
        self.last_point = point;
        self.velocity
            .add(point, event.time_ms, self.config.velocity_window_ms);
        gestures.push(Gesture::Down {
            x: point.x,
            y: point.y,
        });
        gestures
    }

    fn on_move(&mut self, event: &TouchEvent) -> Gestures {
        let mut gestures = Gestures::new();
        let Some(down_point) = self.down_point else {
            return gestures;
        };

        if let [first, second, ..] = event.pointers.as_slice() {
            let span = first.distance_to(*second);
            let focus = first.midpoint(*second);
            if let Some(previous) = self.previous_span {
                if previous > 0.0 && span > 0.0 {
                    gestures.push(Gesture::Scale {
                        focus_x: focus.x,
                        focus_y: focus.y,
                        span_ratio: span / previous,
                    });
                }
            }
            self.previous_span = Some(span);
            self.pinched = true;
            self.resync_primary = true;
            return gestures;
        }

        let Some(point) = event.primary() else {
            return gestures;
        };
        self.previous_span = None;
        self.velocity
            .add(point, event.time_ms, self.config.velocity_window_ms);

        if self.resync_primary {
            self.resync_primary = false;
            self.last_point = point;
            return gestures;
        }
        if !self.dragging {
            if down_point.distance_to(point) <= self.config.touch_slop_px {
                return gestures;
            }
            self.dragging = true;
        }

        gestures.push(Gesture::Scroll {
            x: point.x,
            y: point.y,
            distance_x: self.last_point.x - point.x,
            distance_y: self.last_point.y - point.y,
        });
        self.last_point = point;
        gestures
    }

    fn on_up(&mut self, event: &TouchEvent) -> Gestures {
        let mut gestures = Gestures::new();
        if self.down_point.is_none() {
            return gestures;
        }
        let point = event.primary().unwrap_or(self.last_point);
        self.velocity
            .add(point, event.time_ms, self.config.velocity_window_ms);

        if self.dragging && !self.pinched {
            let (velocity_x, velocity_y) = self.velocity.velocity();
            let min = self.config.min_fling_velocity;
            if velocity_x.abs() > min || velocity_y.abs() > min {
                let max = self.config.max_fling_velocity;
                gestures.push(Gesture::Fling {
                    x: point.x,
                    y: point.y,
                    velocity_x: velocity_x.clamp(-max, max),
                    velocity_y: velocity_y.clamp(-max, max),
                });
            }
        } else if !self.dragging && !self.pinched && !self.double_tap_pending {
            self.last_tap = Some((point, event.time_ms));
        }

        self.reset();
        gestures
    }

    fn reset(&mut self) {
        self.down_point = None;
        self.dragging = false;
        self.pinched = false;
        self.resync_primary = false;
        self.previous_span = None;
        self.double_tap_pending = false;
        self.velocity.clear();
    }
}
