use crate::core::Viewport;

/// Default duration of the double-tap zoom animation.
pub const DEFAULT_ZOOM_ANIMATION_MS: f64 = 200.0;

/// Default duration of an animated viewport transition.
pub const DEFAULT_VIEWPORT_ANIMATION_MS: f64 = 300.0;

/// Decelerating easing curve: fast start, slow finish, `f(0) = 0`, `f(1) = 1`.
#[must_use]
pub fn decelerate(t: f64) -> f64 {
    let remaining = 1.0 - t;
    1.0 - remaining * remaining
}

/// Elapsed-time to eased-value primitive.
///
/// A timer started with [`AnimationTimer::start`] latches its start time on
/// the first tick, so hosts may start animations outside a frame callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTimer {
    total: f64,
    duration_ms: f64,
    started_at_ms: Option<f64>,
    current: f64,
    finished: bool,
}

impl Default for AnimationTimer {
    fn default() -> Self {
        Self {
            total: 0.0,
            duration_ms: 0.0,
            started_at_ms: None,
            current: 0.0,
            finished: true,
        }
    }
}

impl AnimationTimer {
    pub fn start(&mut self, total: f64, duration_ms: f64) {
        *self = Self {
            total,
            duration_ms,
            started_at_ms: None,
            current: 0.0,
            finished: false,
        };
    }

    pub fn start_at(&mut self, total: f64, duration_ms: f64, now_ms: f64) {
        self.start(total, duration_ms);
        self.started_at_ms = Some(now_ms);
    }

    /// Returns the eased value at `now_ms` and whether the animation is done.
    ///
    /// Once finished, every further tick returns exactly `total`.
    pub fn tick(&mut self, now_ms: f64) -> (f64, bool) {
        if self.finished {
            return (self.current, true);
        }

        let started_at = *self.started_at_ms.get_or_insert(now_ms);
        let t = if self.duration_ms > 0.0 {
            let raw = (now_ms - started_at) / self.duration_ms;
            if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 1.0) }
        } else {
            1.0
        };

        if t >= 1.0 {
            self.force_finish();
            return (self.current, true);
        }

        self.current = self.total * decelerate(t);
        (self.current, false)
    }

    /// Jumps straight to the target value without producing frames.
    pub fn force_finish(&mut self) {
        self.current = self.total;
        self.finished = true;
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn current_value(&self) -> f64 {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.total
    }
}

/// Eased transition between two viewports.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportAnimator {
    from: Viewport,
    to: Viewport,
    timer: AnimationTimer,
}

impl ViewportAnimator {
    /// Starts a transition, replacing any transition still in flight.
    pub fn start(&mut self, from: Viewport, to: Viewport, duration_ms: f64) {
        self.from = from;
        self.to = to;
        self.timer.start(1.0, duration_ms);
    }

    /// Stops the transition where it is.
    pub fn cancel(&mut self) {
        self.timer.force_finish();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.timer.is_finished()
    }

    #[must_use]
    pub fn target(&self) -> Viewport {
        self.to
    }

    /// Viewport for this frame, or `None` when no transition is running.
    pub fn tick(&mut self, now_ms: f64) -> Option<Viewport> {
        if self.timer.is_finished() {
            return None;
        }
        let (fraction, finished) = self.timer.tick(now_ms);
        if finished {
            return Some(self.to);
        }
        Some(self.from.lerp(self.to, fraction))
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimationTimer, ViewportAnimator, decelerate};
    use crate::core::Viewport;

    #[test]
    fn easing_is_decelerating() {
        assert_eq!(decelerate(0.0), 0.0);
        assert_eq!(decelerate(1.0), 1.0);
        assert_eq!(decelerate(0.5), 0.75);
        assert!(decelerate(0.25) - decelerate(0.0) > decelerate(1.0) - decelerate(0.75));
    }

    #[test]
    fn timer_reaches_exact_target_and_stays_there() {
        let mut timer = AnimationTimer::default();
        timer.start_at(0.25, 200.0, 1_000.0);

        let (half, finished) = timer.tick(1_100.0);
        assert!(!finished);
        assert!((half - 0.25 * 0.75).abs() <= 1e-12);

        assert_eq!(timer.tick(1_250.0), (0.25, true));
        assert_eq!(timer.tick(5_000.0), (0.25, true));
    }

    #[test]
    fn lazily_started_timer_latches_first_tick() {
        let mut timer = AnimationTimer::default();
        timer.start(10.0, 100.0);
        assert_eq!(timer.tick(500.0), (0.0, false));
        let (value, _) = timer.tick(550.0);
        assert!((value - 7.5).abs() <= 1e-12);
    }

    #[test]
    fn force_finish_jumps_to_target() {
        let mut timer = AnimationTimer::default();
        timer.start_at(4.0, 100.0, 0.0);
        timer.force_finish();
        assert!(timer.is_finished());
        assert_eq!(timer.current_value(), 4.0);
    }

    #[test]
    fn viewport_animator_interpolates_all_edges() {
        let mut animator = ViewportAnimator::default();
        animator.start(
            Viewport::new(0.0, 10.0, 10.0, 0.0),
            Viewport::new(10.0, 30.0, 30.0, 10.0),
            100.0,
        );
        assert_eq!(animator.tick(0.0), Some(Viewport::new(0.0, 10.0, 10.0, 0.0)));
        assert_eq!(
            animator.tick(50.0),
            Some(Viewport::new(7.5, 25.0, 25.0, 7.5))
        );
        assert_eq!(
            animator.tick(100.0),
            Some(Viewport::new(10.0, 30.0, 30.0, 10.0))
        );
        assert_eq!(animator.tick(150.0), None);
    }
}
