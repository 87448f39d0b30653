use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Tuning for the decelerating fling simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlingConfig {
    /// Fraction of the velocity left after one second, in `(0, 1)`.
    pub decay_per_second: f64,
    /// The fling stops once `abs(velocity)` drops below this threshold (units/s).
    pub stop_velocity_abs: f64,
}

impl Default for FlingConfig {
    fn default() -> Self {
        Self {
            decay_per_second: 0.05,
            stop_velocity_abs: 20.0,
        }
    }
}

impl FlingConfig {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.decay_per_second.is_finite()
            || self.decay_per_second <= 0.0
            || self.decay_per_second >= 1.0
        {
            return Err(ChartError::InvalidConfig(
                "fling decay_per_second must be finite and in (0, 1)".to_owned(),
            ));
        }
        if !self.stop_velocity_abs.is_finite() || self.stop_velocity_abs <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "fling stop_velocity_abs must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// One-dimensional fling with exponential velocity decay.
///
/// `v(t) = v0 * d^t` and `x(t) = x0 + v0 * (1 - d^t) / -ln(d)`, with the
/// position clamped into `[min, max]`. Reaching a bound or dropping below the
/// stop velocity finishes the fling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fling1D {
    origin: f64,
    velocity: f64,
    min: f64,
    max: f64,
    started_at_ms: f64,
    decay_rate: f64,
    stop_velocity_abs: f64,
    position: f64,
    finished: bool,
}

impl Fling1D {
    #[must_use]
    pub fn new(
        origin: f64,
        velocity: f64,
        bounds: (f64, f64),
        now_ms: f64,
        config: FlingConfig,
    ) -> Self {
        let (min, max) = (bounds.0.min(bounds.1), bounds.0.max(bounds.1));
        let origin = origin.clamp(min, max);
        let finished = !velocity.is_finite()
            || velocity.abs() < config.stop_velocity_abs
            || min == max;
        Self {
            origin,
            velocity: if velocity.is_finite() { velocity } else { 0.0 },
            min,
            max,
            started_at_ms: now_ms,
            decay_rate: -config.decay_per_second.ln(),
            stop_velocity_abs: config.stop_velocity_abs,
            position: origin,
            finished,
        }
    }

    /// Advances to `now_ms` and returns the new position.
    pub fn step(&mut self, now_ms: f64) -> f64 {
        if self.finished {
            return self.position;
        }

        let elapsed_s = ((now_ms - self.started_at_ms) / 1_000.0).max(0.0);
        let decay = (-self.decay_rate * elapsed_s).exp();
        let mut position = self.origin + self.velocity / self.decay_rate * (1.0 - decay);

        if position <= self.min {
            position = self.min;
            self.finished = true;
        } else if position >= self.max {
            position = self.max;
            self.finished = true;
        }
        if (self.velocity * decay).abs() < self.stop_velocity_abs {
            self.finished = true;
        }

        self.position = position;
        position
    }

    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn force_finish(&mut self) {
        self.finished = true;
    }
}

#[cfg(test)]
mod tests {
    use super::{Fling1D, FlingConfig};

    #[test]
    fn displacement_shrinks_every_equal_frame() {
        let mut fling = Fling1D::new(0.0, 2_000.0, (0.0, 1e9), 0.0, FlingConfig::default());
        let mut previous = 0.0;
        let mut last_step = f64::INFINITY;
        let mut now = 0.0;
        while !fling.is_finished() {
            now += 16.0;
            let position = fling.step(now);
            let step = position - previous;
            assert!(step > 0.0);
            assert!(step < last_step);
            last_step = step;
            previous = position;
        }
        assert_eq!(fling.step(now + 16.0), previous);
    }

    #[test]
    fn fling_stops_at_bounds() {
        let mut fling = Fling1D::new(90.0, 5_000.0, (0.0, 100.0), 0.0, FlingConfig::default());
        assert_eq!(fling.step(500.0), 100.0);
        assert!(fling.is_finished());
    }

    #[test]
    fn slow_or_boxed_flings_finish_immediately() {
        let config = FlingConfig::default();
        assert!(Fling1D::new(0.0, 1.0, (0.0, 100.0), 0.0, config).is_finished());
        assert!(Fling1D::new(0.0, 900.0, (0.0, 0.0), 0.0, config).is_finished());
    }

    #[test]
    fn config_rejects_non_decaying_values() {
        assert!(
            FlingConfig {
                decay_per_second: 1.0,
                stop_velocity_abs: 1.0,
            }
            .validate()
            .is_err()
        );
        assert!(
            FlingConfig {
                decay_per_second: 0.5,
                stop_velocity_abs: 0.0,
            }
            .validate()
            .is_err()
        );
    }
}
