use super::fling::{Fling1D, FlingConfig};

/// Touch distances and velocities are divided by this before they become degrees.
pub const ROTATION_DOWNSCALE: f64 = 4.0;

/// Signed magnitude of a drag vector around a centre.
///
/// `(x, y)` is the touch point relative to the centre. The sign comes from the
/// dot product of the drag with the tangent `(-y, x)`, so the result does not
/// depend on how far from the centre the finger is.
#[must_use]
pub fn vector_to_scalar_scroll(dx: f64, dy: f64, x: f64, y: f64) -> f64 {
    let length = dx.hypot(dy);
    let dot = -y * dx + x * dy;
    if dot > 0.0 {
        length
    } else if dot < 0.0 {
        -length
    } else {
        0.0
    }
}

/// Wraps an angle into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = angle.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Drag and fling rotation for circular charts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationEngine {
    rotation_degrees: f64,
    fling: Option<Fling1D>,
    config: FlingConfig,
}

impl RotationEngine {
    #[must_use]
    pub fn new(config: FlingConfig) -> Self {
        Self {
            rotation_degrees: 0.0,
            fling: None,
            config,
        }
    }

    #[must_use]
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation_degrees
    }

    pub fn set_rotation_degrees(&mut self, degrees: f64) {
        self.rotation_degrees = normalize_degrees(degrees);
    }

    pub fn set_fling_config(&mut self, config: FlingConfig) {
        self.config = config;
    }

    #[must_use]
    pub fn is_flinging(&self) -> bool {
        self.fling.is_some()
    }

    /// Stops a running rotation fling.
    pub fn abort_fling(&mut self) {
        self.fling = None;
    }

    /// Rotates by one drag step (previous minus current pointer position).
    pub fn scroll(
        &mut self,
        distance_x: f64,
        distance_y: f64,
        touch: (f64, f64),
        center: (f64, f64),
    ) {
        let theta =
            vector_to_scalar_scroll(distance_x, distance_y, touch.0 - center.0, touch.1 - center.1);
        self.set_rotation_degrees(self.rotation_degrees - theta / ROTATION_DOWNSCALE);
    }

    /// Starts an unbounded angular fling from a finger velocity.
    pub fn fling(
        &mut self,
        velocity_x: f64,
        velocity_y: f64,
        touch: (f64, f64),
        center: (f64, f64),
        now_ms: f64,
    ) -> bool {
        let angular_velocity =
            vector_to_scalar_scroll(velocity_x, velocity_y, touch.0 - center.0, touch.1 - center.1)
                / ROTATION_DOWNSCALE;
        let fling = Fling1D::new(
            self.rotation_degrees,
            angular_velocity,
            (f64::NEG_INFINITY, f64::INFINITY),
            now_ms,
            self.config,
        );
        if fling.is_finished() {
            self.fling = None;
            return false;
        }
        self.fling = Some(fling);
        true
    }

    /// Advances a running fling; returns `true` while another frame is needed.
    pub fn compute_rotation(&mut self, now_ms: f64) -> bool {
        let Some(fling) = self.fling.as_mut() else {
            return false;
        };
        if fling.is_finished() {
            self.fling = None;
            return false;
        }
        let angle = fling.step(now_ms);
        self.rotation_degrees = normalize_degrees(angle);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{RotationEngine, normalize_degrees, vector_to_scalar_scroll};
    use crate::interaction::FlingConfig;

    #[test]
    fn scalar_scroll_sign_follows_tangent_not_radius() {
        // Touch to the right of centre; dragging down is along the tangent.
        assert_eq!(vector_to_scalar_scroll(0.0, 10.0, 50.0, 0.0), 10.0);
        assert_eq!(vector_to_scalar_scroll(0.0, 10.0, 500.0, 0.0), 10.0);
        assert_eq!(vector_to_scalar_scroll(0.0, -10.0, 50.0, 0.0), -10.0);
        // Pure radial drag has no rotation.
        assert_eq!(vector_to_scalar_scroll(10.0, 0.0, 50.0, 0.0), 0.0);
    }

    #[test]
    fn angles_wrap_into_one_turn() {
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
    }

    #[test]
    fn drag_rotation_accumulates_modulo_360() {
        let mut engine = RotationEngine::new(FlingConfig::default());
        engine.scroll(0.0, -40.0, (150.0, 100.0), (100.0, 100.0));
        assert_eq!(engine.rotation_degrees(), 10.0);
        engine.scroll(0.0, 80.0, (150.0, 100.0), (100.0, 100.0));
        assert_eq!(engine.rotation_degrees(), 350.0);
    }

    #[test]
    fn rotation_fling_decays_to_rest() {
        let mut engine = RotationEngine::new(FlingConfig::default());
        assert!(engine.fling(0.0, 4_000.0, (150.0, 100.0), (100.0, 100.0), 0.0));
        let mut now = 0.0;
        while engine.compute_rotation(now) {
            now += 16.0;
            assert!(now < 60_000.0);
        }
        assert!(!engine.is_flinging());
        assert!((0.0..360.0).contains(&engine.rotation_degrees()));
    }
}
