//! Spring curves and point animations
//!
//! A spring transition is modeled as a damped harmonic oscillator solved in
//! closed form, so the in-flight value is a pure function of elapsed time.
//! This replaces a host framework's presentation-layer sampling: the
//! instantaneous position is computed analytically on demand instead of being
//! read back from a platform animation engine.

use elastic_paint::Point;

/// Displacement envelope considered settled at the end of the duration.
const SETTLE_EPSILON: f64 = 1e-3;

/// A damped-spring interpolation curve mapping elapsed seconds to normalized
/// progress. Progress starts at 0, ends at exactly 1 once `duration` has
/// elapsed, and may overshoot 1 in between when under-damped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringCurve {
    /// Damping ratio: < 1 oscillates, >= 1 settles without crossing the target
    pub damping_ratio: f32,
    /// Initial velocity in units of total distance per second
    pub initial_velocity: f32,
    /// Time until the curve is considered settled, in seconds
    pub duration: f32,
}

impl SpringCurve {
    pub const fn new(damping_ratio: f32, initial_velocity: f32, duration: f32) -> Self {
        Self {
            damping_ratio,
            initial_velocity,
            duration,
        }
    }

    /// The stretch phase: nearly critically damped, settles fast
    pub const fn stretch() -> Self {
        Self::new(0.9, 1.5, 0.25)
    }

    /// The recoil phase: lightly damped, bounces visibly past the target
    pub const fn recoil() -> Self {
        Self::new(0.15, 5.5, 0.45)
    }

    /// Undamped natural frequency, chosen so the displacement envelope decays
    /// to `SETTLE_EPSILON` exactly when `duration` elapses.
    fn natural_frequency(&self) -> f64 {
        let zeta = self.damping_ratio as f64;
        -SETTLE_EPSILON.ln() / (zeta * self.duration as f64)
    }

    /// Evaluate normalized progress at `elapsed` seconds.
    ///
    /// Computed in f64 internally to avoid f32 precision jitter at 120fps.
    pub fn value_at(&self, elapsed: f32) -> f32 {
        if elapsed <= 0.0 {
            return 0.0;
        }
        if elapsed >= self.duration {
            return 1.0;
        }

        let t = elapsed as f64;
        let zeta = self.damping_ratio as f64;
        let v0 = self.initial_velocity as f64;
        let omega = self.natural_frequency();

        // Displacement from target: y(0) = -1, y'(0) = v0.
        let y = if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let a = -1.0;
            let b = (v0 + zeta * omega * a) / omega_d;
            (-zeta * omega * t).exp() * (a * (omega_d * t).cos() + b * (omega_d * t).sin())
        } else {
            // Critically damped closed form covers zeta >= 1
            let a = -1.0;
            let b = v0 + omega * a;
            (a + b * t) * (-omega * t).exp()
        };

        (1.0 + y) as f32
    }
}

/// An in-flight spring transition of a 2D point.
///
/// Holds explicit start and target values; `position()` samples the live
/// interpolated value for the current elapsed time.
#[derive(Clone, Copy, Debug)]
pub struct SpringAnimation {
    from: Point,
    to: Point,
    curve: SpringCurve,
    elapsed: f32,
}

impl SpringAnimation {
    pub fn new(from: Point, to: Point, curve: SpringCurve) -> Self {
        Self {
            from,
            to,
            curve,
            elapsed: 0.0,
        }
    }

    /// The animation's final target
    pub fn target(&self) -> Point {
        self.to
    }

    /// Advance by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// The instantaneous interpolated position
    pub fn position(&self) -> Point {
        if self.is_finished() {
            // Land exactly on the target, independent of lerp rounding
            return self.to;
        }
        self.from.lerp(self.to, self.curve.value_at(self.elapsed))
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.curve.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_endpoints_are_exact() {
        for curve in [SpringCurve::stretch(), SpringCurve::recoil()] {
            assert_eq!(curve.value_at(0.0), 0.0);
            assert_eq!(curve.value_at(-1.0), 0.0);
            assert_eq!(curve.value_at(curve.duration), 1.0);
            assert_eq!(curve.value_at(curve.duration + 0.1), 1.0);
        }
    }

    #[test]
    fn test_recoil_overshoots_target() {
        let curve = SpringCurve::recoil();
        let mut max = 0.0f32;
        let steps = 450;
        for i in 1..steps {
            let t = curve.duration * i as f32 / steps as f32;
            max = max.max(curve.value_at(t));
        }
        assert!(max > 1.1, "recoil should bounce past the target, max {max}");
    }

    #[test]
    fn test_stretch_barely_overshoots() {
        let curve = SpringCurve::stretch();
        let steps = 250;
        for i in 0..=steps {
            let t = curve.duration * i as f32 / steps as f32;
            let v = curve.value_at(t);
            assert!(v >= 0.0 && v <= 1.02, "stretch left [0, 1.02] at t={t}: {v}");
        }
    }

    #[test]
    fn test_curve_approaches_target_near_duration() {
        let curve = SpringCurve::recoil();
        let v = curve.value_at(curve.duration * 0.999);
        assert!((v - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_animation_lands_exactly_on_target() {
        let from = Point::new(50.0, -10.0);
        let to = Point::new(50.0, 0.0);
        let mut anim = SpringAnimation::new(from, to, SpringCurve::recoil());

        assert_eq!(anim.position(), from);
        assert!(!anim.is_finished());

        // 60fps ticks past the duration
        for _ in 0..60 {
            anim.tick(1.0 / 60.0);
        }

        assert!(anim.is_finished());
        assert_eq!(anim.position(), to);
    }

    #[test]
    fn test_animation_moves_mid_flight() {
        let from = Point::new(0.0, 20.0);
        let to = Point::new(-10.0, 20.0);
        let mut anim = SpringAnimation::new(from, to, SpringCurve::stretch());

        anim.tick(0.1);
        let mid = anim.position();
        assert_ne!(mid, from);
        // Motion is along the x axis only
        assert_eq!(mid.y, 20.0);
        assert!(mid.x < 0.0);
    }
}
