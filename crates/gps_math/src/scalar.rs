//! Scalar math backend
//!
//! [`ScalarMath`] is the seam between the angle types and whatever supplies
//! trigonometry at runtime. Implementors only provide the trig primitives;
//! the angular interpolation helpers are provided methods that follow the
//! usual game-engine conventions (all in degrees):
//!
//! - `delta_angle` returns the shortest signed difference in (-180, 180]
//! - `lerp_angle` clamps its interpolation factor to [0, 1]
//! - `smooth_damp_angle` is a critically damped spring whose velocity lives
//!   with the caller

/// Trigonometric primitives and angular interpolation on raw `f32` scalars
pub trait ScalarMath {
    /// Sine of an angle in radians
    fn sin(&self, radians: f32) -> f32;

    /// Cosine of an angle in radians
    fn cos(&self, radians: f32) -> f32;

    /// Tangent of an angle in radians
    fn tan(&self, radians: f32) -> f32;

    fn asin(&self, sine: f32) -> f32;

    fn acos(&self, cosine: f32) -> f32;

    fn atan(&self, tangent: f32) -> f32;

    fn atan2(&self, y: f32, x: f32) -> f32;

    /// Loop `t` so that it is never larger than `length` and never smaller than 0
    fn repeat(&self, t: f32, length: f32) -> f32 {
        (t - (t / length).floor() * length).max(0.0).min(length)
    }

    /// Shortest signed difference between two angles in degrees
    fn delta_angle(&self, current: f32, target: f32) -> f32 {
        let mut delta = self.repeat(target - current, 360.0);
        if delta > 180.0 {
            delta -= 360.0;
        }
        delta
    }

    /// Interpolate between two angles in degrees along the shortest path
    fn lerp_angle(&self, a: f32, b: f32, t: f32) -> f32 {
        a + self.delta_angle(a, b) * t.max(0.0).min(1.0)
    }

    /// Move `current` towards `target` by at most `max_delta`
    fn move_towards(&self, current: f32, target: f32, max_delta: f32) -> f32 {
        let diff = target - current;
        if diff.abs() <= max_delta {
            return target;
        }
        let sign = if diff >= 0.0 { 1.0 } else { -1.0 };
        current + sign * max_delta
    }

    /// Like [`ScalarMath::move_towards`], but wraps correctly around 360 degrees
    fn move_towards_angle(&self, current: f32, target: f32, max_delta: f32) -> f32 {
        let delta = self.delta_angle(current, target);
        if -max_delta < delta && delta < max_delta {
            return target;
        }
        self.move_towards(current, current + delta, max_delta)
    }

    /// Gradually move `current` towards `target` without overshooting
    fn smooth_damp(
        &self,
        current: f32,
        target: f32,
        velocity: &mut f32,
        smooth_time: f32,
        max_speed: f32,
        delta_time: f32,
    ) -> f32 {
        let smooth_time = smooth_time.max(0.0001);
        let omega = 2.0 / smooth_time;

        let x = omega * delta_time;
        let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

        let original_target = target;
        let max_change = max_speed * smooth_time;
        let change = (current - target).max(-max_change).min(max_change);
        let target = current - change;

        let temp = (*velocity + omega * change) * delta_time;
        *velocity = (*velocity - omega * temp) * exp;
        let mut output = target + (change + temp) * exp;

        // Never overshoot the original target
        if (original_target - current > 0.0) == (output > original_target) {
            log::debug!(
                "smooth_damp overshoot from {} past {}, snapping to target",
                current,
                original_target
            );
            output = original_target;
            *velocity = if delta_time > 0.0 {
                (output - original_target) / delta_time
            } else {
                0.0
            };
        }

        output
    }

    /// Like [`ScalarMath::smooth_damp`], but wraps correctly around 360 degrees
    fn smooth_damp_angle(
        &self,
        current: f32,
        target: f32,
        velocity: &mut f32,
        smooth_time: f32,
        max_speed: f32,
        delta_time: f32,
    ) -> f32 {
        let target = current + self.delta_angle(current, target);
        self.smooth_damp(current, target, velocity, smooth_time, max_speed, delta_time)
    }
}

/// Default backend using the `f32` intrinsics
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StdMath;

impl ScalarMath for StdMath {
    #[inline]
    fn sin(&self, radians: f32) -> f32 {
        radians.sin()
    }

    #[inline]
    fn cos(&self, radians: f32) -> f32 {
        radians.cos()
    }

    #[inline]
    fn tan(&self, radians: f32) -> f32 {
        radians.tan()
    }

    #[inline]
    fn asin(&self, sine: f32) -> f32 {
        sine.asin()
    }

    #[inline]
    fn acos(&self, cosine: f32) -> f32 {
        cosine.acos()
    }

    #[inline]
    fn atan(&self, tangent: f32) -> f32 {
        tangent.atan()
    }

    #[inline]
    fn atan2(&self, y: f32, x: f32) -> f32 {
        y.atan2(x)
    }
}
