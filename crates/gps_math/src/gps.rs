//! Trigonometry and angular interpolation over [`Angle`] values
//!
//! [`GpsMath`] routes every call through a [`ScalarMath`] backend so the
//! angle types never depend on a particular host runtime. The free
//! functions in this module use the default [`StdMath`] backend.
//!
//! Interpolation helpers work in degrees internally, whatever the unit of
//! their inputs, and hand back a freshly normalized angle of the same unit.

use crate::angle::{Angle, AngleUnit, Degrees, Radians};
use crate::config::SmoothDampConfig;
use crate::scalar::{ScalarMath, StdMath};
use crate::vector::Vec2;

/// Angle-aware math facade over a scalar backend
#[derive(Clone, Copy, Debug, Default)]
pub struct GpsMath<M: ScalarMath = StdMath> {
    backend: M,
}

impl GpsMath<StdMath> {
    pub const fn new() -> Self {
        Self { backend: StdMath }
    }
}

impl<M: ScalarMath> GpsMath<M> {
    pub fn with_backend(backend: M) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &M {
        &self.backend
    }

    pub fn acos(&self, cosine: f32) -> Radians {
        Radians::new(self.backend.acos(cosine))
    }

    pub fn asin(&self, sine: f32) -> Radians {
        Radians::new(self.backend.asin(sine))
    }

    pub fn atan(&self, tangent: f32) -> Radians {
        Radians::new(self.backend.atan(tangent))
    }

    pub fn atan2(&self, y: f32, x: f32) -> Radians {
        Radians::new(self.backend.atan2(y, x))
    }

    pub fn sin<U: AngleUnit>(&self, angle: Angle<U>) -> f32 {
        self.backend.sin(angle.as_radians_f32())
    }

    pub fn cos<U: AngleUnit>(&self, angle: Angle<U>) -> f32 {
        self.backend.cos(angle.as_radians_f32())
    }

    pub fn tan<U: AngleUnit>(&self, angle: Angle<U>) -> f32 {
        self.backend.tan(angle.as_radians_f32())
    }

    /// Angle of `vector`, measured with this backend's `atan2`
    pub fn vector_angle<U: AngleUnit>(&self, vector: Vec2) -> Angle<U> {
        Angle::from_vector_with(&self.backend, vector)
    }

    /// Unit vector along `angle`, measured with this backend's `cos`/`sin`
    pub fn angle_vector<U: AngleUnit>(&self, angle: Angle<U>) -> Vec2 {
        angle.to_vector2_with(&self.backend)
    }

    /// Shortest difference from `current` to `target`.
    ///
    /// The signed result is normalized like any other angle, so a step of
    /// -90° comes back as 270°.
    pub fn delta_angle<U: AngleUnit>(&self, current: Angle<U>, target: Angle<U>) -> Angle<U> {
        let delta = self
            .backend
            .delta_angle(current.as_degrees_f32(), target.as_degrees_f32());
        Degrees::new(delta).convert()
    }

    /// Interpolate along the shortest arc; `time` is clamped to [0, 1]
    pub fn lerp_angle<U: AngleUnit>(&self, min: Angle<U>, max: Angle<U>, time: f32) -> Angle<U> {
        let angle = self
            .backend
            .lerp_angle(min.as_degrees_f32(), max.as_degrees_f32(), time);
        Degrees::new(angle).convert()
    }

    /// Step towards `target` by at most `max_delta` degrees
    pub fn move_towards_angle<U: AngleUnit>(
        &self,
        current: Angle<U>,
        target: Angle<U>,
        max_delta: f32,
    ) -> Angle<U> {
        let angle = self.backend.move_towards_angle(
            current.as_degrees_f32(),
            target.as_degrees_f32(),
            max_delta,
        );
        Degrees::new(angle).convert()
    }

    /// Spring `current` towards `target`.
    ///
    /// `velocity` is in degrees per second and must be carried by the caller
    /// from one call to the next.
    pub fn smooth_damp_angle<U: AngleUnit>(
        &self,
        current: Angle<U>,
        target: Angle<U>,
        velocity: &mut f32,
        config: &SmoothDampConfig,
    ) -> Angle<U> {
        let angle = self.backend.smooth_damp_angle(
            current.as_degrees_f32(),
            target.as_degrees_f32(),
            velocity,
            config.smooth_time,
            config.max_speed,
            config.delta_time,
        );
        Degrees::new(angle).convert()
    }
}

pub fn acos(cosine: f32) -> Radians {
    GpsMath::new().acos(cosine)
}

pub fn asin(sine: f32) -> Radians {
    GpsMath::new().asin(sine)
}

pub fn atan(tangent: f32) -> Radians {
    GpsMath::new().atan(tangent)
}

pub fn atan2(y: f32, x: f32) -> Radians {
    GpsMath::new().atan2(y, x)
}

pub fn sin<U: AngleUnit>(angle: Angle<U>) -> f32 {
    GpsMath::new().sin(angle)
}

pub fn cos<U: AngleUnit>(angle: Angle<U>) -> f32 {
    GpsMath::new().cos(angle)
}

pub fn tan<U: AngleUnit>(angle: Angle<U>) -> f32 {
    GpsMath::new().tan(angle)
}

pub fn delta_angle<U: AngleUnit>(current: Angle<U>, target: Angle<U>) -> Angle<U> {
    GpsMath::new().delta_angle(current, target)
}

pub fn lerp_angle<U: AngleUnit>(min: Angle<U>, max: Angle<U>, time: f32) -> Angle<U> {
    GpsMath::new().lerp_angle(min, max, time)
}

pub fn move_towards_angle<U: AngleUnit>(
    current: Angle<U>,
    target: Angle<U>,
    max_delta: f32,
) -> Angle<U> {
    GpsMath::new().move_towards_angle(current, target, max_delta)
}

pub fn smooth_damp_angle<U: AngleUnit>(
    current: Angle<U>,
    target: Angle<U>,
    velocity: &mut f32,
    config: &SmoothDampConfig,
) -> Angle<U> {
    GpsMath::new().smooth_damp_angle(current, target, velocity, config)
}
