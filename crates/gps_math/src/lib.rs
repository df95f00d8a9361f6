//! # gps_math - Angle and Flag Value Types
//!
//! Small, copyable value types for 2D game math:
//! - [`Radians`] / [`Degrees`]: angles that always stay inside one full rotation
//! - [`Nibble`]: a 4-bit flag set with circular rotation
//! - [`GpsMath`]: trig and angular interpolation over a pluggable [`ScalarMath`] backend
//!
//! Nothing in this crate allocates, blocks or shares mutable state.

pub mod angle;
pub mod config;
pub mod gps;
pub mod nibble;
pub mod scalar;
pub mod vector;

pub use angle::*;
pub use config::*;
pub use gps::GpsMath;
pub use nibble::*;
pub use scalar::*;
pub use vector::*;

/// Common math constants
pub mod consts {
    pub const PI: f32 = core::f32::consts::PI;
    pub const TAU: f32 = core::f32::consts::TAU;
    pub const FRAC_PI_2: f32 = core::f32::consts::FRAC_PI_2;
    pub const FRAC_PI_4: f32 = core::f32::consts::FRAC_PI_4;
    pub const DEG_TO_RAD: f32 = PI / 180.0;
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

pub mod prelude {
    pub use crate::angle::{Angle, AngleUnit, Deg, Degrees, Rad, Radians};
    pub use crate::config::SmoothDampConfig;
    pub use crate::gps::{self, GpsMath};
    pub use crate::nibble::Nibble;
    pub use crate::scalar::{ScalarMath, StdMath};
    pub use crate::vector::Vec2;
}
