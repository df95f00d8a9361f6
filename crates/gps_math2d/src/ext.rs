//! Helpers on [`Vec2`] for pointing from one position at another

use gps_math::{Degrees, Radians, Vec2};

use crate::direction::{Direction2D, ScreenDirection2D};

/// Extension methods for [`Vec2`]
pub trait Vector2Ext {
    /// Quantized world-space direction from `self` to `target`
    fn direction_to(self, target: Vec2) -> Direction2D;

    /// Quantized screen-space direction from `self` to `target`
    fn screen_direction_to(self, target: Vec2) -> ScreenDirection2D;

    fn angle_to_degrees(self, target: Vec2) -> Degrees;

    fn angle_to_radians(self, target: Vec2) -> Radians;
}

impl Vector2Ext for Vec2 {
    fn direction_to(self, target: Vec2) -> Direction2D {
        Direction2D::from_vector(target - self)
    }

    fn screen_direction_to(self, target: Vec2) -> ScreenDirection2D {
        ScreenDirection2D::from_vector(target - self)
    }

    fn angle_to_degrees(self, target: Vec2) -> Degrees {
        Degrees::from_vector(target - self)
    }

    fn angle_to_radians(self, target: Vec2) -> Radians {
        Radians::from_vector(target - self)
    }
}
