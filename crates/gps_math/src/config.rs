//! Smooth-damp configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters for [`crate::gps::smooth_damp_angle`]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SmoothDampConfig {
    /// Approximate time to reach the target, in seconds
    pub smooth_time: f32,

    /// Upper bound on speed, in degrees per second
    pub max_speed: f32,

    /// Time since the previous call, in seconds
    pub delta_time: f32,
}

impl Default for SmoothDampConfig {
    fn default() -> Self {
        Self {
            smooth_time: 0.3,
            max_speed: f32::INFINITY,
            delta_time: 1.0 / 60.0,
        }
    }
}

impl SmoothDampConfig {
    /// Reaches the target quickly, e.g. for turret tracking
    pub fn snappy() -> Self {
        Self {
            smooth_time: 0.05,
            ..Default::default()
        }
    }

    /// Slow, floaty follow, e.g. for camera yaw
    pub fn relaxed() -> Self {
        Self {
            smooth_time: 1.0,
            max_speed: 180.0,
            ..Default::default()
        }
    }

    pub fn with_smooth_time(mut self, smooth_time: f32) -> Self {
        self.smooth_time = smooth_time;
        self
    }

    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = max_speed;
        self
    }

    pub fn with_delta_time(mut self, delta_time: f32) -> Self {
        self.delta_time = delta_time;
        self
    }
}
