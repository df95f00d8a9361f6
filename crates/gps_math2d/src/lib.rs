//! # gps_math2d - Eight-Way Directions
//!
//! Discrete 2D compass directions packed into a [`gps_math::Nibble`].
//!
//! # Example
//!
//! ```
//! use gps_math::Vec2;
//! use gps_math2d::prelude::*;
//!
//! let heading = Direction2D::from_vector(Vec2::new(1.0, 1.0));
//! assert_eq!(heading, Direction2D::UP_RIGHT);
//!
//! // Opposite components cancel instead of erroring
//! assert_eq!(heading + Direction2D::DOWN, Direction2D::RIGHT);
//! assert_eq!(heading.rotate_clockwise_90(), Direction2D::DOWN_RIGHT);
//! ```

pub mod compass;
pub mod direction;
pub mod error;
pub mod ext;

pub use compass::Compass;
pub use direction::*;
pub use error::{DirectionError, Result};
pub use ext::Vector2Ext;

pub mod prelude {
    //! Common imports for direction handling
    pub use crate::compass::Compass;
    pub use crate::direction::{
        Direction, Direction2D, Orientation, Screen, ScreenDirection2D, World,
    };
    pub use crate::error::{DirectionError, Result};
    pub use crate::ext::Vector2Ext;
}
