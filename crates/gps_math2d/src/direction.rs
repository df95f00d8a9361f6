//! Eight-way directions
//!
//! A [`Direction`] is a [`Nibble`] of compass flags plus an [`Orientation`]
//! marker that decides how the flags decode back into an angle. The two
//! orientations share the bit layout and the quantization rule but not the
//! decode table:
//!
//! | Flags     | [`Direction2D`] | [`ScreenDirection2D`] |
//! |-----------|-----------------|-----------------------|
//! | Right     | 0               | π                     |
//! | UpRight   | π/4             | 3π/4                  |
//! | Up        | π/2             | π/2                   |
//! | UpLeft    | 3π/4            | π/4                   |
//! | Left      | π               | 0                     |
//! | DownLeft  | 5π/4            | 7π/4                  |
//! | Down      | 3π/2            | 3π/2                  |
//! | DownRight | 7π/4            | 5π/4                  |
//!
//! # Quantization
//!
//! An angle maps onto a 16-step circle, `increment = value / full_rotation * 16`
//! in the angle's own unit, and each flag covers an open range around its
//! axis:
//!
//! ```text
//! Right: increment < 3 || increment > 13
//! Up:    1 < increment < 7
//! Left:  5 < increment < 11
//! Down:  9 < increment < 15
//! ```
//!
//! Overlapping ranges produce diagonals. Exactly on an odd increment only
//! one of the two neighbouring flags is set, so those angles quantize to a
//! cardinal direction. Odd multiples of 22.5° hit the boundary exactly; the
//! nearest `f32` to an odd multiple of π/8 may fall a hair to either side.

use core::fmt;
use core::hash::Hash;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use gps_math::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use gps_math::{Angle, AngleUnit, Degrees, Nibble, Radians, ScalarMath, StdMath, Vec2};

use crate::compass::{clear_conflicts, Compass, DOWN, LEFT, RIGHT, UP};
use crate::error::{DirectionError, Result};

/// Decode convention for a [`Direction`]
pub trait Orientation:
    Copy + Default + fmt::Debug + PartialEq + Eq + Hash + Send + Sync + 'static
{
    const NAME: &'static str;

    /// Compass points at 0, π/4, π/2, ... 7π/4
    const DECODE_TABLE: [Compass; 8];
}

/// World space: y points up, angles grow counterclockwise from Right
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct World;

/// Screen space: angles start at Left and run the opposite way round
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Screen;

impl Orientation for World {
    const NAME: &'static str = "Direction2D";
    const DECODE_TABLE: [Compass; 8] = [
        Compass::Right,
        Compass::UpRight,
        Compass::Up,
        Compass::UpLeft,
        Compass::Left,
        Compass::DownLeft,
        Compass::Down,
        Compass::DownRight,
    ];
}

impl Orientation for Screen {
    const NAME: &'static str = "ScreenDirection2D";
    const DECODE_TABLE: [Compass; 8] = [
        Compass::Left,
        Compass::UpLeft,
        Compass::Up,
        Compass::UpRight,
        Compass::Right,
        Compass::DownRight,
        Compass::Down,
        Compass::DownLeft,
    ];
}

/// Angles for each slot of [`Orientation::DECODE_TABLE`]
const TABLE_RADIANS: [f32; 8] = [
    0.0,
    FRAC_PI_4,
    FRAC_PI_2,
    (3.0 * PI) / 4.0,
    PI,
    (5.0 * PI) / 4.0,
    (3.0 * PI) / 2.0,
    (7.0 * PI) / 4.0,
];

/// Flags for a position on the 16-step circle
fn flags_for_increment(increment: f32) -> Nibble {
    let mut bits = Nibble::ZERO;

    if increment < 3.0 || increment > 13.0 {
        bits |= RIGHT;
    }
    if increment < 7.0 && increment > 1.0 {
        bits |= UP;
    }
    if increment < 11.0 && increment > 5.0 {
        bits |= LEFT;
    }
    if increment < 15.0 && increment > 9.0 {
        bits |= DOWN;
    }

    bits
}

/// One of eight compass directions, or none
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Direction<O: Orientation> {
    bits: Nibble,
    orientation: PhantomData<O>,
}

/// World-space direction
pub type Direction2D = Direction<World>;

/// Screen-space direction
pub type ScreenDirection2D = Direction<Screen>;

impl<O: Orientation> Direction<O> {
    pub const NONE: Self = Self::from_compass(Compass::None);
    pub const RIGHT: Self = Self::from_compass(Compass::Right);
    pub const UP_RIGHT: Self = Self::from_compass(Compass::UpRight);
    pub const UP: Self = Self::from_compass(Compass::Up);
    pub const UP_LEFT: Self = Self::from_compass(Compass::UpLeft);
    pub const LEFT: Self = Self::from_compass(Compass::Left);
    pub const DOWN_LEFT: Self = Self::from_compass(Compass::DownLeft);
    pub const DOWN: Self = Self::from_compass(Compass::Down);
    pub const DOWN_RIGHT: Self = Self::from_compass(Compass::DownRight);

    /// Every direction except [`Self::NONE`], counterclockwise from Right
    pub const ALL: [Self; 8] = [
        Self::RIGHT,
        Self::UP_RIGHT,
        Self::UP,
        Self::UP_LEFT,
        Self::LEFT,
        Self::DOWN_LEFT,
        Self::DOWN,
        Self::DOWN_RIGHT,
    ];

    pub const fn from_compass(compass: Compass) -> Self {
        Self {
            bits: compass.bits(),
            orientation: PhantomData,
        }
    }

    /// Build from raw flags, cancelling opposite pairs
    pub fn from_bits(bits: Nibble) -> Self {
        let cleared = clear_conflicts(bits);
        if cleared != bits {
            log::trace!("cleared opposite direction flags {:#b} -> {:#b}", bits, cleared);
        }
        Self {
            bits: cleared,
            orientation: PhantomData,
        }
    }

    /// Build from raw flags, rejecting opposite pairs
    pub fn try_from_bits(bits: Nibble) -> Result<Self> {
        if clear_conflicts(bits) != bits {
            return Err(DirectionError::ConflictingFlags(bits));
        }
        Ok(Self {
            bits,
            orientation: PhantomData,
        })
    }

    /// Quantize an angle into one of the eight bins.
    ///
    /// The increment is taken in the angle's own unit, so `157.5°` and
    /// `7π/8` both land exactly on increment 7.
    pub fn from_angle<U: AngleUnit>(angle: Angle<U>) -> Self {
        let increment = angle.value() / U::FULL_ROTATION * 16.0;
        Self::from_bits(flags_for_increment(increment))
    }

    pub fn from_radians(angle: Radians) -> Self {
        Self::from_angle(angle)
    }

    pub fn from_degrees(angle: Degrees) -> Self {
        Self::from_angle(angle)
    }

    /// Quantize the angle of `vector`; the zero vector has no direction
    pub fn from_vector(vector: Vec2) -> Self {
        Self::from_vector_with(&StdMath, vector)
    }

    /// Like [`Self::from_vector`], measuring the angle with `backend`
    pub fn from_vector_with<M: ScalarMath>(backend: &M, vector: Vec2) -> Self {
        if vector.is_zero() {
            return Self::NONE;
        }
        Self::from_radians(Radians::from_vector_with(backend, vector))
    }

    #[inline]
    pub fn bits(self) -> Nibble {
        self.bits
    }

    #[inline]
    pub fn compass(self) -> Compass {
        Compass::from_bits(self.bits)
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self.bits.is_zero()
    }

    #[inline]
    pub fn is_diagonal(self) -> bool {
        self.compass().is_diagonal()
    }

    /// Canonical angle of this direction.
    ///
    /// Fails with [`DirectionError::NoAngle`] for [`Self::NONE`].
    pub fn as_radians(self) -> Result<Radians> {
        let compass = self.compass();
        O::DECODE_TABLE
            .iter()
            .position(|&entry| entry == compass)
            .map(|slot| Radians::new(TABLE_RADIANS[slot]))
            .ok_or(DirectionError::NoAngle)
    }

    pub fn as_degrees(self) -> Result<Degrees> {
        self.as_radians().map(Radians::to_degrees)
    }

    /// Like [`Self::as_radians`], but [`Self::NONE`] decodes to zero
    pub fn to_radians(self) -> Radians {
        self.as_radians().unwrap_or_else(|_| {
            log::trace!("{} None has no angle, using 0", O::NAME);
            Radians::ZERO
        })
    }

    pub fn to_degrees(self) -> Degrees {
        self.to_radians().to_degrees()
    }

    /// Unit vector along the decoded angle; zero for [`Self::NONE`]
    pub fn to_vector2(self) -> Vec2 {
        match self.as_radians() {
            Ok(angle) => angle.to_vector2(),
            Err(_) => Vec2::ZERO,
        }
    }

    pub fn rotate_clockwise_90(self) -> Self {
        Self::from_bits(self.bits.rotate_right())
    }

    pub fn rotate_counter_clockwise_90(self) -> Self {
        Self::from_bits(self.bits.rotate_left())
    }

    /// Cardinals become diagonals; a diagonal briefly picks up an opposite
    /// pair, which cancels and leaves the next cardinal
    pub fn rotate_clockwise_45(self) -> Self {
        Self::from_bits(self.bits.rotate_right() | self.bits)
    }

    pub fn rotate_counter_clockwise_45(self) -> Self {
        Self::from_bits(self.bits.rotate_left() | self.bits)
    }

    /// Whether every flag of `other` is set here
    pub fn contains_direction(self, other: Self) -> bool {
        self.bits.contains_all_flags(other.bits)
    }

    /// Merge in the flags of `component`; opposite flags cancel out
    pub fn add_direction_component(self, component: Self) -> Self {
        Self::from_bits(self.bits | component.bits)
    }

    /// Clear the flags of `component`
    pub fn remove_direction_component(self, component: Self) -> Self {
        Self::from_bits(self.bits & !component.bits)
    }
}

impl Direction<World> {
    pub const EAST: Self = Self::RIGHT;
    pub const NORTH_EAST: Self = Self::UP_RIGHT;
    pub const NORTH: Self = Self::UP;
    pub const NORTH_WEST: Self = Self::UP_LEFT;
    pub const WEST: Self = Self::LEFT;
    pub const SOUTH_WEST: Self = Self::DOWN_LEFT;
    pub const SOUTH: Self = Self::DOWN;
    pub const SOUTH_EAST: Self = Self::DOWN_RIGHT;

    pub const FORWARD_RIGHT: Self = Self::UP_RIGHT;
    pub const FORWARD: Self = Self::UP;
    pub const FORWARD_LEFT: Self = Self::UP_LEFT;
    pub const BACK_LEFT: Self = Self::DOWN_LEFT;
    pub const BACK: Self = Self::DOWN;
    pub const BACK_RIGHT: Self = Self::DOWN_RIGHT;
}

impl<O: Orientation> Add for Direction<O> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.add_direction_component(rhs)
    }
}

impl<O: Orientation> Sub for Direction<O> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.remove_direction_component(rhs)
    }
}

impl<O: Orientation> AddAssign for Direction<O> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<O: Orientation> SubAssign for Direction<O> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<O: Orientation> From<Compass> for Direction<O> {
    fn from(compass: Compass) -> Self {
        Self::from_compass(compass)
    }
}

impl<O: Orientation> From<Direction<O>> for Compass {
    fn from(direction: Direction<O>) -> Self {
        direction.compass()
    }
}

impl<O: Orientation> TryFrom<Nibble> for Direction<O> {
    type Error = DirectionError;

    fn try_from(bits: Nibble) -> Result<Self> {
        Self::try_from_bits(bits)
    }
}

impl<O: Orientation> fmt::Debug for Direction<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(O::NAME).field(&self.compass()).finish()
    }
}

impl<O: Orientation> fmt::Display for Direction<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.compass(), f)
    }
}

#[cfg(feature = "serde")]
impl<O: Orientation> serde::Serialize for Direction<O> {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> core::result::Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.compass(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, O: Orientation> serde::Deserialize<'de> for Direction<O> {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> core::result::Result<Self, D::Error> {
        <Compass as serde::Deserialize>::deserialize(deserializer).map(Self::from_compass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Angle whose quantization increment is exactly `increment`
    fn at_increment(increment: f32) -> Radians {
        Radians::new(increment / 8.0 * PI)
    }

    #[test]
    fn test_from_vector_axes() {
        assert_eq!(Direction2D::from_vector(Vec2::new(1.0, 0.0)), Direction2D::RIGHT);
        assert_eq!(Direction2D::from_vector(Vec2::new(0.0, 1.0)), Direction2D::UP);
        assert_eq!(Direction2D::from_vector(Vec2::new(-1.0, 0.0)), Direction2D::LEFT);
        assert_eq!(Direction2D::from_vector(Vec2::new(0.0, -1.0)), Direction2D::DOWN);
        assert_eq!(Direction2D::from_vector(Vec2::new(0.0, 0.0)), Direction2D::NONE);
    }

    /// Backend whose `atan2` always points straight left
    struct AlwaysLeft;

    impl ScalarMath for AlwaysLeft {
        fn sin(&self, value: f32) -> f32 {
            value.sin()
        }

        fn cos(&self, value: f32) -> f32 {
            value.cos()
        }

        fn tan(&self, value: f32) -> f32 {
            value.tan()
        }

        fn asin(&self, value: f32) -> f32 {
            value.asin()
        }

        fn acos(&self, value: f32) -> f32 {
            value.acos()
        }

        fn atan(&self, value: f32) -> f32 {
            value.atan()
        }

        fn atan2(&self, _: f32, _: f32) -> f32 {
            PI
        }
    }

    #[test]
    fn test_from_vector_uses_given_backend() {
        let v = Vec2::new(1.0, 0.0);
        assert_eq!(Direction2D::from_vector_with(&AlwaysLeft, v), Direction2D::LEFT);
        assert_eq!(Direction2D::from_vector_with(&StdMath, v), Direction2D::RIGHT);
        assert_eq!(Direction2D::from_vector_with(&AlwaysLeft, Vec2::ZERO), Direction2D::NONE);
    }

    #[test]
    fn test_from_vector_diagonals() {
        assert_eq!(Direction2D::from_vector(Vec2::new(1.0, 1.0)), Direction2D::UP_RIGHT);
        assert_eq!(Direction2D::from_vector(Vec2::new(-1.0, 1.0)), Direction2D::UP_LEFT);
        assert_eq!(Direction2D::from_vector(Vec2::new(-1.0, -1.0)), Direction2D::DOWN_LEFT);
        assert_eq!(Direction2D::from_vector(Vec2::new(1.0, -1.0)), Direction2D::DOWN_RIGHT);
        // shallow angles stay cardinal
        assert_eq!(Direction2D::from_vector(Vec2::new(10.0, 1.0)), Direction2D::RIGHT);
        assert_eq!(Direction2D::from_vector(Vec2::new(10.0, -1.0)), Direction2D::RIGHT);
    }

    #[test]
    fn test_quantization_bins() {
        let expected = [
            (0.5, Direction2D::RIGHT),
            (2.0, Direction2D::UP_RIGHT),
            (4.0, Direction2D::UP),
            (6.0, Direction2D::UP_LEFT),
            (8.0, Direction2D::LEFT),
            (10.0, Direction2D::DOWN_LEFT),
            (12.0, Direction2D::DOWN),
            (14.0, Direction2D::DOWN_RIGHT),
            (15.5, Direction2D::RIGHT),
        ];
        for (increment, direction) in expected {
            let angle = at_increment(increment);
            assert_eq!(Direction2D::from_radians(angle), direction, "increment {}", increment);
        }
    }

    #[test]
    fn test_quantization_boundaries_stay_cardinal() {
        // On an odd increment the open ranges leave only one flag set
        let boundaries = [
            (1.0, RIGHT),
            (3.0, UP),
            (5.0, UP),
            (7.0, LEFT),
            (9.0, LEFT),
            (11.0, DOWN),
            (13.0, DOWN),
            (15.0, RIGHT),
        ];
        for (increment, flag) in boundaries {
            assert_eq!(flags_for_increment(increment), flag, "increment {}", increment);
        }

        // π/8 lands exactly on increment 1
        assert_eq!(Direction2D::from_radians(Radians::new(PI / 8.0)), Direction2D::RIGHT);

        // Just inside the diagonal bin
        assert_eq!(Direction2D::from_degrees(Degrees::new(23.0)), Direction2D::UP_RIGHT);
        assert_eq!(Direction2D::from_degrees(Degrees::new(67.0)), Direction2D::UP_RIGHT);
        assert_eq!(Direction2D::from_degrees(Degrees::new(68.0)), Direction2D::UP);
    }

    #[test]
    fn test_degree_boundaries_match_increment_rule() {
        let expected = [
            Direction2D::RIGHT,
            Direction2D::UP,
            Direction2D::UP,
            Direction2D::LEFT,
            Direction2D::LEFT,
            Direction2D::DOWN,
            Direction2D::DOWN,
            Direction2D::RIGHT,
        ];
        for (i, direction) in expected.into_iter().enumerate() {
            let k = (2 * i + 1) as f32;
            let degrees = Degrees::new(k * 22.5);
            assert_eq!(Direction2D::from_degrees(degrees), direction, "{:?}", degrees);
            assert_eq!(Direction2D::from_angle(degrees), direction, "{:?}", degrees);
        }

        // Exact degrees agree with the radians path
        assert_eq!(
            Direction2D::from_degrees(Degrees::new(157.5)),
            Direction2D::from_radians(Radians::new(7.0 * PI / 8.0))
        );
        assert_eq!(
            Direction2D::from_degrees(Degrees::new(247.5)),
            Direction2D::from_radians(Radians::new(11.0 * PI / 8.0))
        );
    }

    #[test]
    fn test_every_angle_quantizes_to_valid_direction() {
        let mut rng = fastrand::Rng::with_seed(0x2D);
        for _ in 0..2_000 {
            let angle = Degrees::new(rng.f32() * 720.0 - 360.0);
            let direction = Direction2D::from_degrees(angle);
            assert!(!direction.is_none(), "{:?} -> None", angle);
            assert_eq!(Direction2D::try_from_bits(direction.bits()), Ok(direction));
        }
    }

    #[test]
    fn test_decode_round_trip() {
        for direction in Direction2D::ALL {
            let angle = direction.as_radians().unwrap();
            assert_eq!(Direction2D::from_radians(angle), direction);
            let degrees = direction.as_degrees().unwrap();
            assert_eq!(Direction2D::from_degrees(degrees), direction);
        }
    }

    #[test]
    fn test_world_decode_table() {
        assert_eq!(Direction2D::RIGHT.as_radians().unwrap().value(), 0.0);
        let expected = [
            (Direction2D::UP, 90.0),
            (Direction2D::LEFT, 180.0),
            (Direction2D::DOWN_RIGHT, 315.0),
        ];
        for (direction, degrees) in expected {
            let decoded = direction.as_degrees().unwrap();
            assert_abs_diff_eq!(decoded.value(), degrees, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_screen_decode_table_differs() {
        assert_eq!(ScreenDirection2D::LEFT.as_radians().unwrap().value(), 0.0);
        let right = ScreenDirection2D::RIGHT.as_radians().unwrap();
        assert_abs_diff_eq!(right.value(), PI, epsilon = 1e-6);

        let expected = [
            (ScreenDirection2D::UP_LEFT, 45.0),
            (ScreenDirection2D::UP_RIGHT, 135.0),
            (ScreenDirection2D::DOWN_RIGHT, 225.0),
            (ScreenDirection2D::DOWN_LEFT, 315.0),
        ];
        for (direction, degrees) in expected {
            let decoded = direction.as_degrees().unwrap();
            assert_abs_diff_eq!(decoded.value(), degrees, epsilon = 1e-4);
        }

        // Up and Down sit on the shared axis
        assert_eq!(
            ScreenDirection2D::UP.as_radians().unwrap(),
            Direction2D::UP.as_radians().unwrap()
        );
        assert_ne!(
            ScreenDirection2D::RIGHT.as_radians().unwrap(),
            Direction2D::RIGHT.as_radians().unwrap()
        );
    }

    #[test]
    fn test_screen_quantization_shares_bit_rule() {
        let angle = Radians::new(0.0);
        assert_eq!(
            Direction2D::from_radians(angle).bits(),
            ScreenDirection2D::from_radians(angle).bits()
        );
        assert_eq!(ScreenDirection2D::from_radians(angle), ScreenDirection2D::RIGHT);

        // ...so decoding and re-quantizing mirrors left and right
        let decoded = ScreenDirection2D::RIGHT.as_radians().unwrap();
        assert_eq!(ScreenDirection2D::from_radians(decoded), ScreenDirection2D::LEFT);
        let decoded = ScreenDirection2D::UP_LEFT.as_radians().unwrap();
        assert_eq!(ScreenDirection2D::from_radians(decoded), ScreenDirection2D::UP_RIGHT);
    }

    #[test]
    fn test_none_has_no_angle() {
        assert_eq!(Direction2D::NONE.as_radians(), Err(DirectionError::NoAngle));
        assert_eq!(ScreenDirection2D::NONE.as_degrees(), Err(DirectionError::NoAngle));
        assert_eq!(Direction2D::NONE.to_radians(), Radians::ZERO);
        assert_eq!(Direction2D::NONE.to_degrees(), Degrees::ZERO);
        assert_eq!(Direction2D::NONE.to_vector2(), Vec2::ZERO);
    }

    #[test]
    fn test_to_vector2() {
        let v = Direction2D::UP.to_vector2();
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(v.y, 1.0, epsilon = 1e-6);

        let v = ScreenDirection2D::LEFT.to_vector2();
        assert_abs_diff_eq!(v.x, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rotate_90() {
        assert_eq!(Direction2D::RIGHT.rotate_clockwise_90(), Direction2D::DOWN);
        assert_eq!(Direction2D::DOWN.rotate_clockwise_90(), Direction2D::LEFT);
        assert_eq!(Direction2D::UP_RIGHT.rotate_clockwise_90(), Direction2D::DOWN_RIGHT);
        assert_eq!(Direction2D::RIGHT.rotate_counter_clockwise_90(), Direction2D::UP);
        assert_eq!(Direction2D::NONE.rotate_clockwise_90(), Direction2D::NONE);

        for direction in Direction2D::ALL {
            assert_eq!(direction.rotate_clockwise_90().rotate_counter_clockwise_90(), direction);
            let full_turn = direction
                .rotate_counter_clockwise_90()
                .rotate_counter_clockwise_90()
                .rotate_counter_clockwise_90()
                .rotate_counter_clockwise_90();
            assert_eq!(full_turn, direction);
            assert_eq!(direction.rotate_clockwise_90().is_diagonal(), direction.is_diagonal());
        }
    }

    #[test]
    fn test_rotate_45_walks_the_compass() {
        // ALL is counterclockwise, so each step ccw is the next entry
        let all = Direction2D::ALL;
        for (i, direction) in all.iter().enumerate() {
            let next = all[(i + 1) % all.len()];
            let prev = all[(i + all.len() - 1) % all.len()];
            assert_eq!(direction.rotate_counter_clockwise_45(), next, "ccw from {:?}", direction);
            assert_eq!(direction.rotate_clockwise_45(), prev, "cw from {:?}", direction);
        }
        assert_eq!(Direction2D::RIGHT.rotate_clockwise_45(), Direction2D::DOWN_RIGHT);
        assert_eq!(Direction2D::UP_RIGHT.rotate_clockwise_45(), Direction2D::RIGHT);
        assert_eq!(Direction2D::NONE.rotate_clockwise_45(), Direction2D::NONE);
    }

    #[test]
    fn test_add_direction_component() {
        let cancelled = Direction2D::RIGHT.add_direction_component(Direction2D::LEFT);
        assert_eq!(cancelled, Direction2D::NONE);
        let diagonal = Direction2D::UP.add_direction_component(Direction2D::RIGHT);
        assert_eq!(diagonal, Direction2D::UP_RIGHT);
        assert_eq!(Direction2D::UP_RIGHT + Direction2D::DOWN, Direction2D::RIGHT);
        assert_eq!(Direction2D::UP_RIGHT + Direction2D::DOWN_LEFT, Direction2D::NONE);
        assert_eq!(Direction2D::LEFT + Direction2D::NONE, Direction2D::LEFT);

        let mut heading = Direction2D::NONE;
        heading += Direction2D::UP;
        heading += Direction2D::LEFT;
        assert_eq!(heading, Direction2D::UP_LEFT);
    }

    #[test]
    fn test_remove_direction_component() {
        let remaining = Direction2D::UP_RIGHT.remove_direction_component(Direction2D::UP);
        assert_eq!(remaining, Direction2D::RIGHT);
        assert_eq!(Direction2D::UP_RIGHT - Direction2D::UP_RIGHT, Direction2D::NONE);
        assert_eq!(Direction2D::UP - Direction2D::DOWN, Direction2D::UP);

        let mut heading = Direction2D::DOWN_LEFT;
        heading -= Direction2D::LEFT;
        assert_eq!(heading, Direction2D::DOWN);
    }

    #[test]
    fn test_contains_direction() {
        assert!(Direction2D::UP_RIGHT.contains_direction(Direction2D::UP));
        assert!(Direction2D::UP_RIGHT.contains_direction(Direction2D::RIGHT));
        assert!(Direction2D::UP_RIGHT.contains_direction(Direction2D::NONE));
        assert!(!Direction2D::UP.contains_direction(Direction2D::UP_RIGHT));
        assert!(!Direction2D::LEFT.contains_direction(Direction2D::RIGHT));
    }

    #[test]
    fn test_from_bits_clears_conflicts() {
        assert_eq!(Direction2D::from_bits(Nibble::new(0b0101)), Direction2D::NONE);
        assert_eq!(Direction2D::from_bits(Nibble::new(0b0111)), Direction2D::UP);
        assert_eq!(Direction2D::from_bits(Nibble::MAX), Direction2D::NONE);
        assert_eq!(
            Direction2D::try_from_bits(Nibble::new(0b1010)),
            Err(DirectionError::ConflictingFlags(Nibble::new(0b1010)))
        );
        assert_eq!(Direction2D::try_from(Nibble::new(0b0011)), Ok(Direction2D::UP_RIGHT));
    }

    #[test]
    fn test_aliases() {
        assert_eq!(Direction2D::EAST, Direction2D::RIGHT);
        assert_eq!(Direction2D::NORTH_WEST, Direction2D::UP_LEFT);
        assert_eq!(Direction2D::FORWARD, Direction2D::UP);
        assert_eq!(Direction2D::BACK_RIGHT, Direction2D::DOWN_RIGHT);
        assert_eq!(Direction2D::default(), Direction2D::NONE);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(Direction2D::UP_LEFT.to_string(), "UpLeft");
        assert_eq!(format!("{:?}", ScreenDirection2D::DOWN), "ScreenDirection2D(Down)");
        assert_eq!(
            DirectionError::ConflictingFlags(Nibble::new(0b0101)).to_string(),
            "Conflicting direction flags: 0b0101"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_direction_serialization() {
        let direction = ScreenDirection2D::DOWN_LEFT;
        let serialized = bincode::serialize(&direction).unwrap();
        let deserialized: ScreenDirection2D = bincode::deserialize(&serialized).unwrap();
        assert_eq!(direction, deserialized);
    }
}
