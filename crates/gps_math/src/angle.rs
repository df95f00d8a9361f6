//! Normalized angles
//!
//! [`Angle`] stores a single `f32` that is always wrapped into one full
//! rotation of its unit: `[0, 2π)` for [`Radians`], `[0, 360)` for
//! [`Degrees`]. Every constructor and every operator re-normalizes, so an
//! angle can never be observed out of range.
//!
//! Mixed-unit arithmetic converts the right-hand side into the unit of the
//! left-hand side and returns the left-hand type:
//!
//! ```
//! use gps_math::{Degrees, Radians};
//!
//! let a = Degrees::new(350.0) + Radians::new(core::f32::consts::FRAC_PI_2);
//! assert!((a.value() - 80.0).abs() < 1e-3);
//! ```

use core::any::TypeId;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::consts::{DEG_TO_RAD, RAD_TO_DEG, TAU};
use crate::scalar::{ScalarMath, StdMath};
use crate::vector::Vec2;

/// Unit of measure for an [`Angle`]
pub trait AngleUnit:
    Copy + Default + fmt::Debug + PartialEq + PartialOrd + Send + Sync + 'static
{
    /// Size of one full rotation; stored values live in `[0, FULL_ROTATION)`
    const FULL_ROTATION: f32;
    const NAME: &'static str;
    const SUFFIX: &'static str;

    fn to_radians(value: f32) -> f32;
    fn from_radians(radians: f32) -> f32;
}

/// Radian unit marker
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rad;

/// Degree unit marker
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Deg;

impl AngleUnit for Rad {
    const FULL_ROTATION: f32 = TAU;
    const NAME: &'static str = "Radians";
    const SUFFIX: &'static str = " rad";

    #[inline]
    fn to_radians(value: f32) -> f32 {
        value
    }

    #[inline]
    fn from_radians(radians: f32) -> f32 {
        radians
    }
}

impl AngleUnit for Deg {
    const FULL_ROTATION: f32 = 360.0;
    const NAME: &'static str = "Degrees";
    const SUFFIX: &'static str = "°";

    #[inline]
    fn to_radians(value: f32) -> f32 {
        value * DEG_TO_RAD
    }

    #[inline]
    fn from_radians(radians: f32) -> f32 {
        radians * RAD_TO_DEG
    }
}

/// Angle normalized into one full rotation of `U`
#[derive(Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Angle<U: AngleUnit> {
    value: f32,
    unit: PhantomData<U>,
}

/// Angle in radians, always in `[0, 2π)`
pub type Radians = Angle<Rad>;

/// Angle in degrees, always in `[0, 360)`
pub type Degrees = Angle<Deg>;

/// Wrap `value` into `[0, range)`.
///
/// Negative values count back from `range`. A result that lands exactly on
/// `range` (an exact negative multiple, or a tiny negative value rounding
/// up) folds to zero. NaN and infinities produce NaN.
#[inline]
pub fn normalize_angle(value: f32, range: f32) -> f32 {
    let wrapped = if value < 0.0 {
        range - (-value % range)
    } else {
        value % range
    };

    if wrapped >= range {
        wrapped - range
    } else {
        // + 0.0 turns -0.0 into 0.0
        wrapped + 0.0
    }
}

impl<U: AngleUnit> Angle<U> {
    pub const ZERO: Self = Self { value: 0.0, unit: PhantomData };

    /// Create an angle, wrapping `value` into one full rotation
    #[inline]
    pub fn new(value: f32) -> Self {
        Self {
            value: normalize_angle(value, U::FULL_ROTATION),
            unit: PhantomData,
        }
    }

    /// Angle of `vector` measured counterclockwise from the positive x axis
    pub fn from_vector(vector: Vec2) -> Self {
        Self::from_vector_with(&StdMath, vector)
    }

    pub fn from_vector_with<M: ScalarMath>(backend: &M, vector: Vec2) -> Self {
        Self::new(U::from_radians(backend.atan2(vector.y, vector.x)))
    }

    /// Normalized value in this angle's own unit
    #[inline]
    pub fn value(self) -> f32 {
        self.value
    }

    #[inline]
    pub fn as_radians_f32(self) -> f32 {
        U::to_radians(self.value)
    }

    #[inline]
    pub fn as_degrees_f32(self) -> f32 {
        Deg::from_radians(self.as_radians_f32())
    }

    /// Value expressed in unit `V`; exact when `V` is `U`
    #[inline]
    fn scalar_in<V: AngleUnit>(self) -> f32 {
        if TypeId::of::<U>() == TypeId::of::<V>() {
            self.value
        } else {
            V::from_radians(U::to_radians(self.value))
        }
    }

    /// Convert to another unit
    #[inline]
    pub fn convert<V: AngleUnit>(self) -> Angle<V> {
        Angle::new(self.scalar_in::<V>())
    }

    #[inline]
    pub fn to_radians(self) -> Radians {
        self.convert()
    }

    #[inline]
    pub fn to_degrees(self) -> Degrees {
        self.convert()
    }

    /// Unit vector pointing along this angle: `(cos, sin)`
    pub fn to_vector2(self) -> Vec2 {
        self.to_vector2_with(&StdMath)
    }

    pub fn to_vector2_with<M: ScalarMath>(self, backend: &M) -> Vec2 {
        let radians = self.as_radians_f32();
        Vec2::new(backend.cos(radians), backend.sin(radians))
    }

    /// Whether two angles are within `epsilon` of each other, measured in
    /// this angle's unit and accounting for wrap-around at a full rotation
    pub fn approx_eq<V: AngleUnit>(self, other: Angle<V>, epsilon: f32) -> bool {
        let diff = (self.value - other.scalar_in::<U>()).abs();
        diff <= epsilon || (U::FULL_ROTATION - diff) <= epsilon
    }
}

impl<L: AngleUnit, R: AngleUnit> Add<Angle<R>> for Angle<L> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Angle<R>) -> Self {
        Self::new(self.value + rhs.scalar_in::<L>())
    }
}

impl<L: AngleUnit, R: AngleUnit> Sub<Angle<R>> for Angle<L> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Angle<R>) -> Self {
        Self::new(self.value - rhs.scalar_in::<L>())
    }
}

impl<L: AngleUnit, R: AngleUnit> Mul<Angle<R>> for Angle<L> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Angle<R>) -> Self {
        Self::new(self.value * rhs.scalar_in::<L>())
    }
}

impl<L: AngleUnit, R: AngleUnit> Div<Angle<R>> for Angle<L> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Angle<R>) -> Self {
        Self::new(self.value / rhs.scalar_in::<L>())
    }
}

impl<U: AngleUnit> Mul<f32> for Angle<U> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.value * rhs)
    }
}

impl<U: AngleUnit> Div<f32> for Angle<U> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.value / rhs)
    }
}

impl<U: AngleUnit> Neg for Angle<U> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

impl<L: AngleUnit, R: AngleUnit> AddAssign<Angle<R>> for Angle<L> {
    #[inline]
    fn add_assign(&mut self, rhs: Angle<R>) {
        *self = *self + rhs;
    }
}

impl<L: AngleUnit, R: AngleUnit> SubAssign<Angle<R>> for Angle<L> {
    #[inline]
    fn sub_assign(&mut self, rhs: Angle<R>) {
        *self = *self - rhs;
    }
}

impl From<Degrees> for Radians {
    fn from(angle: Degrees) -> Self {
        angle.convert()
    }
}

impl From<Radians> for Degrees {
    fn from(angle: Radians) -> Self {
        angle.convert()
    }
}

impl<U: AngleUnit> From<f32> for Angle<U> {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl<U: AngleUnit> From<Angle<U>> for f32 {
    fn from(angle: Angle<U>) -> Self {
        angle.value
    }
}

impl<U: AngleUnit> From<Vec2> for Angle<U> {
    fn from(vector: Vec2) -> Self {
        Self::from_vector(vector)
    }
}

impl<U: AngleUnit> fmt::Debug for Angle<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(U::NAME).field(&self.value).finish()
    }
}

impl<U: AngleUnit> fmt::Display for Angle<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*}{}", precision, self.value, U::SUFFIX),
            None => write!(f, "{}{}", self.value, U::SUFFIX),
        }
    }
}

#[cfg(feature = "serde")]
impl<U: AngleUnit> serde::Serialize for Angle<U> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f32(self.value)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: AngleUnit> serde::Deserialize<'de> for Angle<U> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <f32 as serde::Deserialize>::deserialize(deserializer).map(Self::new)
    }
}
