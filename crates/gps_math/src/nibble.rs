//! 4-bit flag values
//!
//! A [`Nibble`] keeps only the low four bits of whatever it is built from.
//! Nothing is ever rejected: wider integers are silently masked.

use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const NIBBLE_MASK: u8 = 0x0F;

/// Half of a byte, used as a set of four flags
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8", into = "u8"))]
#[repr(transparent)]
pub struct Nibble(u8);

impl Nibble {
    pub const ZERO: Self = Self::new(0);
    pub const MIN: Self = Self::new(0);
    pub const MAX: Self = Self::new(15);

    /// Create a nibble from the low four bits of `value`
    #[inline]
    pub const fn new(value: u8) -> Self {
        Self(value & NIBBLE_MASK)
    }

    #[inline]
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    /// Circular shift towards the high bit; bit 3 wraps to bit 0
    #[inline]
    pub const fn rotate_left(self) -> Self {
        let top_bit = (self.0 & 0x08) >> 3;
        Self::new((self.0 << 1) | top_bit)
    }

    /// Circular shift towards the low bit; bit 0 wraps to bit 3
    #[inline]
    pub const fn rotate_right(self) -> Self {
        let bottom_bit = (self.0 & 0x01) << 3;
        Self::new((self.0 >> 1) | bottom_bit)
    }

    /// Whether every flag in `flags` is set in this nibble
    #[inline]
    pub const fn contains_all_flags(self, flags: Nibble) -> bool {
        self.0 & flags.0 == flags.0
    }

    /// Whether at least one flag in `flags` is set in this nibble
    #[inline]
    pub const fn contains_one_flag(self, flags: Nibble) -> bool {
        self.0 & flags.0 != 0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Number of set flags
    #[inline]
    pub const fn count_flags(self) -> u32 {
        self.0.count_ones()
    }
}

impl BitAnd for Nibble {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for Nibble {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl Not for Nibble {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::new(!self.0)
    }
}

impl BitAndAssign for Nibble {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl BitOrAssign for Nibble {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl From<u8> for Nibble {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<i16> for Nibble {
    fn from(value: i16) -> Self {
        Self::new((value & NIBBLE_MASK as i16) as u8)
    }
}

impl From<i32> for Nibble {
    fn from(value: i32) -> Self {
        Self::new((value & NIBBLE_MASK as i32) as u8)
    }
}

impl From<Nibble> for u8 {
    fn from(nibble: Nibble) -> Self {
        nibble.0
    }
}

impl From<Nibble> for i16 {
    fn from(nibble: Nibble) -> Self {
        i16::from(nibble.0)
    }
}

impl From<Nibble> for i32 {
    fn from(nibble: Nibble) -> Self {
        i32::from(nibble.0)
    }
}

impl fmt::Display for Nibble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Binary for Nibble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0b{:04b}", self.0)
        } else {
            write!(f, "{:04b}", self.0)
        }
    }
}
