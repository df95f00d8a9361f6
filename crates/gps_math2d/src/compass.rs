//! Compass points and their nibble encoding
//!
//! Bit layout: `0b_DLUR`, i.e. Right = bit 0, Up = bit 1, Left = bit 2,
//! Down = bit 3. A diagonal sets two adjacent bits. Opposite bits (R+L or
//! U+D) never survive construction: both bits of the pair are cleared.

use core::fmt;

use gps_math::Nibble;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub(crate) const RIGHT: Nibble = Nibble::new(0x01);
pub(crate) const UP: Nibble = Nibble::new(0x02);
pub(crate) const LEFT: Nibble = Nibble::new(0x04);
pub(crate) const DOWN: Nibble = Nibble::new(0x08);

pub(crate) const HORIZONTAL_CONFLICT: Nibble = Nibble::new(0x05);
pub(crate) const VERTICAL_CONFLICT: Nibble = Nibble::new(0x0A);

/// Clear every opposite pair present in `bits`
#[inline]
pub(crate) fn clear_conflicts(mut bits: Nibble) -> Nibble {
    if bits.contains_all_flags(HORIZONTAL_CONFLICT) {
        bits &= !HORIZONTAL_CONFLICT;
    }
    if bits.contains_all_flags(VERTICAL_CONFLICT) {
        bits &= !VERTICAL_CONFLICT;
    }
    bits
}

/// One of the eight compass points, or no direction at all
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Compass {
    #[default]
    None,
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

/// Raw nibble value -> compass point, with opposite pairs already cleared
const FROM_BITS: [Compass; 16] = [
    Compass::None,      // 0000
    Compass::Right,     // 0001
    Compass::Up,        // 0010
    Compass::UpRight,   // 0011
    Compass::Left,      // 0100
    Compass::None,      // 0101 R+L
    Compass::UpLeft,    // 0110
    Compass::Up,        // 0111 R+L cancel
    Compass::Down,      // 1000
    Compass::DownRight, // 1001
    Compass::None,      // 1010 U+D
    Compass::Right,     // 1011 U+D cancel
    Compass::DownLeft,  // 1100
    Compass::Down,      // 1101 R+L cancel
    Compass::Left,      // 1110 U+D cancel
    Compass::None,      // 1111
];

impl Compass {
    /// Every real direction, counterclockwise from `Right`
    pub const ALL: [Compass; 8] = [
        Compass::Right,
        Compass::UpRight,
        Compass::Up,
        Compass::UpLeft,
        Compass::Left,
        Compass::DownLeft,
        Compass::Down,
        Compass::DownRight,
    ];

    pub const fn bits(self) -> Nibble {
        match self {
            Compass::None => Nibble::ZERO,
            Compass::Right => RIGHT,
            Compass::UpRight => Nibble::new(0x03),
            Compass::Up => UP,
            Compass::UpLeft => Nibble::new(0x06),
            Compass::Left => LEFT,
            Compass::DownLeft => Nibble::new(0x0C),
            Compass::Down => DOWN,
            Compass::DownRight => Nibble::new(0x09),
        }
    }

    /// Decode `bits`, cancelling any opposite pair
    pub const fn from_bits(bits: Nibble) -> Self {
        FROM_BITS[bits.as_byte() as usize]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Compass::None => "None",
            Compass::Right => "Right",
            Compass::UpRight => "UpRight",
            Compass::Up => "Up",
            Compass::UpLeft => "UpLeft",
            Compass::Left => "Left",
            Compass::DownLeft => "DownLeft",
            Compass::Down => "Down",
            Compass::DownRight => "DownRight",
        }
    }

    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Compass::UpRight | Compass::UpLeft | Compass::DownLeft | Compass::DownRight
        )
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
