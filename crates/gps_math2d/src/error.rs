//! Error types for direction decoding

use gps_math::Nibble;
use thiserror::Error;

/// Direction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DirectionError {
    /// The empty direction has no angle
    #[error("Direction None has no angle")]
    NoAngle,

    /// Bits hold an opposite pair (Right+Left or Up+Down)
    #[error("Conflicting direction flags: {0:#b}")]
    ConflictingFlags(Nibble),
}

/// Result type for direction operations
pub type Result<T> = std::result::Result<T, DirectionError>;
