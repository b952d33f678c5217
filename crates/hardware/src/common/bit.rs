//! The two-valued signal carried on every wire of the simulator.
//!
//! A [`Bit`] can only ever hold 0 or 1, so every gate is closed over the
//! signal domain by construction. Integers enter the simulation through
//! [`TryFrom<u8>`], which is the single place a malformed value is rejected.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::constants::{INSTRUCTION_WIDTH, REGISTER_WIDTH};
use super::error::SimError;

/// A single binary signal level.
///
/// Serializes as the integer `0` or `1`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Bit {
    /// Logic low.
    #[default]
    Zero,
    /// Logic high.
    One,
}

/// A 4-bit register word; index 0 is the active data bit.
pub type Word4 = [Bit; REGISTER_WIDTH];

/// An 8-bit instruction word laid out as `[opcode(2) | addr(2) | unused(4)]`.
pub type Word8 = [Bit; INSTRUCTION_WIDTH];

impl Bit {
    /// Converts a boolean level into a bit.
    #[inline]
    pub const fn from_bool(level: bool) -> Self {
        if level { Self::One } else { Self::Zero }
    }

    /// Returns `true` when the bit is high.
    #[inline]
    pub const fn is_high(self) -> bool {
        matches!(self, Self::One)
    }

    /// Returns the bit as the integer 0 or 1.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }

    /// Returns the bit as an index (0 or 1), for addressing memories.
    #[inline]
    pub const fn index(self) -> usize {
        self.as_u8() as usize
    }
}

impl TryFrom<u8> for Bit {
    type Error = SimError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            other => Err(SimError::InvalidBit(other)),
        }
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> Self {
        bit.as_u8()
    }
}

impl From<bool> for Bit {
    fn from(level: bool) -> Self {
        Self::from_bool(level)
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit.is_high()
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Converts a slice of integers into bits, failing on the first value outside {0,1}.
///
/// # Errors
///
/// Returns [`SimError::InvalidBit`] carrying the offending value.
pub fn bits_from_u8s(values: &[u8]) -> Result<Vec<Bit>, SimError> {
    values.iter().map(|&v| Bit::try_from(v)).collect()
}

/// Renders a bit sequence as a string of `0`/`1` characters, index 0 first.
pub fn format_bits(bits: &[Bit]) -> String {
    bits.iter().map(|b| if b.is_high() { '1' } else { '0' }).collect()
}
