//! Primitive logic gates.
//!
//! Every other component in the simulator is composed from these four
//! functions. They are total and pure: any pair of [`Bit`]s maps to a [`Bit`].

use crate::common::Bit;

/// Inverter: `1 - a`.
#[inline]
pub const fn not(a: Bit) -> Bit {
    match a {
        Bit::Zero => Bit::One,
        Bit::One => Bit::Zero,
    }
}

/// Two-input AND.
#[inline]
pub const fn and(a: Bit, b: Bit) -> Bit {
    match (a, b) {
        (Bit::One, Bit::One) => Bit::One,
        _ => Bit::Zero,
    }
}

/// Two-input OR.
#[inline]
pub const fn or(a: Bit, b: Bit) -> Bit {
    match (a, b) {
        (Bit::Zero, Bit::Zero) => Bit::Zero,
        _ => Bit::One,
    }
}

/// Two-input exclusive OR.
#[inline]
pub const fn xor(a: Bit, b: Bit) -> Bit {
    match (a, b) {
        (Bit::Zero, Bit::One) | (Bit::One, Bit::Zero) => Bit::One,
        _ => Bit::Zero,
    }
}

/// 2-to-4 line decoder built from `and`/`not`.
///
/// `sel` is `[s0, s1]`; the returned lines correspond to the selector values
/// `00`, `01`, `10`, `11` in that order. Exactly one line is high.
#[inline]
pub const fn decoder_2to4(sel: [Bit; 2]) -> [Bit; 4] {
    let [s0, s1] = sel;
    [
        and(not(s0), not(s1)),
        and(not(s0), s1),
        and(s0, not(s1)),
        and(s0, s1),
    ]
}
