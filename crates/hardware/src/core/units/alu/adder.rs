//! One-bit full adder.

use crate::common::Bit;
use crate::core::gates::{and, or, xor};

/// Outputs of a full adder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdderOutput {
    /// `a ^ b ^ cin`.
    pub sum: Bit,
    /// `(a & b) | ((a ^ b) & cin)`.
    pub cout: Bit,
}

/// Adds three bits using two XOR, two AND and one OR gate.
///
/// # Examples
///
/// ```
/// use gatesim_core::common::Bit;
/// use gatesim_core::core::units::alu::adder::full_adder;
///
/// let out = full_adder(Bit::One, Bit::One, Bit::Zero);
/// assert_eq!(out.sum, Bit::Zero);
/// assert_eq!(out.cout, Bit::One);
/// ```
#[inline]
pub const fn full_adder(a: Bit, b: Bit, cin: Bit) -> AdderOutput {
    let s1 = xor(a, b);
    let sum = xor(s1, cin);

    let c1 = and(a, b);
    let c2 = and(s1, cin);
    let cout = or(c1, c2);

    AdderOutput { sum, cout }
}
