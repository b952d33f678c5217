//! Instruction field extraction.

use crate::common::constants::{ADDR_BITS, OPCODE_BITS};
use crate::common::{Bit, Word8};
use crate::core::gates::{and, or};

/// Fields of a decoded instruction word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Instruction {
    /// Raw instruction word.
    pub word: Word8,
    /// Opcode field `[word[0], word[1]]`.
    pub opcode: [Bit; 2],
    /// Address field `[word[2], word[3]]` as stored.
    pub addr_field: [Bit; 2],
    /// Effective RAM address: `word[3] | (word[2] & 1)`.
    ///
    /// The 2-bit field collapses to one bit, so only RAM\[0\] and RAM\[1\]
    /// are reachable from a program.
    pub address: Bit,
}

/// Decodes an instruction word into its fields.
///
/// # Examples
///
/// ```
/// use gatesim_core::common::Bit::{One as I, Zero as O};
/// use gatesim_core::isa::decode::decode;
///
/// // STORE A -> RAM[1]
/// let inst = decode(&[O, I, O, I, O, O, O, O]);
/// assert_eq!(inst.opcode, [O, I]);
/// assert_eq!(inst.address, I);
/// ```
pub const fn decode(word: &Word8) -> Instruction {
    let opcode = [word[OPCODE_BITS[0]], word[OPCODE_BITS[1]]];
    let addr_field = [word[ADDR_BITS[0]], word[ADDR_BITS[1]]];
    let address = or(addr_field[1], and(addr_field[0], Bit::One));
    Instruction {
        word: *word,
        opcode,
        addr_field,
        address,
    }
}
