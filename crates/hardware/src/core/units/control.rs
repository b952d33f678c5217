//! Instruction control unit.
//!
//! Decodes the 2-bit opcode field of an instruction into the four one-hot
//! control lines. The decode is a gate-level 2-to-4 decoder, evaluated
//! independently of the ALU's own operation selector.

use crate::common::Bit;
use crate::core::gates::decoder_2to4;
use crate::core::pipeline::signals::ControlSignals;

/// Stateless opcode decoder.
#[derive(Clone, Copy, Debug, Default)]
pub struct ControlUnit;

impl ControlUnit {
    /// Decodes `opcode = [o0, o1]` into control signals.
    ///
    /// | o0 | o1 | asserted |
    /// |----|----|----------|
    /// | 0  | 0  | LOAD     |
    /// | 0  | 1  | STORE    |
    /// | 1  | 0  | ADD      |
    /// | 1  | 1  | XOR      |
    pub const fn decode(opcode: [Bit; 2]) -> ControlSignals {
        let [load, store, add, xor] = decoder_2to4(opcode);
        ControlSignals {
            load,
            store,
            add,
            xor,
        }
    }
}
