//! Instruction Disassembler.
//!
//! Converts an 8-bit instruction word into assembly text for traces, the
//! CLI listing, and test diagnostics. The opcode is named by running it
//! through the control unit, so the listing always agrees with execution.
//!
//! # Usage
//!
//! ```
//! use gatesim_core::isa::disasm::disassemble;
//! use gatesim_core::isa::program::DEMO_PROGRAM;
//!
//! assert_eq!(disassemble(&DEMO_PROGRAM[0]), "LOAD RAM[0] -> A");
//! assert_eq!(disassemble(&DEMO_PROGRAM[2]), "STORE A -> RAM[1]");
//! ```

use crate::common::Word8;
use crate::common::bit::format_bits;
use crate::core::units::ControlUnit;
use crate::isa::Opcode;
use crate::isa::decode::decode;

/// Disassembles an instruction word.
///
/// Memory operands show the effective address, not the raw field.
pub fn disassemble(word: &Word8) -> String {
    let inst = decode(word);
    let addr = inst.address.as_u8();
    match ControlUnit::decode(inst.opcode).opcode() {
        Some(Opcode::Load) => format!("LOAD RAM[{addr}] -> A"),
        Some(Opcode::Store) => format!("STORE A -> RAM[{addr}]"),
        Some(Opcode::Add) => "ADD A, B -> A".to_string(),
        Some(Opcode::Xor) => "XOR A, B -> A".to_string(),
        None => "unknown".to_string(),
    }
}

/// Formats a word in the grouped listing form `oo aa uuuu`.
pub fn format_word(word: &Word8) -> String {
    let bits = format_bits(word);
    format!("{} {} {}", &bits[0..2], &bits[2..4], &bits[4..8])
}
