//! Instruction set of the single-bit CPU.
//!
//! Instruction words are 8 bits wide, laid out as
//! `[opcode(2) | addr(2) | unused(4)]` with bit 0 written first.
//!
//! | opcode | instruction              |
//! |--------|--------------------------|
//! | `00`   | LOAD  `A <- RAM[addr]`   |
//! | `01`   | STORE `RAM[addr] <- A`   |
//! | `10`   | ADD   `A <- A + B`       |
//! | `11`   | XOR   `A <- A ^ B`       |

use std::fmt;

use serde::{Deserialize, Serialize};

/// Instruction field extraction and address derivation.
pub mod decode;

/// Instruction disassembler for tracing and listings.
pub mod disasm;

/// Built-in demo program.
pub mod program;

/// Instruction named by an opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    /// `A <- RAM[addr][0]`.
    Load,
    /// `RAM[addr] <- [A, 0, 0, 0]`.
    Store,
    /// `A <- A + B` (full-adder sum, carry dropped).
    Add,
    /// `A <- A ^ B`.
    Xor,
}

impl Opcode {
    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Load => "LOAD",
            Self::Store => "STORE",
            Self::Add => "ADD",
            Self::Xor => "XOR",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
