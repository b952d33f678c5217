//! Control signals and ALU operation selectors.
//!
//! 1. **ALU selection:** [`AluOp`] names the four values of the 2-bit ALU selector.
//! 2. **Control lines:** [`ControlSignals`] holds the one-hot outputs of the control unit.

use serde::{Deserialize, Serialize};

use crate::common::Bit;
use crate::isa::Opcode;

/// Operation selected by the ALU's 2-bit selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AluOp {
    /// Selector `00`: bitwise AND.
    And,
    /// Selector `01`: bitwise OR.
    Or,
    /// Selector `10`: full-adder sum.
    Add,
    /// Selector `11`: bitwise XOR.
    Xor,
}

impl AluOp {
    /// Every operation, in selector order.
    pub const ALL: [Self; 4] = [Self::And, Self::Or, Self::Add, Self::Xor];

    /// Returns the selector lines `[op0, op1]` for this operation.
    pub const fn select(self) -> [Bit; 2] {
        match self {
            Self::And => [Bit::Zero, Bit::Zero],
            Self::Or => [Bit::Zero, Bit::One],
            Self::Add => [Bit::One, Bit::Zero],
            Self::Xor => [Bit::One, Bit::One],
        }
    }

    /// Names the operation for selector lines `[op0, op1]`.
    pub const fn from_select(sel: [Bit; 2]) -> Self {
        match sel {
            [Bit::Zero, Bit::Zero] => Self::And,
            [Bit::Zero, Bit::One] => Self::Or,
            [Bit::One, Bit::Zero] => Self::Add,
            [Bit::One, Bit::One] => Self::Xor,
        }
    }
}

/// One-hot control lines produced by the control unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ControlSignals {
    /// A <- RAM\[address\]\[0\].
    pub load: Bit,
    /// RAM\[address\] <- \[A, 0, 0, 0\].
    pub store: Bit,
    /// A <- A + B (adder sum).
    pub add: Bit,
    /// A <- A ^ B.
    pub xor: Bit,
}

impl ControlSignals {
    /// Number of asserted lines.
    pub const fn asserted(&self) -> usize {
        self.load.index() + self.store.index() + self.add.index() + self.xor.index()
    }

    /// Returns `true` when exactly one line is asserted.
    pub const fn is_one_hot(&self) -> bool {
        self.asserted() == 1
    }

    /// Names the instruction these signals select, if they are one-hot.
    pub const fn opcode(&self) -> Option<Opcode> {
        if !self.is_one_hot() {
            return None;
        }
        Some(if self.load.is_high() {
            Opcode::Load
        } else if self.store.is_high() {
            Opcode::Store
        } else if self.add.is_high() {
            Opcode::Add
        } else {
            Opcode::Xor
        })
    }
}
