//! Values handed between execution stages.
//!
//! `step()` runs the stages back to back, so each latch lives only for the
//! duration of one step. Keeping them explicit makes the ordering visible:
//! everything the execute stage uses was read before any flip-flop is clocked.

use crate::common::{Bit, Word8};
use crate::core::pipeline::signals::ControlSignals;
use crate::isa::decode::Instruction;

/// IF/ID latch: the fetched instruction and the PC it was fetched from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IfId {
    /// Program counter at fetch time.
    pub pc: Bit,
    /// Raw instruction word read from ROM.
    pub word: Word8,
}

/// ID/EX latch: the decoded instruction and its control signals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdEx {
    /// Program counter at fetch time.
    pub pc: Bit,
    /// Decoded instruction fields.
    pub inst: Instruction,
    /// One-hot control lines for the execute stage.
    pub ctrl: ControlSignals,
}
