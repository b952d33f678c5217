//! Instruction Decode (ID) Stage.
//!
//! Splits the fetched word into its fields and runs the opcode through the
//! control unit. Pure combinational logic; nothing is clocked here.

use crate::core::pipeline::latches::{IdEx, IfId};
use crate::core::units::ControlUnit;
use crate::isa::decode::decode;

/// Executes the instruction decode stage.
///
/// # Arguments
///
/// * `if_id` - Latch produced by the fetch stage.
///
/// # Returns
///
/// The ID/EX latch with decoded fields and one-hot control signals.
pub const fn decode_stage(if_id: &IfId) -> IdEx {
    let inst = decode(&if_id.word);
    let ctrl = ControlUnit::decode(inst.opcode);
    IdEx {
        pc: if_id.pc,
        inst,
        ctrl,
    }
}
