//! Program counter update.

use crate::common::Bit;
use crate::core::Cpu;
use crate::core::gates::xor;

/// Advances the 1-bit program counter: `PC <- PC ^ 1`.
///
/// `pc` is the value read at fetch time. A single-bit counter toggles between
/// addresses 0 and 1, so ROM words 2 and above are never fetched.
///
/// # Arguments
///
/// * `cpu` - Mutable CPU state.
/// * `pc`  - Program counter value latched by the fetch stage.
///
/// # Returns
///
/// The value presented to the PC flip-flop.
pub fn pc_stage(cpu: &mut Cpu, pc: Bit) -> Bit {
    let next = xor(pc, Bit::One);
    let clk = cpu.clock();
    cpu.pc.clock(next, clk);
    next
}
