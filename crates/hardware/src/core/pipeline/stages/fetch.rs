//! Instruction Fetch (IF) Stage.
//!
//! Reads the program counter flip-flop and fetches the ROM word it
//! addresses. Nothing is clocked here.

use tracing::trace;

use crate::common::SimResult;
use crate::common::bit::format_bits;
use crate::core::Cpu;
use crate::core::pipeline::latches::IfId;

/// Executes the instruction fetch stage.
///
/// # Arguments
///
/// * `cpu` - CPU state; only read.
///
/// # Returns
///
/// The IF/ID latch holding the PC and the fetched word.
///
/// # Errors
///
/// Propagates [`crate::common::SimError::AddressOutOfRange`] from the ROM.
/// A 1-bit PC can only produce addresses 0 and 1, so this cannot happen with
/// the built-in ROM size.
pub fn fetch_stage(cpu: &Cpu) -> SimResult<IfId> {
    let pc = cpu.pc.read();
    let word = cpu.rom.read(pc.index())?;
    trace!(pc = pc.as_u8(), word = %format_bits(&word), "IF");
    Ok(IfId { pc, word })
}
