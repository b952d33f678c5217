//! Instruction Execute (EX) Stage.
//!
//! Drives RAM, the ALU and the A flip-flop according to the control signals.
//! The four signals are checked one after another as independent conditions;
//! because they are one-hot only one of them fires per instruction.

use tracing::trace;

use crate::common::bit::format_bits;
use crate::common::{Bit, SimResult};
use crate::core::Cpu;
use crate::core::pipeline::latches::IdEx;
use crate::core::pipeline::signals::AluOp;
use crate::core::units::Alu;

/// Executes the instruction execute stage.
///
/// * LOAD:  `A <- RAM[address][0]`
/// * ADD:   `A <- Alu(A, B, 0, ADD).result`
/// * XOR:   `A <- Alu(A, B, 0, XOR).result`
/// * STORE: `RAM[address] <- [A, 0, 0, 0]`
///
/// Every write uses the CPU's current clock level, so with the clock low the
/// stage reads but never changes state.
///
/// # Arguments
///
/// * `cpu`   - Mutable CPU state.
/// * `id_ex` - Latch produced by the decode stage.
///
/// # Errors
///
/// Propagates RAM address errors. The derived address is a single bit and
/// always in range for the 4-word RAM.
pub fn execute_stage(cpu: &mut Cpu, id_ex: &IdEx) -> SimResult<()> {
    let ctrl = id_ex.ctrl;
    let addr = id_ex.inst.address.index();
    let clk = cpu.clock();

    if ctrl.load.is_high() {
        let data = cpu.ram.read(addr)?;
        trace!(addr, data = %format_bits(&data), "EX load");
        cpu.a.clock(data[0], clk);
    }

    if ctrl.add.is_high() {
        let alu = Alu::execute_op(cpu.a.read(), cpu.b.read(), Bit::Zero, AluOp::Add);
        trace!(result = alu.result.as_u8(), cout = alu.cout.as_u8(), "EX add");
        cpu.a.clock(alu.result, clk);
    }

    if ctrl.xor.is_high() {
        let alu = Alu::execute_op(cpu.a.read(), cpu.b.read(), Bit::Zero, AluOp::Xor);
        trace!(result = alu.result.as_u8(), cout = alu.cout.as_u8(), "EX xor");
        cpu.a.clock(alu.result, clk);
    }

    if ctrl.store.is_high() {
        let data = [cpu.a.read(), Bit::Zero, Bit::Zero, Bit::Zero];
        trace!(addr, data = %format_bits(&data), "EX store");
        cpu.ram.write(addr, &data, clk)?;
    }

    Ok(())
}
