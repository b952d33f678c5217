//! Main Execution Loop.
//!
//! This module implements one instruction step of the CPU. It performs, in order:
//! 1. **Fetch:** PC and ROM word.
//! 2. **Decode:** Opcode, effective address, control signals.
//! 3. **Execute:** LOAD / ADD / XOR / STORE, clocked at the CPU's clock level.
//! 4. **PC update:** `PC <- PC ^ 1`.
//! 5. **Observability:** Statistics and tracing events.

use tracing::{debug, info};

use super::Cpu;
use crate::common::SimResult;
use crate::core::pipeline::stages::{decode_stage, execute_stage, fetch_stage, pc_stage};
use crate::isa::disasm::{disassemble, format_word};

impl Cpu {
    /// Executes one instruction.
    ///
    /// All reads that an instruction depends on happen before the flip-flop
    /// they feed is clocked, and the PC is advanced last.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::common::SimError`] if a stage violates a memory
    /// contract. Errors can only arise before the first write of the step.
    pub fn step(&mut self) -> SimResult<()> {
        let if_id = fetch_stage(self)?;
        let id_ex = decode_stage(&if_id);
        execute_stage(self, &id_ex)?;
        let pc_next = pc_stage(self, if_id.pc);

        let opcode = id_ex.ctrl.opcode();
        self.stats.record(if_id.pc.index(), opcode, self.clock());

        debug!(
            pc = if_id.pc.as_u8(),
            word = %format_word(&if_id.word),
            op = ?opcode,
            a = self.a.read().as_u8(),
            pc_next = pc_next.as_u8(),
            "step"
        );
        if self.trace {
            info!(
                "{}: {}  {}",
                if_id.pc,
                format_word(&if_id.word),
                disassemble(&if_id.word)
            );
        }
        Ok(())
    }
}
