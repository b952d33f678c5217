//! Simulation statistics collection and reporting.
//!
//! This module tracks what the CPU actually executed. It provides:
//! 1. **Steps:** Total steps, and steps taken with the clock held low.
//! 2. **Instruction mix:** Counts per opcode.
//! 3. **Reachability:** How often each ROM address was fetched.

use std::fmt;

use serde::Serialize;

use crate::common::Bit;
use crate::common::constants::ROM_WORDS;
use crate::isa::Opcode;

/// Execution statistics for one CPU.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Steps executed.
    pub steps: u64,
    /// Steps executed with the clock low (no state committed).
    pub idle_steps: u64,
    /// LOAD instructions executed.
    pub inst_load: u64,
    /// STORE instructions executed.
    pub inst_store: u64,
    /// ADD instructions executed.
    pub inst_add: u64,
    /// XOR instructions executed.
    pub inst_xor: u64,
    /// Fetch count per ROM address.
    pub fetches: [u64; ROM_WORDS],
}

impl SimStats {
    /// Records one executed step.
    ///
    /// # Arguments
    ///
    /// * `addr`   - ROM address the instruction was fetched from.
    /// * `opcode` - Decoded instruction, `None` if the control lines were not one-hot.
    /// * `clk`    - Clock level the step ran with.
    pub fn record(&mut self, addr: usize, opcode: Option<Opcode>, clk: Bit) {
        self.steps += 1;
        if !clk.is_high() {
            self.idle_steps += 1;
        }
        if let Some(count) = self.fetches.get_mut(addr) {
            *count += 1;
        }
        match opcode {
            Some(Opcode::Load) => self.inst_load += 1,
            Some(Opcode::Store) => self.inst_store += 1,
            Some(Opcode::Add) => self.inst_add += 1,
            Some(Opcode::Xor) => self.inst_xor += 1,
            None => {}
        }
    }

    /// ROM addresses that have never been fetched.
    pub fn unvisited(&self) -> Vec<usize> {
        self.fetches
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count == 0)
            .map(|(addr, _)| addr)
            .collect()
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================")?;
        writeln!(f, "SIMULATION STATISTICS")?;
        writeln!(f, "==========================================")?;
        writeln!(f, "sim_steps                {}", self.steps)?;
        writeln!(f, "sim_idle_steps           {}", self.idle_steps)?;
        writeln!(f, "------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        writeln!(f, "  op.load                {}", self.inst_load)?;
        writeln!(f, "  op.store               {}", self.inst_store)?;
        writeln!(f, "  op.add                 {}", self.inst_add)?;
        writeln!(f, "  op.xor                 {}", self.inst_xor)?;
        writeln!(f, "------------------------------------------")?;
        writeln!(f, "ROM FETCHES")?;
        for (addr, count) in self.fetches.iter().enumerate() {
            writeln!(f, "  rom[{addr}]                 {count}")?;
        }
        write!(f, "==========================================")
    }
}
