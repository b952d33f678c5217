//! CPU Core Definition and Initialization.
//!
//! This module defines the `Cpu` structure, the container for the whole
//! machine state. It coordinates the following:
//! 1. **State:** Accumulator flip-flops A and B, and the 1-bit program counter.
//! 2. **Memories:** The 4x4 RAM and the 8x8 program ROM.
//! 3. **Clock:** The level applied to every write during a step.
//! 4. **Observation:** Read-only snapshots and execution statistics.

/// Step loop: fetch, decode, execute, PC update.
pub mod execution;

/// Read-only state snapshots for display.
pub mod snapshot;

use tracing::debug;

use crate::common::bit::format_bits;
use crate::common::{Bit, SimResult};
use crate::config::Config;
use crate::core::units::DFlipFlop;
use crate::soc::{Ram4, Rom8};
use crate::stats::SimStats;

pub use self::snapshot::CpuSnapshot;

/// Main CPU structure containing all machine state.
///
/// Every stateful element is owned here; nothing is shared between CPU
/// instances.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// Accumulator A.
    pub a: DFlipFlop,
    /// Operand register B. No instruction writes it.
    pub b: DFlipFlop,
    /// Program counter (one bit wide).
    pub pc: DFlipFlop,
    /// Data memory.
    pub ram: Ram4,
    /// Program memory.
    pub rom: Rom8,
    /// Emit an `info` event per executed instruction.
    pub trace: bool,
    /// Execution statistics.
    pub stats: SimStats,
    clk: Bit,
}

impl Cpu {
    /// Creates a CPU from the given configuration.
    ///
    /// The ROM is filled from `config.program` (or the demo program) and the
    /// RAM is preloaded from `config.memory.initial_ram`. Preloading always
    /// clocks with a high level; `config.general.clock` only governs steps.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::common::SimError`] if the program or an initial RAM
    /// entry violates the ROM or RAM contract.
    pub fn new(config: &Config) -> SimResult<Self> {
        let rom = Rom8::from_config(config)?;

        let mut ram = Ram4::new();
        for init in &config.memory.initial_ram {
            ram.write(init.addr, &init.data, Bit::One)?;
            debug!(addr = init.addr, data = %format_bits(&init.data), "RAM preload");
        }

        Ok(Self {
            a: DFlipFlop::new(),
            b: DFlipFlop::new(),
            pc: DFlipFlop::new(),
            ram,
            rom,
            trace: config.general.trace_instructions,
            stats: SimStats::default(),
            clk: config.general.clock,
        })
    }

    /// Returns the clock level applied to writes during a step.
    pub const fn clock(&self) -> Bit {
        self.clk
    }

    /// Sets the clock level for subsequent steps.
    ///
    /// With the level low, `step` still fetches and decodes but no flip-flop
    /// changes.
    pub const fn set_clock(&mut self, clk: Bit) {
        self.clk = clk;
    }

    /// Captures the observable state without modifying anything.
    pub fn snapshot(&self) -> CpuSnapshot {
        let ram = self.ram.words();
        CpuSnapshot {
            a: self.a.read(),
            b: self.b.read(),
            pc: self.pc.read(),
            ram0: ram[0][0],
            ram1: ram[1][0],
        }
    }
}
