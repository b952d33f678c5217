//! Gate-level single-bit CPU simulator library.
//!
//! This crate models a tiny CPU built entirely from logic gates, with the following:
//! 1. **Gates:** NOT, AND, OR, XOR and a 2-to-4 decoder as pure functions over [`common::Bit`].
//! 2. **Units:** Level-sensitive D flip-flops, a 4-bit register, a full adder and a 1-bit ALU.
//! 3. **Memory:** A 4x4 RAM of registers and an 8x8 program ROM.
//! 4. **Core:** Fetch, decode, execute and PC-update stages wired into a [`Cpu`].
//! 5. **Simulation:** Configuration, program loading, statistics and snapshot traces.

/// Signal type, word widths and errors.
pub mod common;
/// Simulator configuration (defaults and JSON loading).
pub mod config;
/// CPU core (gates, units, pipeline stages, CPU state).
pub mod core;
/// Instruction format (decode, disassembly, demo program).
pub mod isa;
/// Simulator driver and program loader.
pub mod sim;
/// RAM and ROM.
pub mod soc;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Main CPU type; holds flip-flops, memories and stats.
pub use crate::core::{Cpu, CpuSnapshot};
/// Top-level driver owning a CPU.
pub use crate::sim::{Simulator, Trace};
