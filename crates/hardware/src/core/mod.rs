//! CPU core.
//!
//! This module contains the gate primitives, the units built from them, the
//! stage functions that make up one instruction step, and the CPU that owns
//! all stateful elements.

/// CPU state and the step loop.
pub mod cpu;

/// Primitive logic gates (NOT, AND, OR, XOR) and the 2-to-4 decoder.
pub mod gates;

/// Execution path (latches, control signals, stages).
pub mod pipeline;

/// Functional units (flip-flop, register, ALU, control unit).
pub mod units;

pub use self::cpu::{Cpu, CpuSnapshot};
