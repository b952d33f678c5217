//! Sequential and combinational units composed from the primitive gates.
//!
//! This module contains the storage elements (flip-flop, register), the
//! arithmetic logic unit with its full adder, and the control unit that turns
//! an opcode into one-hot control signals.

/// Arithmetic Logic Unit and full adder.
pub mod alu;

/// Instruction control unit (opcode to one-hot signals).
pub mod control;

/// Level-sensitive D flip-flop.
pub mod flipflop;

/// 4-bit parallel register built from flip-flops.
pub mod register;

pub use alu::{Alu, AluOutput};
pub use control::ControlUnit;
pub use flipflop::DFlipFlop;
pub use register::Register4;
