//! Observable CPU state.

use std::fmt;

use serde::Serialize;

use crate::common::Bit;

/// The values shown by the driver after each step.
///
/// Only bit 0 of RAM\[0\] and RAM\[1\] is reported; the other bits are never
/// written by a program.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct CpuSnapshot {
    /// Accumulator A.
    pub a: Bit,
    /// Register B.
    pub b: Bit,
    /// Program counter.
    pub pc: Bit,
    /// RAM\[0\] bit 0.
    pub ram0: Bit,
    /// RAM\[1\] bit 0.
    pub ram1: Bit,
}

impl CpuSnapshot {
    /// Returns `(A, B, PC, RAM0, RAM1)` as integers.
    pub const fn as_tuple(&self) -> (u8, u8, u8, u8, u8) {
        (
            self.a.as_u8(),
            self.b.as_u8(),
            self.pc.as_u8(),
            self.ram0.as_u8(),
            self.ram1.as_u8(),
        )
    }
}

impl fmt::Display for CpuSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A={} B={} PC={} RAM0={} RAM1={}",
            self.a, self.b, self.pc, self.ram0, self.ram1
        )
    }
}
