//! 4-bit register.
//!
//! Four independent flip-flops sharing one clock line. A load presents all
//! four data bits in parallel.

use crate::common::constants::REGISTER_WIDTH;
use crate::common::{Bit, SimError, SimResult, Word4};

use super::flipflop::DFlipFlop;

/// Parallel-load register of [`REGISTER_WIDTH`] flip-flops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Register4 {
    cells: [DFlipFlop; REGISTER_WIDTH],
}

impl Register4 {
    /// Creates a register with every bit cleared.
    pub const fn new() -> Self {
        Self {
            cells: [DFlipFlop::new(); REGISTER_WIDTH],
        }
    }

    /// Clocks each flip-flop with the matching bit of `bits`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::WordWidth`] if `bits` is not exactly
    /// [`REGISTER_WIDTH`] long; no flip-flop is clocked in that case.
    pub fn load(&mut self, bits: &[Bit], clk: Bit) -> SimResult<()> {
        if bits.len() != REGISTER_WIDTH {
            return Err(SimError::WordWidth {
                component: "register",
                expected: REGISTER_WIDTH,
                actual: bits.len(),
            });
        }
        for (cell, &d) in self.cells.iter_mut().zip(bits) {
            cell.clock(d, clk);
        }
        Ok(())
    }

    /// Returns the current contents, bit 0 first.
    pub fn read(&self) -> Word4 {
        self.cells.map(|cell| cell.read())
    }
}
