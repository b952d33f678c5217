//! 4x4 RAM.
//!
//! Four [`Register4`] cells selected by a 2-bit address. Reads and writes
//! always move a whole 4-bit word.

use crate::common::constants::RAM_WORDS;
use crate::common::{Bit, SimError, SimResult, Word4};
use crate::core::units::Register4;

/// Random-access memory of four 4-bit words.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ram4 {
    cells: [Register4; RAM_WORDS],
}

impl Ram4 {
    /// Creates a RAM with every word cleared.
    pub const fn new() -> Self {
        Self {
            cells: [Register4::new(); RAM_WORDS],
        }
    }

    /// Loads `data` into the register at `addr`, gated by `clk`.
    ///
    /// # Errors
    ///
    /// * [`SimError::AddressOutOfRange`] if `addr >= 4`.
    /// * [`SimError::WordWidth`] if `data` is not 4 bits long.
    pub fn write(&mut self, addr: usize, data: &[Bit], clk: Bit) -> SimResult<()> {
        let cell = self.cells.get_mut(addr).ok_or(SimError::AddressOutOfRange {
            component: "ram",
            addr,
            size: RAM_WORDS,
        })?;
        cell.load(data, clk)
    }

    /// Returns the word stored at `addr`.
    ///
    /// # Errors
    ///
    /// [`SimError::AddressOutOfRange`] if `addr >= 4`.
    pub fn read(&self, addr: usize) -> SimResult<Word4> {
        self.cells
            .get(addr)
            .map(Register4::read)
            .ok_or(SimError::AddressOutOfRange {
                component: "ram",
                addr,
                size: RAM_WORDS,
            })
    }

    /// Returns every word, address 0 first.
    pub fn words(&self) -> [Word4; RAM_WORDS] {
        self.cells.map(|cell| cell.read())
    }
}
