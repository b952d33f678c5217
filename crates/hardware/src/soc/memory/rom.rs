//! 8x8 program ROM.
//!
//! The ROM is filled once at construction and has no write path afterwards.

use crate::common::constants::{INSTRUCTION_WIDTH, ROM_WORDS};
use crate::common::{Bit, SimError, SimResult, Word8};
use crate::config::Config;
use crate::isa::program::DEMO_PROGRAM;

/// Read-only memory of eight 8-bit instruction words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rom8 {
    words: [Word8; ROM_WORDS],
}

impl Default for Rom8 {
    fn default() -> Self {
        Self::new()
    }
}

impl Rom8 {
    /// Creates a ROM holding the built-in demo program.
    pub const fn new() -> Self {
        Self {
            words: DEMO_PROGRAM,
        }
    }

    /// Creates a ROM from a program listing.
    ///
    /// Programs shorter than eight words are padded with all-zero words
    /// (`LOAD RAM[0]`).
    ///
    /// # Errors
    ///
    /// * [`SimError::ProgramTooLarge`] if more than eight words are given.
    /// * [`SimError::WordWidth`] if any word is not 8 bits long.
    pub fn from_program<W: AsRef<[Bit]>>(program: &[W]) -> SimResult<Self> {
        if program.len() > ROM_WORDS {
            return Err(SimError::ProgramTooLarge {
                capacity: ROM_WORDS,
                actual: program.len(),
            });
        }

        let mut words = [[Bit::Zero; INSTRUCTION_WIDTH]; ROM_WORDS];
        for (slot, word) in words.iter_mut().zip(program) {
            let bits = word.as_ref();
            *slot = bits.try_into().map_err(|_| SimError::WordWidth {
                component: "rom",
                expected: INSTRUCTION_WIDTH,
                actual: bits.len(),
            })?;
        }
        Ok(Self { words })
    }

    /// Creates the ROM a configuration describes: its `program`, or the demo
    /// program when none is given.
    ///
    /// # Errors
    ///
    /// As [`Rom8::from_program`].
    pub fn from_config(config: &Config) -> SimResult<Self> {
        match &config.program {
            Some(words) => Self::from_program(words),
            None => Ok(Self::new()),
        }
    }

    /// Returns the word stored at `addr`.
    ///
    /// # Errors
    ///
    /// [`SimError::AddressOutOfRange`] if `addr >= 8`.
    pub fn read(&self, addr: usize) -> SimResult<Word8> {
        self.words
            .get(addr)
            .copied()
            .ok_or(SimError::AddressOutOfRange {
                component: "rom",
                addr,
                size: ROM_WORDS,
            })
    }

    /// Returns the full program, address 0 first.
    pub const fn words(&self) -> &[Word8; ROM_WORDS] {
        &self.words
    }
}
