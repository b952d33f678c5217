//! Program listing loader.
//!
//! A listing holds one 8-bit ROM word per line, bit 0 first. It is parsed as
//! follows:
//! 1. **Comments:** Everything after `#` is ignored.
//! 2. **Blank lines:** Skipped.
//! 3. **Whitespace:** Allowed between bits, so `00 01 0000` is one word.
//! 4. **Padding:** Listings shorter than eight words are padded with zero words.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::common::constants::{INSTRUCTION_WIDTH, ROM_WORDS};
use crate::common::{Bit, SimError, Word8};

/// Errors raised while reading a program listing.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The listing file could not be read.
    #[error("failed to read program {path}: {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A character other than `0`, `1` or whitespace appeared in a word.
    #[error("line {line}: invalid character {found:?}")]
    InvalidChar {
        /// 1-based line number.
        line: usize,
        /// Offending character.
        found: char,
    },

    /// A word did not have exactly eight bits.
    #[error("line {line}: expected 8 bits, found {actual}")]
    WordWidth {
        /// 1-based line number.
        line: usize,
        /// Number of bits found.
        actual: usize,
    },

    /// The listing does not fit in ROM.
    #[error(transparent)]
    Sim(#[from] SimError),
}

/// Parses a program listing into exactly eight ROM words.
///
/// # Arguments
///
/// * `text` - Listing contents.
///
/// # Returns
///
/// The ROM image, padded with zero words.
///
/// # Errors
///
/// [`LoadError::InvalidChar`] or [`LoadError::WordWidth`] for a malformed line,
/// [`LoadError::Sim`] with [`SimError::ProgramTooLarge`] for more than eight
/// words.
pub fn parse_program(text: &str) -> Result<[Word8; ROM_WORDS], LoadError> {
    let mut words = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let body = raw.split_once('#').map_or(raw, |(head, _)| head);

        let mut bits = Vec::with_capacity(INSTRUCTION_WIDTH);
        for c in body.chars().filter(|c| !c.is_whitespace()) {
            match c {
                '0' => bits.push(Bit::Zero),
                '1' => bits.push(Bit::One),
                found => return Err(LoadError::InvalidChar { line, found }),
            }
        }
        if bits.is_empty() {
            continue;
        }

        let word: Word8 = bits
            .as_slice()
            .try_into()
            .map_err(|_| LoadError::WordWidth {
                line,
                actual: bits.len(),
            })?;
        words.push(word);
    }

    if words.len() > ROM_WORDS {
        return Err(SimError::ProgramTooLarge {
            capacity: ROM_WORDS,
            actual: words.len(),
        }
        .into());
    }

    let mut rom = [[Bit::Zero; INSTRUCTION_WIDTH]; ROM_WORDS];
    for (slot, word) in rom.iter_mut().zip(words) {
        *slot = word;
    }
    Ok(rom)
}

/// Reads and parses a program listing from disk.
///
/// # Errors
///
/// [`LoadError::Io`] if the file cannot be read, otherwise as [`parse_program`].
pub fn load_program(path: impl AsRef<Path>) -> Result<[Word8; ROM_WORDS], LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_program(&text)
}
