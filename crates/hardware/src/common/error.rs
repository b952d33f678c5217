//! Contract-violation errors.
//!
//! The simulation has no external input beyond its program and initial RAM, so
//! every error is a caller violating a component's contract. Each variant names
//! the component that rejected the input, and is raised at that component's
//! boundary before any of its state is touched.

use thiserror::Error;

/// Errors raised by simulator components.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimError {
    /// An integer outside {0,1} was offered as a bit.
    #[error("invalid bit value {0}: expected 0 or 1")]
    InvalidBit(u8),

    /// A bit sequence of the wrong length was offered as a word.
    #[error("{component}: expected a {expected}-bit word, got {actual} bits")]
    WordWidth {
        /// Component that rejected the word.
        component: &'static str,
        /// Required word width.
        expected: usize,
        /// Width that was supplied.
        actual: usize,
    },

    /// A memory address past the end of the addressed component.
    #[error("{component}: address {addr} out of range (size {size})")]
    AddressOutOfRange {
        /// Component that rejected the address.
        component: &'static str,
        /// Address that was supplied.
        addr: usize,
        /// Number of addressable words.
        size: usize,
    },

    /// A program with more words than the ROM holds.
    #[error("program has {actual} words but the ROM holds {capacity}")]
    ProgramTooLarge {
        /// ROM capacity in words.
        capacity: usize,
        /// Number of words supplied.
        actual: usize,
    },

    /// A run longer than the simulator records in one trace.
    #[error("requested {requested} steps but a run is limited to {limit}")]
    StepLimit {
        /// Steps requested.
        requested: usize,
        /// Largest accepted step count.
        limit: usize,
    },
}

/// Result alias used by every fallible component operation.
pub type SimResult<T> = Result<T, SimError>;
