//! Common types used throughout the gate-level simulator.
//!
//! This module provides the building blocks shared by every component:
//! 1. **Signals:** The two-valued [`Bit`] and the fixed-width word aliases.
//! 2. **Constants:** Widths and sizes of the register file, RAM, and ROM.
//! 3. **Error Handling:** Contract-violation errors raised at component boundaries.

/// Two-valued signal type and word aliases.
pub mod bit;

/// Common constants (word widths and memory sizes).
pub mod constants;

/// Error types for component contract violations.
pub mod error;

pub use bit::{Bit, Word4, Word8};
pub use error::{SimError, SimResult};
