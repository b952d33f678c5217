//! Memories attached to the CPU.
//!
//! The CPU has no bus: it owns its RAM and ROM directly and addresses them by
//! index. This module groups the two memory devices.

/// RAM and ROM devices.
pub mod memory;

pub use memory::{Ram4, Rom8};
