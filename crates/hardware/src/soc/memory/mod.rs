//! Memory devices.
//!
//! This module provides the two memories of the system:
//! 1. **RAM:** Four 4-bit registers, written through their clocked `load`.
//! 2. **ROM:** Eight fixed 8-bit instruction words.

/// 4x4 register-file RAM.
pub mod ram;

/// 8x8 program ROM.
pub mod rom;

pub use ram::Ram4;
pub use rom::Rom8;
