/// 4x4 RAM.
pub mod ram;

/// 8x8 ROM.
pub mod rom;
