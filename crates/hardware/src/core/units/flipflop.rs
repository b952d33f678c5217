//! Single-bit storage element.
//!
//! The flip-flop is level-sensitive: while the clock argument is high every
//! `clock` call copies `d` into `q`. There is no edge detection, so clocking
//! twice with the clock held high is the same as clocking once with the last
//! value.

use crate::common::Bit;

/// Level-sensitive D flip-flop holding one bit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DFlipFlop {
    q: Bit,
}

impl DFlipFlop {
    /// Creates a flip-flop with `q = 0`.
    pub const fn new() -> Self {
        Self { q: Bit::Zero }
    }

    /// Captures `d` when `clk` is high; holds the current value otherwise.
    #[inline]
    pub const fn clock(&mut self, d: Bit, clk: Bit) {
        if clk.is_high() {
            self.q = d;
        }
    }

    /// Returns the stored bit.
    #[inline]
    pub const fn read(&self) -> Bit {
        self.q
    }
}
