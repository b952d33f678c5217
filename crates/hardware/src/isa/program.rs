//! Built-in demo program.

use crate::common::Bit::{One as I, Zero as O};
use crate::common::Word8;
use crate::common::constants::ROM_WORDS;

/// The program loaded into ROM unless another one is supplied.
///
/// | addr | word        | meaning            |
/// |------|-------------|--------------------|
/// | 0    | `00 00 0000` | LOAD RAM\[0\] -> A |
/// | 1    | `10 00 0000` | ADD A, B -> A      |
/// | 2    | `01 01 0000` | STORE A -> RAM\[1\] |
/// | 3    | `11 00 0000` | XOR A, B -> A      |
/// | 4-7  | `00 00 0000` | LOAD RAM\[0\] -> A |
pub const DEMO_PROGRAM: [Word8; ROM_WORDS] = [
    [O, O, O, O, O, O, O, O],
    [I, O, O, O, O, O, O, O],
    [O, I, O, I, O, O, O, O],
    [I, I, O, O, O, O, O, O],
    [O, O, O, O, O, O, O, O],
    [O, O, O, O, O, O, O, O],
    [O, O, O, O, O, O, O, O],
    [O, O, O, O, O, O, O, O],
];
