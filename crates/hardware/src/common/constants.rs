//! System-wide constants.
//!
//! Widths of the datapath words and the sizes of the two memories. Every
//! component validates its inputs against these values.

/// Number of flip-flops in a register (and bits in a RAM word).
pub const REGISTER_WIDTH: usize = 4;

/// Number of registers in the RAM (addressed by 2 bits).
pub const RAM_WORDS: usize = 4;

/// Number of words in the program ROM.
pub const ROM_WORDS: usize = 8;

/// Width of the program counter in bits.
pub const PC_WIDTH: u32 = 1;

/// Number of ROM words the program counter can address. Words at or above
/// this index are never fetched.
pub const REACHABLE_ROM_WORDS: usize = 1 << PC_WIDTH;

/// Number of bits in an instruction word.
pub const INSTRUCTION_WIDTH: usize = 8;

/// Bit positions of the opcode field inside an instruction word.
pub const OPCODE_BITS: [usize; 2] = [0, 1];

/// Bit positions of the address field inside an instruction word.
pub const ADDR_BITS: [usize; 2] = [2, 3];

/// Largest step count a single `Simulator::run` accepts.
pub const MAX_RUN_STEPS: usize = 1 << 20;
