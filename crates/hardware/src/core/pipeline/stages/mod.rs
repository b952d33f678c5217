//! Stage implementations.
//!
//! The four stages run in this order inside `Cpu::step`:
//! 1. **Fetch:** Reads the PC and the ROM word it addresses.
//! 2. **Decode:** Splits the word into fields and derives the control signals.
//! 3. **Execute:** Performs LOAD, ADD, XOR and STORE as the signals dictate.
//! 4. **PC update:** Advances the program counter through an XOR gate.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Program counter update stage implementation.
pub mod pc;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// PC update entry point.
pub use pc::pc_stage;
