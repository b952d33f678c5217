//! Instruction execution path.
//!
//! The CPU is not pipelined: one `step()` runs every stage to completion in a
//! fixed order before returning. The stages are still kept apart so each one
//! reads like the block of hardware it models.
//! 1. **Latches:** Values handed from one stage to the next.
//! 2. **Signals:** ALU operation selectors and the one-hot control lines.
//! 3. **Stages:** Fetch, decode, execute and program-counter update.

/// Values carried between stages (IF/ID, ID/EX).
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// Stage implementations (fetch, decode, execute, pc update).
pub mod stages;
